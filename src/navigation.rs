use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Solutions,
    Industries,
    About,
    Contact,
    Privacy,
    Terms,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Solutions,
        Page::Industries,
        Page::About,
        Page::Contact,
        Page::Privacy,
        Page::Terms,
    ];

    /// Pages listed in the header and footer navigation.
    pub const PRIMARY: [Page; 5] = [
        Page::Home,
        Page::Solutions,
        Page::Industries,
        Page::About,
        Page::Contact,
    ];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Solutions => "solutions",
            Self::Industries => "industries",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Privacy => "privacy",
            Self::Terms => "terms",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            other => format!("/{}", other.as_slug()),
        }
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Home => "Home",
            Self::Solutions => "Solutions",
            Self::Industries => "Industries",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown page: {0}")]
pub struct PageParseError(pub String);

impl FromStr for Page {
    type Err = PageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_matches('/').to_ascii_lowercase();
        match normalized.as_str() {
            "" | "home" | "index" => Ok(Self::Home),
            "solutions" => Ok(Self::Solutions),
            "industries" => Ok(Self::Industries),
            "about" => Ok(Self::About),
            "contact" => Ok(Self::Contact),
            "privacy" => Ok(Self::Privacy),
            "terms" => Ok(Self::Terms),
            _ => Err(PageParseError(s.to_string())),
        }
    }
}

/// Outcome of a page transition. Every transition asks the presentation layer
/// to scroll back to the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: Page,
    pub to: Page,
    pub scroll_to_top: bool,
}

impl Transition {
    pub fn entered(&self, page: Page) -> bool {
        self.to == page && self.from != page
    }
}

/// Parameters handed from one page to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carried {
    pub need: Option<String>,
    pub open_solution_id: Option<String>,
}

impl Carried {
    pub fn is_empty(&self) -> bool {
        self.need.is_none() && self.open_solution_id.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub current_page: Page,
    #[serde(default)]
    pub carried_need: Option<String>,
    #[serde(default)]
    pub open_solution_id: Option<String>,
}

impl NavigationState {
    pub fn new(initial_page: Page) -> Self {
        Self {
            current_page: initial_page,
            carried_need: None,
            open_solution_id: None,
        }
    }

    pub fn navigate_to(&mut self, page: Page) -> Transition {
        let from = self.current_page;
        self.current_page = page;
        debug!("navigate {} -> {}", from.as_slug(), page.as_slug());
        Transition {
            from,
            to: page,
            scroll_to_top: true,
        }
    }

    /// Carries `need` into the finder. A blank need carries nothing, which the
    /// finder reads as `All`.
    pub fn navigate_to_solutions_with_need(&mut self, need: &str) -> Transition {
        let trimmed = need.trim();
        self.carried_need = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.navigate_to(Page::Solutions)
    }

    pub fn open_solution(&mut self, id: &str) -> Transition {
        self.open_solution_id = Some(id.to_string());
        self.navigate_to(Page::Solutions)
    }

    pub fn has_carried(&self) -> bool {
        self.carried_need.is_some() || self.open_solution_id.is_some()
    }

    pub fn take_carried(&mut self) -> Carried {
        Carried {
            need: self.carried_need.take(),
            open_solution_id: self.open_solution_id.take(),
        }
    }
}
