//! The one owner of all UI state. Every user action goes through
//! [`Session::dispatch`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, SolutionRecord};
use crate::finder::{filter, Facet, FilterState, TierFilter};
use crate::navigation::{NavigationState, Page, Transition};
use crate::viewer::{DetailViewer, Key, KeyListeners};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Navigate { page: Page },
    /// A need tile outside the finder.
    PickNeed { need: String },
    OpenSolution { id: String },
    SetQuery { query: String },
    SetTier { tier: TierFilter },
    SetIndustry { industry: Facet },
    SetNeed { need: Facet },
    ResetFilters,
    CloseDetail,
    KeyPressed { key: Key },
    NextMedia,
    PrevMedia,
    SelectMedia { position: usize },
    /// Jump to any media position, including ones without a thumbnail.
    SeekMedia { position: usize },
}

/// Side effects the presentation layer has to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    ScrollToTop,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub navigation: NavigationState,
    #[serde(default)]
    pub filters: FilterState,
    #[serde(default)]
    pub viewer: DetailViewer,
    #[serde(default)]
    pub listeners: KeyListeners,
}

impl Session {
    pub fn new(catalog: &Catalog, initial_page: Page) -> Self {
        let mut session = Self {
            navigation: NavigationState::new(initial_page),
            ..Self::default()
        };
        if initial_page == Page::Solutions {
            session.enter_solutions(catalog);
        }
        session
    }

    /// Rebuilds a session from a client-held snapshot, repairing anything that
    /// no longer lines up with the catalog.
    pub fn restore(mut snapshot: Session, catalog: &Catalog) -> Self {
        if snapshot.navigation.current_page != Page::Solutions {
            snapshot.viewer.close(&mut snapshot.listeners);
        }
        snapshot.viewer.reconcile(catalog, &mut snapshot.listeners);
        snapshot
            .listeners
            .retain_only(snapshot.viewer.escape_listener());
        snapshot
    }

    pub fn page(&self) -> Page {
        self.navigation.current_page
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a SolutionRecord> {
        filter(catalog.records(), &self.filters)
    }

    pub fn dispatch(&mut self, catalog: &Catalog, action: Action) -> Vec<Effect> {
        debug!("dispatch {action:?} on {}", self.page().as_slug());
        match action {
            Action::Navigate { page } => {
                let transition = self.navigation.navigate_to(page);
                return self.after_transition(catalog, transition);
            }
            Action::PickNeed { need } => {
                let transition = self.navigation.navigate_to_solutions_with_need(&need);
                return self.after_transition(catalog, transition);
            }
            Action::OpenSolution { id } => {
                if self.page() == Page::Solutions {
                    self.viewer.open(catalog, &id, &mut self.listeners);
                } else {
                    let transition = self.navigation.open_solution(&id);
                    return self.after_transition(catalog, transition);
                }
            }
            Action::SetQuery { query } => self.filters.query = query,
            Action::SetTier { tier } => self.filters.tier = tier,
            Action::SetIndustry { industry } => self.filters.industry = industry,
            Action::SetNeed { need } => self.filters.need = need,
            Action::ResetFilters => self.filters.reset(),
            Action::CloseDetail => self.viewer.close(&mut self.listeners),
            Action::KeyPressed { key } => {
                self.viewer.handle_key(key, &mut self.listeners);
            }
            Action::NextMedia => self.viewer.next(),
            Action::PrevMedia => self.viewer.prev(),
            Action::SelectMedia { position } => {
                self.viewer.select(position);
            }
            Action::SeekMedia { position } => {
                self.viewer.seek(position);
            }
        }
        Vec::new()
    }

    fn after_transition(&mut self, catalog: &Catalog, transition: Transition) -> Vec<Effect> {
        if transition.from == Page::Solutions && transition.to != Page::Solutions {
            self.viewer.close(&mut self.listeners);
        }
        if transition.entered(Page::Solutions)
            || (transition.to == Page::Solutions && self.navigation.has_carried())
        {
            self.enter_solutions(catalog);
        }
        if transition.scroll_to_top {
            vec![Effect::ScrollToTop]
        } else {
            Vec::new()
        }
    }

    /// Reset-on-entry: the finder starts from the carried need (or defaults)
    /// and auto-opens a carried record.
    fn enter_solutions(&mut self, catalog: &Catalog) {
        let carried = self.navigation.take_carried();
        self.filters = FilterState::seeded(carried.need.as_deref());
        self.viewer.close(&mut self.listeners);
        if let Some(id) = carried.open_solution_id {
            self.viewer.open(catalog, &id, &mut self.listeners);
        }
    }
}
