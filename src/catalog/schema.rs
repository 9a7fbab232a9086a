use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Major,
    Mini,
}

impl Tier {
    pub const ALL: [Tier; 2] = [Tier::Major, Tier::Mini];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Mini => "mini",
        }
    }

    /// Upper-cased banner used on cards and in the detail viewer.
    pub fn banner(&self) -> &'static str {
        match self {
            Self::Major => "MAJOR",
            Self::Mini => "MINI",
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Major => "Major",
            Self::Mini => "Mini",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tier: {0}")]
pub struct TierParseError(pub String);

impl FromStr for Tier {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "major" => Ok(Self::Major),
            "mini" => Ok(Self::Mini),
            _ => Err(TierParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Image => "▢",
            Self::Video => "▶",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub title: String,
    /// `None` renders a placeholder slide instead of the asset.
    pub src: Option<String>,
    pub note: Option<String>,
}

impl MediaItem {
    pub fn placeholder(kind: MediaKind, title: &str, note: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            src: None,
            note: Some(note.to_string()),
        }
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }
}

/// The four value angles every solution is pitched on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmotionalValue {
    pub money: String,
    pub freedom: String,
    pub growth: String,
    pub service: String,
}

impl EmotionalValue {
    pub fn blocks(&self) -> [(&'static str, &str); 4] {
        [
            ("More money", self.money.as_str()),
            ("Freedom", self.freedom.as_str()),
            ("Growth", self.growth.as_str()),
            ("Better service", self.service.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolutionRecord {
    pub id: String,
    pub tier: Tier,
    pub title: String,
    pub outcome: String,
    pub industries: Vec<String>,
    pub needs: Vec<String>,
    pub channels: Vec<String>,
    pub tags: Vec<String>,
    pub includes: Vec<String>,
    pub how_it_works: Vec<String>,
    pub price_label: String,
    pub price_note: String,
    pub emotional: EmotionalValue,
    pub media: Vec<MediaItem>,
}

impl SolutionRecord {
    pub fn serves_industry(&self, industry: &str) -> bool {
        self.industries.iter().any(|i| i == industry)
    }

    pub fn solves_need(&self, need: &str) -> bool {
        self.needs.iter().any(|n| n == need)
    }

    /// Lower-cased text the free-text search runs against.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.outcome,
            self.tags.join(" "),
            self.channels.join(" ")
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tier_case_insensitively() {
        assert_eq!("MINI".parse::<Tier>(), Ok(Tier::Mini));
        assert_eq!(" major ".parse::<Tier>(), Ok(Tier::Major));
        assert!("enterprise".parse::<Tier>().is_err());
    }

    #[test]
    fn emotional_blocks_keep_display_order() {
        let value = EmotionalValue {
            money: "m".to_string(),
            freedom: "f".to_string(),
            growth: "g".to_string(),
            service: "s".to_string(),
        };
        let titles: Vec<_> = value.blocks().iter().map(|(t, _)| *t).collect();
        assert_eq!(titles, ["More money", "Freedom", "Growth", "Better service"]);
    }
}
