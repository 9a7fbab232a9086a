pub mod engine;
pub mod options;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use engine::{filter, matches};
pub use options::FacetOptions;

use crate::catalog::{Tier, TierParseError};

pub const ALL_LABEL: &str = "All";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TierFilter {
    #[default]
    All,
    Major,
    Mini,
}

impl TierFilter {
    pub const OPTIONS: [TierFilter; 3] = [TierFilter::All, TierFilter::Major, TierFilter::Mini];

    pub fn admits(&self, tier: Tier) -> bool {
        match self {
            Self::All => true,
            Self::Major => tier == Tier::Major,
            Self::Mini => tier == Tier::Mini,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<Tier> for TierFilter {
    fn from(value: Tier) -> Self {
        match value {
            Tier::Major => Self::Major,
            Tier::Mini => Self::Mini,
        }
    }
}

impl Display for TierFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "{ALL_LABEL}"),
            Self::Major => write!(f, "{}", Tier::Major),
            Self::Mini => write!(f, "{}", Tier::Mini),
        }
    }
}

impl FromStr for TierFilter {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_LABEL) {
            return Ok(Self::All);
        }
        Tier::from_str(trimmed).map(Self::from)
    }
}

/// An open facet: either everything, or exactly one value.
///
/// Values are compared verbatim against record attributes, so a value that no
/// record carries simply filters everything out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    pub fn only(value: impl Into<String>) -> Self {
        Self::from(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value.as_str()),
        }
    }

    pub fn is_selected(&self, option: &str) -> bool {
        match self {
            Self::All => option == ALL_LABEL,
            Self::Only(value) => value == option,
        }
    }
}

impl From<String> for Facet {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == ALL_LABEL {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }
}

impl From<Option<String>> for Facet {
    fn from(value: Option<String>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

impl From<Facet> for String {
    fn from(value: Facet) -> Self {
        match value {
            Facet::All => ALL_LABEL.to_string(),
            Facet::Only(value) => value,
        }
    }
}

impl Display for Facet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "{ALL_LABEL}"),
            Self::Only(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub tier: TierFilter,
    #[serde(default)]
    pub industry: Facet,
    #[serde(default)]
    pub need: Facet,
}

impl FilterState {
    /// Entry state of the finder when arriving with a carried need.
    pub fn seeded(need: Option<&str>) -> Self {
        Self {
            need: need.map(Facet::only).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Replaces the whole state with the defaults in one assignment.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_treats_all_and_blank_as_unfiltered() {
        assert_eq!(Facet::from("All".to_string()), Facet::All);
        assert_eq!(Facet::from("  ".to_string()), Facet::All);
        assert_eq!(Facet::only("Reminders"), Facet::Only("Reminders".to_string()));
    }

    #[test]
    fn facet_serializes_as_plain_string() {
        let state = FilterState::seeded(Some("Reminders"));
        let json = serde_json::to_value(&state).expect("serialize");
        assert_eq!(json["need"], "Reminders");
        assert_eq!(json["industry"], "All");
        assert_eq!(json["tier"], "All");
    }

    #[test]
    fn tier_filter_parses_all_and_tiers() {
        assert_eq!("".parse::<TierFilter>(), Ok(TierFilter::All));
        assert_eq!("all".parse::<TierFilter>(), Ok(TierFilter::All));
        assert_eq!("Mini".parse::<TierFilter>(), Ok(TierFilter::Mini));
        assert!("huge".parse::<TierFilter>().is_err());
    }

    #[test]
    fn reset_replaces_every_field() {
        let mut state = FilterState {
            query: "whatsapp".to_string(),
            tier: TierFilter::Mini,
            industry: Facet::only("Dentists"),
            need: Facet::only("After-hours"),
        };
        state.reset();
        assert!(state.is_default());
    }

    #[test]
    fn seeded_only_sets_need() {
        let state = FilterState::seeded(Some("Reminders"));
        assert_eq!(state.need, Facet::only("Reminders"));
        assert_eq!(state.query, "");
        assert_eq!(state.tier, TierFilter::All);
        assert_eq!(state.industry, Facet::All);
    }
}
