pub mod content;
pub mod records;
pub mod schema;

use once_cell::sync::Lazy;

pub use schema::{EmotionalValue, MediaItem, MediaKind, SolutionRecord, Tier, TierParseError};

use crate::catalog::records::build_solutions;

static SHARED: Lazy<Catalog> = Lazy::new(Catalog::with_defaults);

/// Number of records surfaced in the home page "Popular solutions" strip.
pub const FEATURED_COUNT: usize = 3;

/// Fixed, ordered list of solution records. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<SolutionRecord>,
}

impl Catalog {
    pub fn with_defaults() -> Self {
        Self::from_records(build_solutions())
    }

    pub fn from_records(records: Vec<SolutionRecord>) -> Self {
        Self { records }
    }

    /// Process-wide catalog, built on first use.
    pub fn shared() -> &'static Catalog {
        &SHARED
    }

    pub fn records(&self) -> &[SolutionRecord] {
        &self.records
    }

    pub fn by_id(&self, id: &str) -> Option<&SolutionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn featured(&self) -> &[SolutionRecord] {
        let end = self.records.len().min(FEATURED_COUNT);
        &self.records[..end]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::with_defaults();
        let ids: HashSet<_> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn every_record_has_industries_and_needs() {
        for record in Catalog::shared().records() {
            assert!(!record.industries.is_empty(), "{} has no industries", record.id);
            assert!(!record.needs.is_empty(), "{} has no needs", record.id);
        }
    }

    #[test]
    fn featured_is_catalog_prefix() {
        let catalog = Catalog::shared();
        let featured: Vec<_> = catalog.featured().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            featured,
            ["missed-call-recovery", "reminders-confirmations", "ai-receptionist"]
        );
    }

    #[test]
    fn lookup_by_unknown_id_is_none() {
        assert!(Catalog::shared().by_id("does-not-exist").is_none());
        assert!(Catalog::shared().by_id("ai-receptionist").is_some());
    }

    #[test]
    fn featured_on_short_catalog_does_not_overrun() {
        let catalog = Catalog::from_records(Vec::new());
        assert!(catalog.featured().is_empty());
        assert!(catalog.is_empty());
    }
}
