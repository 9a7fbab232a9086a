use serde::Serialize;

use crate::finder::{TierFilter, ALL_LABEL};

pub const INDUSTRY_VALUES: [&str; 9] = [
    "Dentists",
    "Doctors",
    "Beauty Clinics",
    "Beauty Salons",
    "Electricians",
    "Mechanics",
    "Painters",
    "Drivers",
    "Other",
];

pub const NEED_VALUES: [&str; 13] = [
    "Missed Calls",
    "After-hours",
    "Lead Qualification",
    "Reminders",
    "Scheduling",
    "Follow-ups",
    "Care Journey",
    "Escalation",
    "Lead Capture",
    "Reporting",
    "Ops Tracking",
    "FAQ Handling",
    "Routing",
];

/// Pill labels offered by each facet, `All` first.
#[derive(Debug, Clone, Serialize)]
pub struct FacetOptions {
    pub tiers: Vec<String>,
    pub industries: Vec<String>,
    pub needs: Vec<String>,
}

impl FacetOptions {
    pub fn standard() -> Self {
        Self {
            tiers: TierFilter::OPTIONS.iter().map(|t| t.to_string()).collect(),
            industries: with_all(&INDUSTRY_VALUES),
            needs: with_all(&NEED_VALUES),
        }
    }
}

fn with_all(values: &[&str]) -> Vec<String> {
    std::iter::once(ALL_LABEL)
        .chain(values.iter().copied())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn options_start_with_all() {
        let options = FacetOptions::standard();
        assert_eq!(options.tiers, ["All", "Major", "Mini"]);
        assert_eq!(options.industries.first().map(String::as_str), Some("All"));
        assert_eq!(options.needs.len(), NEED_VALUES.len() + 1);
    }

    #[test]
    fn every_catalog_need_and_industry_is_offered() {
        let needs: BTreeSet<_> = NEED_VALUES.iter().copied().collect();
        let industries: BTreeSet<_> = INDUSTRY_VALUES.iter().copied().collect();
        for record in Catalog::shared().records() {
            for need in &record.needs {
                assert!(needs.contains(need.as_str()), "missing need option {need}");
            }
            for industry in &record.industries {
                assert!(
                    industries.contains(industry.as_str()),
                    "missing industry option {industry}"
                );
            }
        }
    }
}
