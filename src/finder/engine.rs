use crate::catalog::SolutionRecord;
use crate::finder::FilterState;

/// Records satisfying every predicate of `state`, in catalog order.
pub fn filter<'a>(records: &'a [SolutionRecord], state: &FilterState) -> Vec<&'a SolutionRecord> {
    let query = state.normalized_query();
    records
        .iter()
        .filter(|record| matches_normalized(record, state, &query))
        .collect()
}

pub fn matches(record: &SolutionRecord, state: &FilterState) -> bool {
    matches_normalized(record, state, &state.normalized_query())
}

fn matches_normalized(record: &SolutionRecord, state: &FilterState, query: &str) -> bool {
    if !state.tier.admits(record.tier) {
        return false;
    }
    if let Some(industry) = state.industry.value() {
        if !record.serves_industry(industry) {
            return false;
        }
    }
    if let Some(need) = state.need.value() {
        if !record.solves_need(need) {
            return false;
        }
    }
    query.is_empty() || record.haystack().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::finder::{Facet, TierFilter};

    fn ids(records: &[&SolutionRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn default_state_returns_whole_catalog() {
        let catalog = Catalog::shared();
        let visible = filter(catalog.records(), &FilterState::default());
        let all: Vec<_> = catalog.records().iter().collect();
        assert_eq!(visible, all);
    }

    #[test]
    fn need_filter_selects_missed_call_recovery() {
        let state = FilterState {
            need: Facet::only("Missed Calls"),
            ..FilterState::default()
        };
        let visible = filter(Catalog::shared().records(), &state);
        assert_eq!(ids(&visible), ["missed-call-recovery"]);
    }

    #[test]
    fn mini_tier_keeps_catalog_order() {
        let state = FilterState {
            tier: TierFilter::Mini,
            ..FilterState::default()
        };
        let visible = filter(Catalog::shared().records(), &state);
        assert_eq!(ids(&visible), ["whatsapp-busy-pack", "sheets-airtable-tracker"]);
    }

    #[test]
    fn query_is_case_insensitive_and_trimmed() {
        for query in ["whatsapp", "  WhatsApp ", "WHATSAPP"] {
            let state = FilterState {
                query: query.to_string(),
                ..FilterState::default()
            };
            let visible = ids(&filter(Catalog::shared().records(), &state));
            assert!(visible.contains(&"missed-call-recovery".to_string()));
            assert!(visible.contains(&"whatsapp-busy-pack".to_string()));
            assert!(!visible.contains(&"sheets-airtable-tracker".to_string()));
        }
    }

    #[test]
    fn unknown_facet_values_yield_empty() {
        let state = FilterState {
            industry: Facet::only("Astronauts"),
            ..FilterState::default()
        };
        assert!(filter(Catalog::shared().records(), &state).is_empty());

        let state = FilterState {
            need: Facet::only("Teleportation"),
            ..FilterState::default()
        };
        assert!(filter(Catalog::shared().records(), &state).is_empty());
    }

    #[test]
    fn predicates_are_anded() {
        let state = FilterState {
            query: "reply".to_string(),
            tier: TierFilter::Major,
            industry: Facet::only("Painters"),
            need: Facet::only("After-hours"),
        };
        let visible = filter(Catalog::shared().records(), &state);
        assert_eq!(ids(&visible), ["missed-call-recovery"]);
        for record in Catalog::shared().records() {
            let expected = visible.iter().any(|v| v.id == record.id);
            assert_eq!(matches(record, &state), expected, "{}", record.id);
        }
    }

    #[test]
    fn results_are_catalog_order_subsequence() {
        let catalog = Catalog::shared();
        let states = [
            FilterState {
                industry: Facet::only("Dentists"),
                ..FilterState::default()
            },
            FilterState {
                need: Facet::only("Follow-ups"),
                ..FilterState::default()
            },
            FilterState {
                query: "sms".to_string(),
                ..FilterState::default()
            },
        ];
        for state in &states {
            let visible = filter(catalog.records(), state);
            let positions: Vec<_> = visible
                .iter()
                .map(|v| {
                    catalog
                        .records()
                        .iter()
                        .position(|r| r.id == v.id)
                        .expect("record from catalog")
                })
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            assert!(visible.iter().all(|r| matches(r, state)));
        }
    }

    #[test]
    fn empty_catalog_is_not_an_error() {
        assert!(filter(&[], &FilterState::default()).is_empty());
    }
}
