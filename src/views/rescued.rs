use serde::Serialize;

use super::fold::{percent, sum_of};
use crate::entities::Incident;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RescueSummary {
    pub total_rescued: i64,
    pub total_affected: i64,
    pub rescue_rate: i64,
}

impl RescueSummary {
    pub fn derive(incidents: &[Incident]) -> Self {
        let total_rescued = sum_of(incidents, |i| i.people_rescued);
        let total_affected = sum_of(incidents, |i| i.people_affected);
        Self {
            total_rescued,
            total_affected,
            rescue_rate: percent(total_rescued, total_affected),
        }
    }
}

/// Case-insensitive substring match on title or address. An empty term
/// matches everything.
pub fn matches_search(incident: &Incident, term: &str) -> bool {
    let term = term.to_lowercase();
    incident.title.to_lowercase().contains(&term)
        || incident
            .address()
            .is_some_and(|address| address.to_lowercase().contains(&term))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RescuedView {
    pub search: String,
    pub summary: RescueSummary,
    pub incidents: Vec<Incident>,
}

impl RescuedView {
    /// Totals cover every fetched incident, not just the search hits.
    pub fn build(incidents: Vec<Incident>, search: &str) -> Self {
        let summary = RescueSummary::derive(&incidents);
        let incidents = incidents
            .into_iter()
            .filter(|i| matches_search(i, search))
            .collect();

        Self {
            search: search.to_string(),
            summary,
            incidents,
        }
    }
}
