use serde::Serialize;

use super::fold::{count_where, mean_of, sum_of};
use super::tone::{incident_status_tone, severity_tone, Tone};
use super::is_all;
use crate::entities::Incident;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentSummary {
    pub active: usize,
    pub critical: usize,
    pub total_affected: i64,
    pub average_eta: i64,
}

impl IncidentSummary {
    pub fn derive(incidents: &[Incident]) -> Self {
        Self {
            active: count_where(incidents, |i| i.status == "active"),
            critical: count_where(incidents, |i| i.severity == "critical"),
            total_affected: sum_of(incidents, |i| i.people_affected),
            average_eta: mean_of(incidents, |i| i.rescue_eta_minutes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentCard {
    #[serde(flatten)]
    pub incident: Incident,
    pub severity_tone: Tone,
    pub status_tone: Tone,
}

impl From<Incident> for IncidentCard {
    fn from(incident: Incident) -> Self {
        Self {
            severity_tone: severity_tone(&incident.severity),
            status_tone: incident_status_tone(&incident.status),
            incident,
        }
    }
}

/// A filter value selects incidents by status or by severity.
pub fn matches_filter(incident: &Incident, filter: &str) -> bool {
    is_all(filter) || incident.status == filter || incident.severity == filter
}

/// Incident list with its headline numbers. The summary always covers every
/// fetched incident; the filter only narrows the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentsView {
    pub filter: String,
    pub summary: IncidentSummary,
    pub incidents: Vec<IncidentCard>,
}

impl IncidentsView {
    pub fn build(incidents: Vec<Incident>, filter: &str) -> Self {
        let summary = IncidentSummary::derive(&incidents);
        let incidents = incidents
            .into_iter()
            .filter(|i| matches_filter(i, filter))
            .map(IncidentCard::from)
            .collect();

        Self {
            filter: filter.to_string(),
            summary,
            incidents,
        }
    }
}
