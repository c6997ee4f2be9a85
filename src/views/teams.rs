use serde::Serialize;
use uuid::Uuid;

use super::fold::{count_where, mean_of};
use super::tone::{team_status_tone, Tone};
use super::is_all;
use crate::entities::{Incident, RescueTeam};

const UNKNOWN_INCIDENT: &str = "Unknown Incident";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub deployed: usize,
    pub available: usize,
    pub offline: usize,
    pub average_response_time: i64,
}

impl TeamSummary {
    pub fn derive(teams: &[RescueTeam]) -> Self {
        Self {
            deployed: count_where(teams, |t| t.has_status("deployed")),
            available: count_where(teams, |t| t.has_status("available")),
            offline: count_where(teams, |t| t.has_status("offline")),
            average_response_time: mean_of(teams, |t| t.eta_minutes),
        }
    }
}

/// Title of the incident a team is assigned to. `None` for unassigned teams;
/// a dangling reference or an untitled incident renders as "Unknown Incident".
pub fn assigned_incident_title(incidents: &[Incident], incident_id: Option<Uuid>) -> Option<String> {
    let incident_id = incident_id?;
    let title = incidents
        .iter()
        .find(|i| i.id == incident_id)
        .map(|i| i.title.clone())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNKNOWN_INCIDENT.to_string());
    Some(title)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCard {
    #[serde(flatten)]
    pub team: RescueTeam,
    pub status_tone: Tone,
    pub assigned_incident: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamsView {
    pub filter: String,
    pub summary: TeamSummary,
    pub teams: Vec<TeamCard>,
}

impl TeamsView {
    pub fn build(teams: Vec<RescueTeam>, incidents: &[Incident], filter: &str) -> Self {
        let summary = TeamSummary::derive(&teams);
        let teams = teams
            .into_iter()
            .filter(|t| is_all(filter) || t.has_status(filter))
            .map(|team| TeamCard {
                status_tone: team_status_tone(team.status()),
                assigned_incident: assigned_incident_title(incidents, team.assigned_incident_id),
                team,
            })
            .collect();

        Self {
            filter: filter.to_string(),
            summary,
            teams,
        }
    }
}
