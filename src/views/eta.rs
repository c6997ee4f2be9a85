use serde::Serialize;
use uuid::Uuid;

use super::fold::{count_where, mean_of, min_of, MISSING_ETA};
use super::tone::{eta_tone, Tone};
use crate::entities::{Incident, RescueTeam};

/// Arrival estimates beyond this many minutes show an empty progress bar.
const ETA_HORIZON_MINUTES: f64 = 60.0;

/// Share of the horizon still to go, as a 0..=100 bar value.
pub fn eta_progress(minutes: i64) -> f64 {
    (100.0 - minutes as f64 / ETA_HORIZON_MINUTES * 100.0).max(0.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EtaSummary {
    pub average_eta: i64,
    pub shortest_eta: i64,
    pub deployed_teams: usize,
    pub available_teams: usize,
}

/// Active incidents bucketed by rescue ETA. A missing ETA counts as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EtaDistribution {
    pub within_10: usize,
    pub within_30: usize,
    pub within_60: usize,
    pub beyond_60: usize,
}

impl EtaDistribution {
    pub fn derive(incidents: &[Incident]) -> Self {
        incidents.iter().fold(Self::default(), |mut acc, incident| {
            match incident.rescue_eta_minutes.unwrap_or(0) {
                eta if eta <= 10 => acc.within_10 += 1,
                eta if eta <= 30 => acc.within_30 += 1,
                eta if eta <= 60 => acc.within_60 += 1,
                _ => acc.beyond_60 += 1,
            }
            acc
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentEta {
    pub id: Uuid,
    pub title: String,
    pub eta_minutes: i64,
    pub people_affected: i64,
    pub address: Option<String>,
    pub urgency: Tone,
    pub progress: f64,
}

impl From<&Incident> for IncidentEta {
    fn from(incident: &Incident) -> Self {
        let eta = incident.rescue_eta_minutes.unwrap_or(0);
        Self {
            id: incident.id,
            title: incident.title.clone(),
            eta_minutes: eta,
            people_affected: incident.people_affected.unwrap_or(0),
            address: incident.address().map(str::to_string),
            urgency: eta_tone(eta),
            progress: eta_progress(eta),
        }
    }
}

/// Only deployed teams are on the way somewhere, so only they carry an
/// arrival estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamEta {
    pub id: Uuid,
    pub name: String,
    pub status: String,
    pub eta_minutes: Option<i64>,
    pub urgency: Option<Tone>,
    pub progress: Option<f64>,
    pub radio: Option<String>,
    pub leader: Option<String>,
}

impl From<&RescueTeam> for TeamEta {
    fn from(team: &RescueTeam) -> Self {
        let eta = team
            .has_status("deployed")
            .then(|| team.eta_minutes.unwrap_or(0));
        let contact = team.contact_info.as_ref();
        Self {
            id: team.id,
            name: team.name.clone(),
            status: team.status().to_string(),
            eta_minutes: eta,
            urgency: eta.map(eta_tone),
            progress: eta.map(eta_progress),
            radio: contact.and_then(|c| c.radio.clone()),
            leader: contact.and_then(|c| c.leader.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EtaView {
    pub summary: EtaSummary,
    pub distribution: EtaDistribution,
    pub incidents: Vec<IncidentEta>,
    pub teams: Vec<TeamEta>,
}

impl EtaView {
    /// `incidents` are the active incidents only.
    pub fn build(teams: &[RescueTeam], incidents: &[Incident]) -> Self {
        Self {
            summary: EtaSummary {
                average_eta: mean_of(incidents, |i| i.rescue_eta_minutes),
                shortest_eta: min_of(incidents, |i| i.rescue_eta_minutes, MISSING_ETA),
                deployed_teams: count_where(teams, |t| t.has_status("deployed")),
                available_teams: count_where(teams, |t| t.has_status("available")),
            },
            distribution: EtaDistribution::derive(incidents),
            incidents: incidents.iter().map(IncidentEta::from).collect(),
            teams: teams.iter().map(TeamEta::from).collect(),
        }
    }
}
