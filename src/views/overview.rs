use serde::Serialize;

use super::fold::{count_where, mean_of, percent, sum_of};
use super::incidents::IncidentCard;
use crate::entities::{Incident, RescueTeam};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewKpis {
    pub people_rescued: i64,
    pub active_incidents: usize,
    pub critical_active: usize,
    pub average_eta: i64,
    pub rescue_rate: i64,
    pub deployed_teams: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveIncident {
    #[serde(flatten)]
    pub card: IncidentCard,
    pub teams_assigned: usize,
}

/// Operations landing page: headline numbers plus the active incidents
/// with how many teams are working each.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub kpis: OverviewKpis,
    pub active_incidents: Vec<ActiveIncident>,
}

impl OverviewView {
    pub fn build(incidents: Vec<Incident>, teams: &[RescueTeam]) -> Self {
        let people_rescued = sum_of(&incidents, |i| i.people_rescued);
        let people_affected = sum_of(&incidents, |i| i.people_affected);

        let active: Vec<Incident> = incidents
            .into_iter()
            .filter(|i| i.status == "active")
            .collect();

        let kpis = OverviewKpis {
            people_rescued,
            active_incidents: active.len(),
            critical_active: count_where(&active, |i| i.severity == "critical"),
            average_eta: mean_of(&active, |i| i.rescue_eta_minutes),
            rescue_rate: percent(people_rescued, people_affected),
            deployed_teams: count_where(teams, |t| t.has_status("deployed")),
        };

        let active_incidents = active
            .into_iter()
            .map(|incident| ActiveIncident {
                teams_assigned: count_where(teams, |t| t.assigned_incident_id == Some(incident.id)),
                card: IncidentCard::from(incident),
            })
            .collect();

        Self {
            kpis,
            active_incidents,
        }
    }
}
