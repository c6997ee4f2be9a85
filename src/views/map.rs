use serde::Serialize;
use uuid::Uuid;

use super::tone::{severity_tone, team_status_tone, Tone};
use super::is_all;
use crate::entities::{Incident, Location, RescueTeam, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MapCategory {
    Incident,
    Team,
    Resource,
}

impl MapCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            MapCategory::Incident => "incident",
            MapCategory::Team => "team",
            MapCategory::Resource => "resource",
        }
    }
}

/// One marker on the map, whatever table it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapItem {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: MapCategory,
    pub status: Option<String>,
    pub severity: Option<String>,
    pub people_affected: Option<i64>,
    pub location: Option<Location>,
    pub tone: Tone,
}

impl From<Incident> for MapItem {
    fn from(incident: Incident) -> Self {
        Self {
            id: incident.id,
            tone: severity_tone(&incident.severity),
            title: incident.title,
            kind: incident.kind,
            category: MapCategory::Incident,
            status: Some(incident.status),
            severity: Some(incident.severity),
            people_affected: incident.people_affected,
            location: incident.location,
        }
    }
}

impl From<RescueTeam> for MapItem {
    fn from(team: RescueTeam) -> Self {
        Self {
            id: team.id,
            tone: team_status_tone(team.status()),
            title: team.name,
            kind: "team".to_string(),
            category: MapCategory::Team,
            status: team.status,
            severity: None,
            people_affected: None,
            location: team.location,
        }
    }
}

impl From<Resource> for MapItem {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id,
            title: resource.name,
            kind: resource.kind,
            category: MapCategory::Resource,
            status: resource.status,
            severity: None,
            people_affected: None,
            location: resource.location,
            tone: Tone::Primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerCounts {
    pub incidents: usize,
    pub teams: usize,
    pub resources: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub layer: String,
    pub counts: LayerCounts,
    pub items: Vec<MapItem>,
}

impl MapView {
    /// Merge the three tables into one marker list, incidents first. An
    /// unknown layer shows nothing.
    pub fn build(
        incidents: Vec<Incident>,
        teams: Vec<RescueTeam>,
        resources: Vec<Resource>,
        layer: &str,
    ) -> Self {
        let counts = LayerCounts {
            incidents: incidents.len(),
            teams: teams.len(),
            resources: resources.len(),
        };

        let items = incidents
            .into_iter()
            .map(MapItem::from)
            .chain(teams.into_iter().map(MapItem::from))
            .chain(resources.into_iter().map(MapItem::from))
            .filter(|item| is_all(layer) || item.category.as_str() == layer)
            .collect();

        Self {
            layer: layer.to_string(),
            counts,
            items,
        }
    }
}
