use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Location;

pub const TABLE: &str = "incidents";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Incident {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub location: Option<Location>,
    #[serde(default)]
    pub people_affected: Option<i64>,
    #[serde(default)]
    pub people_rescued: Option<i64>,
    #[serde(default)]
    pub rescue_eta_minutes: Option<i64>,
    #[serde(default)]
    pub reported_by: Option<Uuid>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Incident {
    pub fn address(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.address.as_deref())
    }
}

/// Insert payload for an incident raised from the SOS screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewIncident {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    pub status: String,
    pub description: Option<String>,
    pub people_affected: i64,
    pub location: Option<Location>,
    pub reported_by: Option<Uuid>,
}
