use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContactInfo, Location};

pub const TABLE: &str = "rescue_teams";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RescueTeam {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub eta_minutes: Option<i64>,
    #[serde(default)]
    pub assigned_incident_id: Option<Uuid>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub contact_info: Option<ContactInfo>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub location: Option<Location>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RescueTeam {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or_default()
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.status() == status
    }
}
