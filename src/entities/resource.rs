use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Location;

pub const TABLE: &str = "resources";

/// A shelter or service point with capacity tracking.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Resource {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub capacity: Option<i64>,
    #[serde(default)]
    pub available_capacity: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub location: Option<Location>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or_default()
    }
}
