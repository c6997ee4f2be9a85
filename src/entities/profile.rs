use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Location;

pub const TABLE: &str = "profiles";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub location: Option<Location>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Editable profile columns. Every field is written, `None` clears it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfilePatch {
    pub full_name: String,
    pub age: Option<i32>,
    pub phone: String,
    pub location: Option<Location>,
    pub skills: Vec<String>,
}
