//! Row types for the store's tables.
//!
//! Numeric columns are nullable in the store, so they stay `Option` here and
//! the view folds decide what a missing value means.

pub mod incident;
pub mod job;
pub mod job_application;
pub mod location;
pub mod profile;
pub mod rescue_team;
pub mod resource;
pub mod saved_job;

pub use incident::{Incident, NewIncident};
pub use job::Job;
pub use job_application::NewJobApplication;
pub use location::{ContactInfo, Location};
pub use profile::{Profile, ProfilePatch};
pub use rescue_team::RescueTeam;
pub use resource::Resource;
pub use saved_job::{NewSavedJob, SavedJob, SavedJobSummary};

use serde::{de::DeserializeOwned, Deserialize, Deserializer};

/// Accept any JSON for an open-ended column and keep it only when it has the
/// expected shape. Free-form `location`/`contact_info` values written by other
/// clients must not fail a whole table read.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
