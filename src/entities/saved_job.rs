use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Location;

pub const TABLE: &str = "saved_jobs";

/// Columns requested when listing saved jobs, with the job embedded.
pub const SELECT_WITH_JOB: &str = "id, job_id, jobs ( title, company, work_type, location )";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SavedJob {
    pub id: Uuid,
    pub job_id: Uuid,
    #[serde(rename = "jobs", default)]
    pub job: Option<SavedJobSummary>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SavedJobSummary {
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub work_type: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewSavedJob {
    pub job_id: Uuid,
    pub user_id: Uuid,
}
