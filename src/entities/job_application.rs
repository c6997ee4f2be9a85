use serde::Serialize;
use uuid::Uuid;

pub const TABLE: &str = "job_applications";

/// Insert payload for `job_applications`. Review status is owned by the store.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewJobApplication {
    pub job_id: Uuid,
    pub applicant_id: Uuid,
    pub applicant_name: String,
    pub applicant_age: Option<i32>,
    pub work_time_preference: String,
    pub cover_letter: String,
}
