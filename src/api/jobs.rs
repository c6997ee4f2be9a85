use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use super::middleware::Session;
use super::{all, empty_view, invalid_form, store_failure};
use crate::entities::{job, job_application, saved_job, Job, NewSavedJob};
use crate::forms::JobApplicationForm;
use crate::store::{Order, StoreClient, TableQuery};
use crate::views::jobs::{JobSort, JobsView};

const JOB_UNAVAILABLE: &str = "Could not load job details. Please try again.";

#[derive(Debug, Deserialize)]
pub struct JobParams {
    #[serde(default = "all")]
    pub category: String,
    #[serde(default)]
    pub sort: JobSort,
}

// GET /api/jobs?category=&sort=
pub async fn list_jobs(
    Extension(store): Extension<StoreClient>,
    Query(params): Query<JobParams>,
) -> Response {
    tracing::Span::current()
        .record("table", job::TABLE)
        .record("action", "view_jobs");

    let query = TableQuery::table(job::TABLE).order("created_at", Order::Desc);
    let jobs: Vec<Job> = match store.select(&query, None).await {
        Ok(rows) => rows,
        Err(e) => empty_view("jobs", &e),
    };

    let view = JobsView::build(jobs, &params.category, params.sort);
    (StatusCode::OK, Json(view)).into_response()
}

async fn load_job(store: &StoreClient, job_id: Uuid, token: Option<&str>) -> Option<Job> {
    let query = TableQuery::table(job::TABLE).eq("id", job_id);
    match store.select_one(&query, token).await {
        Ok(job) => Some(job),
        Err(e) => {
            error!("Error fetching job {}: {}", job_id, e);
            None
        }
    }
}

fn job_unavailable() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"error": JOB_UNAVAILABLE}))).into_response()
}

// GET /api/jobs/:id
pub async fn get_job(
    Extension(store): Extension<StoreClient>,
    Path(job_id): Path<Uuid>,
) -> Response {
    match load_job(&store, job_id, None).await {
        Some(job) => (StatusCode::OK, Json(job)).into_response(),
        None => job_unavailable(),
    }
}

// POST /api/jobs/:id/apply
pub async fn apply_for_job(
    Extension(store): Extension<StoreClient>,
    Extension(session): Extension<Session>,
    Path(job_id): Path<Uuid>,
    Json(form): Json<JobApplicationForm>,
) -> Response {
    tracing::Span::current()
        .record("table", job_application::TABLE)
        .record("action", "apply_for_job");

    let token = Some(session.access_token.as_str());
    let Some(job) = load_job(&store, job_id, token).await else {
        return job_unavailable();
    };

    let application = match form.into_record(job.id, session.user_id) {
        Ok(application) => application,
        Err(e) => return invalid_form("job_application", &e),
    };

    match store.insert(job_application::TABLE, &application, token).await {
        Ok(()) => {
            info!("Application for job {} submitted by {}", job.id, session.user_id);
            tracing::Span::current().record("business_event", "Job application submitted");
            crate::metrics::record_form_submission("job_application", "submitted");
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Your job application has been sent successfully.",
                    "redirect": "/jobs",
                })),
            )
                .into_response()
        }
        Err(e) => store_failure("job_application", &e),
    }
}

// POST /api/jobs/:id/save
pub async fn save_job(
    Extension(store): Extension<StoreClient>,
    Extension(session): Extension<Session>,
    Path(job_id): Path<Uuid>,
) -> Response {
    tracing::Span::current()
        .record("table", saved_job::TABLE)
        .record("action", "save_job");

    let row = NewSavedJob {
        job_id,
        user_id: session.user_id,
    };

    match store
        .insert(saved_job::TABLE, &row, Some(session.access_token.as_str()))
        .await
    {
        Ok(()) => {
            info!("Job {} saved by {}", job_id, session.user_id);
            crate::metrics::record_form_submission("saved_job", "submitted");
            (StatusCode::CREATED, Json(json!({"message": "Job saved"}))).into_response()
        }
        Err(e) => store_failure("saved_job", &e),
    }
}
