use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, info};

use super::middleware::Session;
use super::store_failure;
use crate::entities::{profile, saved_job, Profile, SavedJob};
use crate::forms::ProfileForm;
use crate::store::{StoreClient, StoreError, StoreResult, TableQuery};

/// Status the store answers with when a single-row read matches nothing.
const NO_SINGLE_ROW: u16 = 406;

fn profile_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Profile not found"})),
    )
        .into_response()
}

fn is_missing_row(err: &StoreError) -> bool {
    err.status() == Some(NO_SINGLE_ROW)
}

async fn load_profile(store: &StoreClient, session: &Session) -> StoreResult<Profile> {
    let query = TableQuery::table(profile::TABLE).eq("user_id", session.user_id);
    store.select_one(&query, Some(session.access_token.as_str())).await
}

// GET /api/profile
pub async fn get_profile(
    Extension(store): Extension<StoreClient>,
    Extension(session): Extension<Session>,
) -> Response {
    tracing::Span::current()
        .record("table", profile::TABLE)
        .record("action", "view_profile");

    let saved_query = TableQuery::table(saved_job::TABLE)
        .select(saved_job::SELECT_WITH_JOB)
        .eq("user_id", session.user_id);

    let (profile, saved_jobs) = tokio::join!(
        load_profile(&store, &session),
        store.select::<SavedJob>(&saved_query, Some(session.access_token.as_str()))
    );

    let profile = match profile {
        Ok(profile) => profile,
        Err(e) => {
            error!("Error fetching profile: {}", e);
            return profile_not_found();
        }
    };

    let saved_jobs = saved_jobs.unwrap_or_else(|e| {
        error!("Error fetching saved jobs: {}", e);
        Vec::new()
    });

    (
        StatusCode::OK,
        Json(json!({"profile": profile, "saved_jobs": saved_jobs})),
    )
        .into_response()
}

// PATCH /api/profile
pub async fn update_profile(
    Extension(store): Extension<StoreClient>,
    Extension(session): Extension<Session>,
    Json(form): Json<ProfileForm>,
) -> Response {
    tracing::Span::current()
        .record("table", profile::TABLE)
        .record("action", "update_profile");

    // Only an existing profile can be edited.
    if let Err(e) = load_profile(&store, &session).await {
        if is_missing_row(&e) {
            crate::metrics::record_form_submission("profile", "invalid");
            return profile_not_found();
        }
        return store_failure("profile", &e);
    }

    let patch = form.into_patch();
    let query = TableQuery::table(profile::TABLE).eq("user_id", session.user_id);

    if let Err(e) = store
        .update(&query, &patch, Some(session.access_token.as_str()))
        .await
    {
        return store_failure("profile", &e);
    }

    info!("Profile updated for {}", session.user_id);
    tracing::Span::current().record("business_event", "Profile updated");
    crate::metrics::record_form_submission("profile", "submitted");

    let profile = load_profile(&store, &session)
        .await
        .map_err(|e| error!("Error re-fetching profile: {}", e))
        .ok();

    (
        StatusCode::OK,
        Json(json!({
            "message": "Your profile has been successfully updated.",
            "profile": profile,
        })),
    )
        .into_response()
}
