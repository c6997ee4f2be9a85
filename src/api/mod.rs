pub mod eta;
pub mod incidents;
pub mod jobs;
pub mod map;
pub mod middleware;
pub mod overview;
pub mod profile;
pub mod rescued;
pub mod resources;
pub mod sos;
pub mod teams;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::forms::FormError;
use crate::store::StoreError;
use crate::views::ALL;

fn all() -> String {
    ALL.to_string()
}

/// `?filter=` for the incident and team views.
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    #[serde(default = "all")]
    pub filter: String,
}

/// A view whose reads failed renders from empty rows. The failure is only
/// visible in logs and metrics.
pub(crate) fn empty_view<T: Default>(view: &'static str, err: &StoreError) -> T {
    error!("Error fetching {} data: {}", view, err);
    tracing::Span::current().record("error", tracing::field::display(err));
    crate::metrics::record_empty_view(view);
    T::default()
}

/// Form failures carry the store's own message back to the user.
pub(crate) fn store_failure(form: &'static str, err: &StoreError) -> Response {
    error!("Failed to submit {}: {}", form, err);
    tracing::Span::current().record("error", tracing::field::display(err));
    crate::metrics::record_form_submission(form, "failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({"error": err.to_string()})),
    )
        .into_response()
}

pub(crate) fn invalid_form(form: &'static str, err: &FormError) -> Response {
    crate::metrics::record_form_submission(form, "invalid");
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": err.to_string()})),
    )
        .into_response()
}
