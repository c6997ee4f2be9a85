use axum::{
    extract::{Extension, Json},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_cookies::Cookies;
use tracing::info;

use super::middleware::resolve_session;
use super::{invalid_form, store_failure};
use crate::entities::incident;
use crate::forms::{SosForm, EMERGENCY_TYPES};
use crate::store::StoreClient;

/// Short reference read out to the caller, taken from the clock.
fn emergency_id() -> String {
    format!("EMG-{:06}", chrono::Utc::now().timestamp_millis() % 1_000_000)
}

// GET /api/sos
pub async fn emergency_types() -> Response {
    (StatusCode::OK, Json(json!({"emergency_types": EMERGENCY_TYPES}))).into_response()
}

// POST /api/sos
pub async fn raise_sos(
    Extension(store): Extension<StoreClient>,
    cookies: Cookies,
    headers: HeaderMap,
    Json(form): Json<SosForm>,
) -> Response {
    tracing::Span::current()
        .record("table", incident::TABLE)
        .record("action", "raise_sos");

    // Anyone may raise an SOS; a session only attributes it.
    let session = resolve_session(&store, &headers, &cookies).await;

    let incident = match form.into_incident(session.as_ref().map(|s| s.user_id)) {
        Ok(incident) => incident,
        Err(e) => return invalid_form("sos", &e),
    };

    let token = session.as_ref().map(|s| s.access_token.as_str());
    match store.insert(incident::TABLE, &incident, token).await {
        Ok(()) => {
            let emergency_id = emergency_id();
            info!(
                "SOS {} raised: {} ({} people)",
                emergency_id, incident.kind, incident.people_affected
            );
            tracing::Span::current().record("business_event", "SOS raised");
            crate::metrics::record_form_submission("sos", "submitted");
            (
                StatusCode::CREATED,
                Json(json!({
                    "emergency_id": emergency_id,
                    "status": "dispatched",
                    "people_count": incident.people_affected,
                    "location": incident.location,
                })),
            )
                .into_response()
        }
        Err(e) => store_failure("sos", &e),
    }
}
