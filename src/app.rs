use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::api;
use crate::store::StoreClient;

async fn health_check() -> &'static str {
    "OK"
}

/// All dashboard routes with their shared state, session handling and
/// request tracing. Metrics and CORS are added by the binary.
pub fn router(store: StoreClient) -> Router {
    let public_routes = Router::new()
        .route("/api/overview", get(api::overview::overview_view))
        .route("/api/incidents", get(api::incidents::incidents_view))
        .route("/api/teams", get(api::teams::teams_view))
        .route("/api/eta", get(api::eta::eta_view))
        .route("/api/rescued", get(api::rescued::rescued_view))
        .route("/api/map", get(api::map::map_view))
        .route("/api/resources", get(api::resources::resources_view))
        .route("/api/jobs", get(api::jobs::list_jobs))
        .route("/api/jobs/:id", get(api::jobs::get_job))
        .route(
            "/api/sos",
            get(api::sos::emergency_types).post(api::sos::raise_sos),
        );

    let protected_routes = Router::new()
        .route("/api/jobs/:id/apply", post(api::jobs::apply_for_job))
        .route("/api/jobs/:id/save", post(api::jobs::save_job))
        .route(
            "/api/profile",
            get(api::profile::get_profile).patch(api::profile::update_profile),
        )
        .route_layer(axum::middleware::from_fn(
            api::middleware::session_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(store))
        .layer(tower_cookies::CookieManagerLayer::new())
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<axum::body::Body>| {
                    let matched_path = request
                        .extensions()
                        .get::<axum::extract::MatchedPath>()
                        .map(|matched| matched.as_str());

                    // "METHOD /path", e.g. "GET /api/incidents"
                    let span_name = if let Some(path) = matched_path {
                        format!("{} {}", request.method(), path)
                    } else {
                        format!("{} {}", request.method(), request.uri().path())
                    };

                    let user_ip = request
                        .headers()
                        .get("x-forwarded-for")
                        .and_then(|v| v.to_str().ok())
                        .or_else(|| {
                            request
                                .headers()
                                .get("x-real-ip")
                                .and_then(|v| v.to_str().ok())
                        })
                        .unwrap_or("unknown");

                    // Handlers fill in the empty fields.
                    tracing::info_span!(
                        "request",
                        "otel.name" = span_name,
                        user_ip = user_ip,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        table = tracing::field::Empty,
                        action = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                        business_event = tracing::field::Empty,
                        error = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency = tracing::field::Empty,
                    )
                })
                .on_request(|_request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {})
                .on_response(|response: &axum::http::Response<_>, latency: std::time::Duration, span: &tracing::Span| {
                    span.record("status", tracing::field::display(response.status()));
                    span.record("latency", tracing::field::debug(latency));
                    tracing::info!("request completed");
                }),
        )
}
