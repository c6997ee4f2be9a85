use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{empty_view, FilterParams};
use crate::entities::{incident, Incident};
use crate::store::{Order, StoreClient, TableQuery};
use crate::views::incidents::IncidentsView;

// GET /api/incidents?filter=
pub async fn incidents_view(
    Extension(store): Extension<StoreClient>,
    Query(params): Query<FilterParams>,
) -> Response {
    tracing::Span::current()
        .record("table", incident::TABLE)
        .record("action", "view_incidents");

    let query = TableQuery::table(incident::TABLE).order("created_at", Order::Desc);
    let incidents: Vec<Incident> = match store.select(&query, None).await {
        Ok(rows) => rows,
        Err(e) => empty_view("incidents", &e),
    };

    let view = IncidentsView::build(incidents, &params.filter);
    crate::metrics::observe_incidents(&view);
    (StatusCode::OK, Json(view)).into_response()
}
