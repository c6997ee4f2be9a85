use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::empty_view;
use crate::entities::{incident, Incident};
use crate::store::{Order, StoreClient, TableQuery};
use crate::views::rescued::RescuedView;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
}

// GET /api/rescued?search=
pub async fn rescued_view(
    Extension(store): Extension<StoreClient>,
    Query(params): Query<SearchParams>,
) -> Response {
    tracing::Span::current()
        .record("table", incident::TABLE)
        .record("action", "view_rescued");

    let query = TableQuery::table(incident::TABLE)
        .gt("people_rescued", 0)
        .order("created_at", Order::Desc);
    let incidents: Vec<Incident> = match store.select(&query, None).await {
        Ok(rows) => rows,
        Err(e) => empty_view("rescued", &e),
    };

    let view = RescuedView::build(incidents, &params.search);
    crate::metrics::observe_rescued(&view);
    (StatusCode::OK, Json(view)).into_response()
}
