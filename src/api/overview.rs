use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::empty_view;
use crate::entities::{incident, rescue_team, Incident, RescueTeam};
use crate::store::{Order, StoreClient, TableQuery};
use crate::views::overview::OverviewView;

// GET /api/overview
pub async fn overview_view(Extension(store): Extension<StoreClient>) -> Response {
    tracing::Span::current().record("action", "view_overview");

    let incidents_query = TableQuery::table(incident::TABLE).order("created_at", Order::Desc);
    let teams_query = TableQuery::table(rescue_team::TABLE);

    let (incidents, teams): (Vec<Incident>, Vec<RescueTeam>) = match tokio::try_join!(
        store.select(&incidents_query, None),
        store.select(&teams_query, None)
    ) {
        Ok(rows) => rows,
        Err(e) => empty_view("overview", &e),
    };

    let view = OverviewView::build(incidents, &teams);
    crate::metrics::observe_overview(&view);
    (StatusCode::OK, Json(view)).into_response()
}
