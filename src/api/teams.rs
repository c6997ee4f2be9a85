use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{empty_view, FilterParams};
use crate::entities::{incident, rescue_team, Incident, RescueTeam};
use crate::store::{Order, StoreClient, TableQuery};
use crate::views::teams::TeamsView;

// GET /api/teams?filter=
pub async fn teams_view(
    Extension(store): Extension<StoreClient>,
    Query(params): Query<FilterParams>,
) -> Response {
    tracing::Span::current()
        .record("table", rescue_team::TABLE)
        .record("action", "view_teams");

    let teams_query = TableQuery::table(rescue_team::TABLE).order("name", Order::Asc);
    let incidents_query = TableQuery::table(incident::TABLE).select("id, title, type, severity");

    let (teams, incidents): (Vec<RescueTeam>, Vec<Incident>) = match tokio::try_join!(
        store.select(&teams_query, None),
        store.select(&incidents_query, None)
    ) {
        Ok(rows) => rows,
        Err(e) => empty_view("teams", &e),
    };

    let view = TeamsView::build(teams, &incidents, &params.filter);
    (StatusCode::OK, Json(view)).into_response()
}
