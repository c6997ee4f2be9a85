use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{all, empty_view};
use crate::entities::{incident, rescue_team, resource, Incident, RescueTeam, Resource};
use crate::store::{StoreClient, TableQuery};
use crate::views::map::MapView;

#[derive(Debug, Deserialize)]
pub struct LayerParams {
    #[serde(default = "all")]
    pub layer: String,
}

// GET /api/map?layer=
pub async fn map_view(
    Extension(store): Extension<StoreClient>,
    Query(params): Query<LayerParams>,
) -> Response {
    tracing::Span::current().record("action", "view_map");

    let incidents_query = TableQuery::table(incident::TABLE);
    let teams_query = TableQuery::table(rescue_team::TABLE);
    let resources_query = TableQuery::table(resource::TABLE);

    let (incidents, teams, resources): (Vec<Incident>, Vec<RescueTeam>, Vec<Resource>) =
        match tokio::try_join!(
            store.select(&incidents_query, None),
            store.select(&teams_query, None),
            store.select(&resources_query, None)
        ) {
            Ok(rows) => rows,
            Err(e) => empty_view("map", &e),
        };

    let view = MapView::build(incidents, teams, resources, &params.layer);
    (StatusCode::OK, Json(view)).into_response()
}
