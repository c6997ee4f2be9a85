use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::empty_view;
use crate::entities::{incident, rescue_team, Incident, RescueTeam};
use crate::store::{Order, StoreClient, TableQuery};
use crate::views::eta::EtaView;

// GET /api/eta
pub async fn eta_view(Extension(store): Extension<StoreClient>) -> Response {
    tracing::Span::current()
        .record("table", incident::TABLE)
        .record("action", "view_eta");

    let teams_query = TableQuery::table(rescue_team::TABLE).order("eta_minutes", Order::Asc);
    let incidents_query = TableQuery::table(incident::TABLE)
        .eq("status", "active")
        .order("rescue_eta_minutes", Order::Asc);

    let (teams, incidents): (Vec<RescueTeam>, Vec<Incident>) = match tokio::try_join!(
        store.select(&teams_query, None),
        store.select(&incidents_query, None)
    ) {
        Ok(rows) => rows,
        Err(e) => empty_view("eta", &e),
    };

    let view = EtaView::build(&teams, &incidents);
    crate::metrics::observe_eta(&view);
    (StatusCode::OK, Json(view)).into_response()
}
