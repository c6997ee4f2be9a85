use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{all, empty_view};
use crate::entities::{resource, Resource};
use crate::store::{Order, StoreClient, TableQuery};
use crate::views::resources::{ResourceSort, ResourcesView};

#[derive(Debug, Deserialize)]
pub struct ResourceParams {
    #[serde(default = "all")]
    pub category: String,
    #[serde(default)]
    pub sort: ResourceSort,
}

// GET /api/resources?category=&sort=
pub async fn resources_view(
    Extension(store): Extension<StoreClient>,
    Query(params): Query<ResourceParams>,
) -> Response {
    tracing::Span::current()
        .record("table", resource::TABLE)
        .record("action", "view_resources");

    let query = TableQuery::table(resource::TABLE).order("name", Order::Asc);
    let resources: Vec<Resource> = match store.select(&query, None).await {
        Ok(rows) => rows,
        Err(e) => empty_view("resources", &e),
    };

    let view = ResourcesView::build(resources, &params.category, params.sort);
    (StatusCode::OK, Json(view)).into_response()
}
