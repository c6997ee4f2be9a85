//! In-process stand-in for the hosted store: a PostgREST-shaped REST
//! endpoint plus the auth user endpoint, served by axum on an ephemeral port.

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};

use reliefnet_server::store::StoreClient;

pub const ANON_KEY: &str = "anon-key";
pub const VALID_TOKEN: &str = "valid-token";
pub const USER_ID: &str = "00000000-0000-0000-0000-0000000000aa";

#[derive(Debug, Clone, PartialEq)]
pub struct Write {
    pub method: String,
    pub table: String,
    pub body: Value,
}

#[derive(Default)]
struct FakeState {
    tables: HashMap<String, Vec<Value>>,
    failing: HashMap<String, (u16, String)>,
    writes: Vec<Write>,
}

#[derive(Clone, Default)]
pub struct FakeStore(Arc<Mutex<FakeState>>);

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(self, table: &str, rows: Value) -> Self {
        let rows = rows.as_array().cloned().unwrap_or_default();
        self.0.lock().unwrap().tables.insert(table.to_string(), rows);
        self
    }

    /// Every request touching `table` fails with `status` and `message`.
    pub fn failing(self, table: &str, status: u16, message: &str) -> Self {
        self.0
            .lock()
            .unwrap()
            .failing
            .insert(table.to_string(), (status, message.to_string()));
        self
    }

    pub fn writes(&self) -> Vec<Write> {
        self.0.lock().unwrap().writes.clone()
    }

    /// Serve the fake, then a dashboard wired to it.
    pub async fn dashboard(&self) -> Dashboard {
        let fake = Router::new()
            .route("/rest/v1/:table", get(read).post(insert).patch(update))
            .route("/auth/v1/user", get(current_user))
            .with_state(self.clone());
        let store_url = serve(fake).await;

        let app = reliefnet_server::app::router(StoreClient::new(&store_url, ANON_KEY));
        Dashboard {
            client: reqwest::Client::new(),
            base_url: serve(app).await,
        }
    }
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    format!("http://{}", addr)
}

/// A running dashboard and a client to call it with.
pub struct Dashboard {
    client: reqwest::Client,
    base_url: String,
}

impl Dashboard {
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.send(Method::GET, path, None, None).await
    }

    pub async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }
        read_json(request).await
    }

    pub async fn get_with_cookie(&self, path: &str, cookie: &str) -> (StatusCode, Value) {
        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header(header::COOKIE, cookie);
        read_json(request).await
    }
}

async fn read_json(request: reqwest::RequestBuilder) -> (StatusCode, Value) {
    let response = request.send().await.expect("dashboard request");
    let status = response.status();
    let body = response.text().await.expect("dashboard body");
    (status, serde_json::from_str(&body).unwrap_or(Value::Null))
}

fn error(status: u16, key: &str, message: &str) -> Response {
    let status = StatusCode::from_u16(status).unwrap();
    (status, Json(json!({ key: message }))).into_response()
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn check_keys(headers: &HeaderMap) -> Result<(), Response> {
    if headers.get("apikey").and_then(|v| v.to_str().ok()) != Some(ANON_KEY) {
        return Err(error(401, "message", "No API key found in request"));
    }
    match bearer(headers) {
        Some(ANON_KEY) | Some(VALID_TOKEN) => Ok(()),
        _ => Err(error(401, "message", "JWT expired")),
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn matches(row: &Value, column: &str, condition: &str) -> bool {
    let field = &row[column];
    if let Some(expected) = condition.strip_prefix("eq.") {
        return text(field).as_deref() == Some(expected);
    }
    if let Some(bound) = condition.strip_prefix("gt.") {
        return match (field.as_f64(), bound.parse::<f64>()) {
            (Some(value), Ok(bound)) => value > bound,
            _ => false,
        };
    }
    false
}

fn filters(params: &[(String, String)]) -> Vec<(String, String)> {
    params
        .iter()
        .filter(|(k, _)| k != "select" && k != "order")
        .cloned()
        .collect()
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        _ => text(a).cmp(&text(b)),
    }
}

/// Top-level column names of a select list, embedded resources included.
fn selected_columns(select: &str) -> Option<Vec<String>> {
    if select == "*" {
        return None;
    }
    let mut columns = Vec::new();
    let mut current = String::new();
    let mut depth = 0;
    for c in select.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => columns.push(std::mem::take(&mut current)),
            _ if depth == 0 => current.push(c),
            _ => {}
        }
    }
    columns.push(current);
    Some(columns)
}

fn project(row: &Value, columns: &Option<Vec<String>>) -> Value {
    match columns {
        None => row.clone(),
        Some(columns) => {
            let fields: Map<String, Value> = columns
                .iter()
                .map(|c| (c.clone(), row[c.as_str()].clone()))
                .collect();
            Value::Object(fields)
        }
    }
}

async fn read(
    State(store): State<FakeStore>,
    Path(table): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = check_keys(&headers) {
        return response;
    }
    let state = store.0.lock().unwrap();
    if let Some((status, message)) = state.failing.get(&table) {
        return error(*status, "message", message);
    }

    let filters = filters(&params);
    let mut rows: Vec<Value> = state
        .tables
        .get(&table)
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .filter(|row| filters.iter().all(|(c, cond)| matches(row, c, cond)))
        .collect();

    if let Some((_, order)) = params.iter().find(|(k, _)| k == "order") {
        let (column, direction) = order.rsplit_once('.').unwrap_or((order.as_str(), "asc"));
        rows.sort_by(|a, b| {
            let ordering = compare(&a[column], &b[column]);
            if direction == "desc" && !a[column].is_null() && !b[column].is_null() {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    let columns = params
        .iter()
        .find(|(k, _)| k == "select")
        .and_then(|(_, s)| selected_columns(s));
    let rows: Vec<Value> = rows.iter().map(|r| project(r, &columns)).collect();

    let single = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        == Some("application/vnd.pgrst.object+json");
    if single {
        if rows.len() != 1 {
            return error(
                406,
                "message",
                "JSON object requested, multiple (or no) rows returned",
            );
        }
        return Json(rows[0].clone()).into_response();
    }

    Json(Value::Array(rows)).into_response()
}

async fn insert(
    State(store): State<FakeStore>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(response) = check_keys(&headers) {
        return response;
    }
    let mut state = store.0.lock().unwrap();
    if let Some((status, message)) = state.failing.get(&table) {
        return error(*status, "message", message);
    }

    state.writes.push(Write {
        method: "POST".to_string(),
        table: table.clone(),
        body: body.clone(),
    });
    let mut row = body;
    if let Some(fields) = row.as_object_mut() {
        fields
            .entry("id")
            .or_insert_with(|| json!(uuid::Uuid::new_v4()));
    }
    state.tables.entry(table).or_default().push(row);
    StatusCode::CREATED.into_response()
}

async fn update(
    State(store): State<FakeStore>,
    Path(table): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(response) = check_keys(&headers) {
        return response;
    }
    let mut state = store.0.lock().unwrap();
    if let Some((status, message)) = state.failing.get(&table) {
        return error(*status, "message", message);
    }

    state.writes.push(Write {
        method: "PATCH".to_string(),
        table: table.clone(),
        body: body.clone(),
    });

    let filters = filters(&params);
    let patch = body.as_object().cloned().unwrap_or_default();
    for row in state.tables.entry(table).or_default().iter_mut() {
        if filters.iter().all(|(c, cond)| matches(row, c, cond)) {
            if let Some(fields) = row.as_object_mut() {
                fields.extend(patch.clone());
            }
        }
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn current_user(headers: HeaderMap) -> Response {
    if headers.get("apikey").and_then(|v| v.to_str().ok()) != Some(ANON_KEY) {
        return error(401, "message", "No API key found in request");
    }
    match bearer(&headers) {
        Some(VALID_TOKEN) => Json(json!({"id": USER_ID, "email": "responder@example.org"})).into_response(),
        _ => error(401, "msg", "invalid JWT"),
    }
}

pub fn id(n: u32) -> String {
    format!("00000000-0000-0000-0000-{:012}", n)
}

/// The seeded store used by most tests.
pub fn seeded() -> FakeStore {
    FakeStore::new()
        .with_table(
            "incidents",
            json!([
                {
                    "id": id(1), "title": "Flood in Downtown", "type": "flood",
                    "severity": "critical", "status": "active",
                    "people_affected": 10, "people_rescued": 8, "rescue_eta_minutes": 12,
                    "location": {"address": "Downtown, Sector 7"},
                    "created_at": "2024-05-01T10:00:00+00:00"
                },
                {
                    "id": id(2), "title": "Building Collapse", "type": "collapse",
                    "severity": "high", "status": "active",
                    "people_affected": 5, "people_rescued": 5, "rescue_eta_minutes": 40,
                    "location": {"address": "Industrial Zone B"},
                    "created_at": "2024-05-02T08:30:00+00:00"
                },
                {
                    "id": id(3), "title": "Wildfire Spread", "type": "fire",
                    "severity": "medium", "status": "resolved",
                    "people_affected": 45, "people_rescued": 0, "rescue_eta_minutes": null,
                    "location": "Forest Hills",
                    "created_at": "2024-04-30T17:45:00+00:00"
                }
            ]),
        )
        .with_table(
            "rescue_teams",
            json!([
                {
                    "id": id(11), "name": "Alpha", "status": "deployed", "eta_minutes": 12,
                    "assigned_incident_id": id(1),
                    "contact_info": {"radio": "CH-1", "leader": "Rivera"}
                },
                {
                    "id": id(12), "name": "Bravo", "status": "available", "eta_minutes": null,
                    "assigned_incident_id": null, "contact_info": null
                },
                {
                    "id": id(13), "name": "Charlie", "status": "offline", "eta_minutes": 30,
                    "assigned_incident_id": id(99), "contact_info": {"radio": "CH-3"}
                }
            ]),
        )
        .with_table(
            "resources",
            json!([
                {"id": id(21), "name": "Central Shelter", "type": "shelter", "capacity": 200, "available_capacity": 45, "status": "open"},
                {"id": id(22), "name": "Food Distribution", "type": "food", "capacity": 500, "available_capacity": 350, "status": "open"},
                {"id": id(23), "name": "Medical Station", "type": "medical", "capacity": 50, "available_capacity": 12, "status": "busy"}
            ]),
        )
        .with_table(
            "jobs",
            json!([
                {
                    "id": id(31), "title": "Shelter Construction Helper", "company": "Relief Corps",
                    "work_type": "construction", "skills_required": ["Teamwork"],
                    "created_at": "2024-05-03T09:00:00+00:00"
                },
                {
                    "id": id(32), "title": "Transport Driver", "company": "Logistics Network",
                    "work_type": "transport", "created_at": "2024-05-01T09:00:00+00:00"
                }
            ]),
        )
        .with_table(
            "profiles",
            json!([
                {
                    "id": id(41), "user_id": USER_ID, "username": "responder",
                    "full_name": "Sam Responder", "age": 30, "skills": ["First Aid"]
                }
            ]),
        )
        .with_table(
            "saved_jobs",
            json!([
                {
                    "id": id(51), "job_id": id(31), "user_id": USER_ID,
                    "jobs": {"title": "Shelter Construction Helper", "company": "Relief Corps", "work_type": "construction", "location": null}
                }
            ]),
        )
}
