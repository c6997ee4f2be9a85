use axum::{
    extract::{Extension, Request},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tower_cookies::Cookies;
use tracing::warn;
use uuid::Uuid;

use crate::store::StoreClient;

pub const SESSION_COOKIE: &str = "reliefnet_session";

/// The signed-in caller. The token is passed on to the store so row-level
/// policies apply to the caller rather than the anonymous role.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub access_token: String,
}

/// Bearer header first, then the session cookie.
pub fn session_token(headers: &HeaderMap, cookies: &Cookies) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| cookies.get(SESSION_COOKIE).map(|c| c.value().to_string()))
}

/// Resolve the caller's session, if they sent one the store recognises.
pub async fn resolve_session(
    store: &StoreClient,
    headers: &HeaderMap,
    cookies: &Cookies,
) -> Option<Session> {
    let token = session_token(headers, cookies)?;
    match store.current_user(&token).await {
        Ok(user) => {
            tracing::Span::current().record("user_id", tracing::field::display(user.id));
            Some(Session {
                user_id: user.id,
                access_token: token,
            })
        }
        Err(e) => {
            warn!("Rejected session token: {}", e);
            None
        }
    }
}

pub async fn session_middleware(
    Extension(store): Extension<StoreClient>,
    cookies: Cookies,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(session) = resolve_session(&store, request.headers(), &cookies).await {
        request.extensions_mut().insert(session);
        return next.run(request).await;
    }
    (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))).into_response()
}
