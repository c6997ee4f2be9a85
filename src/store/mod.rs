//! Client for the hosted relational store.
//!
//! Rows live behind a PostgREST endpoint (`/rest/v1/{table}`) and sessions
//! behind the auth endpoint (`/auth/v1/user`). Every call is a single
//! request/response; nothing is cached, retried or timed out here.

mod error;
mod query;

pub use error::{StoreError, StoreResult};
pub use query::{Order, TableQuery};

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, error};
use uuid::Uuid;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// The user a session token belongs to, as reported by the auth endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl StoreClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// Fetch every row matching `query`. `token` is the caller's session
    /// token; reads without one run as the anonymous role.
    pub async fn select<T: DeserializeOwned>(
        &self,
        query: &TableQuery,
        token: Option<&str>,
    ) -> StoreResult<Vec<T>> {
        let table = query.table_name();
        let request = self.client.get(self.rest_url(table)).query(&query.params());
        let body = self.send(table, "select", request, token).await?;
        decode(table, &body)
    }

    /// Fetch exactly one row. The store answers 406 when zero or several
    /// rows match.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        query: &TableQuery,
        token: Option<&str>,
    ) -> StoreResult<T> {
        let table = query.table_name();
        let request = self
            .client
            .get(self.rest_url(table))
            .query(&query.params())
            .header(ACCEPT, SINGLE_OBJECT);
        let body = self.send(table, "select_one", request, token).await?;
        decode(table, &body)
    }

    pub async fn insert<T: Serialize + ?Sized>(
        &self,
        table: &'static str,
        row: &T,
        token: Option<&str>,
    ) -> StoreResult<()> {
        let request = self
            .client
            .post(self.rest_url(table))
            .header("Prefer", "return=minimal")
            .json(row);
        self.send(table, "insert", request, token).await?;
        Ok(())
    }

    /// Apply `patch` to the rows matched by the filters of `query`.
    pub async fn update<T: Serialize + ?Sized>(
        &self,
        query: &TableQuery,
        patch: &T,
        token: Option<&str>,
    ) -> StoreResult<()> {
        let table = query.table_name();
        let filters = query.filter_params();
        if filters.is_empty() {
            return Err(StoreError::UnfilteredWrite(table.to_string()));
        }

        let request = self
            .client
            .patch(self.rest_url(table))
            .query(&filters)
            .header("Prefer", "return=minimal")
            .json(patch);
        self.send(table, "update", request, token).await?;
        Ok(())
    }

    /// Resolve a session token to its user.
    pub async fn current_user(&self, token: &str) -> StoreResult<AuthUser> {
        let request = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url));
        let body = self.send("auth", "current_user", request, Some(token)).await?;
        decode("auth", &body)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn send(
        &self,
        table: &'static str,
        operation: &'static str,
        request: RequestBuilder,
        token: Option<&str>,
    ) -> StoreResult<String> {
        crate::metrics::record_store_request(table, operation);

        let request = request
            .header("apikey", &self.anon_key)
            .bearer_auth(token.unwrap_or(self.anon_key.as_str()));

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(table, operation, "Store request failed: {}", e);
                crate::metrics::record_store_failure(table, operation);
                return Err(e.into());
            }
        };

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            crate::metrics::record_store_failure(table, operation);
            StoreError::from(e)
        })?;

        if !status.is_success() {
            crate::metrics::record_store_failure(table, operation);
            let err = StoreError::from_response(status.as_u16(), &body);
            error!(table, operation, status = status.as_u16(), "Store rejected request: {}", err);
            return Err(err);
        }

        debug!(table, operation, bytes = body.len(), "Store request succeeded");
        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(table: &str, body: &str) -> StoreResult<T> {
    serde_json::from_str(body).map_err(|source| StoreError::Decode {
        table: table.to_string(),
        source,
    })
}
