use serde_json::Value;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The store answered with a non-success status. `message` is the text
    /// the store returned, suitable for showing to the user as-is.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("failed to decode {table} response: {source}")]
    Decode {
        table: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("refusing to update {0} without a row filter")]
    UnfilteredWrite(String),
}

impl StoreError {
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: error_message(status, body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull the human-readable message out of a store error body. The REST
/// endpoint uses `message`, the auth endpoint `msg` or `error_description`.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "msg", "error_description", "error"] {
            if let Some(Value::String(text)) = fields.get(key) {
                if !text.is_empty() {
                    return text.clone();
                }
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("store responded with status {}", status)
    } else {
        trimmed.to_string()
    }
}
