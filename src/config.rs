use std::env;
use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is invalid: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Shape of the log lines written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    pub store_url: String,
    pub store_anon_key: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: String,
    pub service_name: String,
    pub log_format: LogFormat,
    /// Traces are exported only when a collector is configured.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8000".to_string());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        let log_format = match lookup("RUST_LOG_FORMAT") {
            None => LogFormat::default(),
            Some(raw) => LogFormat::parse(&raw).ok_or(ConfigError::Invalid {
                name: "RUST_LOG_FORMAT",
                value: raw,
            })?,
        };

        Ok(Self {
            store_url: required("STORE_URL")?,
            store_anon_key: required("STORE_ANON_KEY")?,
            bind_addr,
            cors_origin: lookup("CORS_ORIGIN")
                .unwrap_or_else(|| "http://localhost:8080".to_string()),
            service_name: lookup("SERVICE_NAME")
                .unwrap_or_else(|| "reliefnet-server".to_string()),
            log_format,
            otlp_endpoint: lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_store_is_configured() {
        let config = Config::from_lookup(lookup(&[
            ("STORE_URL", "https://store.example"),
            ("STORE_ANON_KEY", "anon"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.cors_origin, "http://localhost:8080");
        assert_eq!(config.service_name, "reliefnet-server");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.otlp_endpoint, None);
    }

    #[test]
    fn log_format_and_collector_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("STORE_URL", "https://store.example"),
            ("STORE_ANON_KEY", "anon"),
            ("RUST_LOG_FORMAT", "JSON"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://collector:4317"),
        ]))
        .unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://collector:4317"));

        let err = Config::from_lookup(lookup(&[
            ("STORE_URL", "https://store.example"),
            ("STORE_ANON_KEY", "anon"),
            ("RUST_LOG_FORMAT", "xml"),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "RUST_LOG_FORMAT is invalid: xml");
    }

    #[test]
    fn missing_store_settings_are_reported() {
        let err = Config::from_lookup(lookup(&[("STORE_URL", "https://store.example")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "STORE_ANON_KEY must be set");

        let err = Config::from_lookup(lookup(&[("STORE_URL", " "), ("STORE_ANON_KEY", "k")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "STORE_URL must be set");
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("STORE_URL", "https://store.example"),
            ("STORE_ANON_KEY", "anon"),
            ("BIND_ADDR", "localhost"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "BIND_ADDR", .. }));
    }
}
