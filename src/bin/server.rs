use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use reliefnet_server::{app, config::Config, store::StoreClient};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() {
    // Load .env if present (dotenvy)
    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    reliefnet_server::telemetry::init_telemetry(&config);

    let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();

    let cors_origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .expect("CORS_ORIGIN must be a valid header value");

    let store = StoreClient::new(&config.store_url, &config.store_anon_key);
    let app = server(store, cors_origin, prometheus_layer, metric_handle);

    tracing::info!("ReliefNet server listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

fn server(
    store: StoreClient,
    cors_origin: HeaderValue,
    prometheus_layer: axum_prometheus::PrometheusMetricLayer<'static>,
    metric_handle: metrics_exporter_prometheus::PrometheusHandle,
) -> Router {
    app::router(store)
        .layer(prometheus_layer)
        .layer(
            CorsLayer::new()
                .allow_origin(cors_origin)
                .allow_methods([Method::GET, Method::POST, Method::PATCH])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_credentials(true),
        )
        .route("/metrics", get(|| async move { metric_handle.render() }))
}
