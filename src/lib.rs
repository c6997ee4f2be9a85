pub mod api;
pub mod app;
pub mod config;
pub mod entities;
pub mod forms;
pub mod metrics;
pub mod store;
pub mod telemetry;
pub mod views;
