use crate::views::{eta::EtaView, incidents::IncidentsView, overview::OverviewView, rescued::RescuedView};

pub fn record_store_request(table: &'static str, operation: &'static str) {
    metrics::counter!("reliefnet_store_requests_total", "table" => table, "operation" => operation)
        .increment(1);
}

pub fn record_store_failure(table: &'static str, operation: &'static str) {
    metrics::counter!("reliefnet_store_failures_total", "table" => table, "operation" => operation)
        .increment(1);
}

/// A view fell back to its empty state because a read failed.
pub fn record_empty_view(view: &'static str) {
    metrics::counter!("reliefnet_view_fallbacks_total", "view" => view).increment(1);
}

pub fn record_form_submission(form: &'static str, outcome: &'static str) {
    metrics::counter!("reliefnet_form_submissions_total", "form" => form, "outcome" => outcome)
        .increment(1);
}

// Gauges mirror the most recently rendered numbers for the ops dashboard.

pub fn observe_overview(view: &OverviewView) {
    metrics::gauge!("reliefnet_active_incidents").set(view.kpis.active_incidents as f64);
    metrics::gauge!("reliefnet_deployed_teams").set(view.kpis.deployed_teams as f64);
    metrics::gauge!("reliefnet_rescue_rate_percent").set(view.kpis.rescue_rate as f64);
}

pub fn observe_incidents(view: &IncidentsView) {
    metrics::gauge!("reliefnet_active_incidents").set(view.summary.active as f64);
    metrics::gauge!("reliefnet_critical_incidents").set(view.summary.critical as f64);
}

pub fn observe_eta(view: &EtaView) {
    metrics::gauge!("reliefnet_average_eta_minutes").set(view.summary.average_eta as f64);
    metrics::gauge!("reliefnet_deployed_teams").set(view.summary.deployed_teams as f64);
}

pub fn observe_rescued(view: &RescuedView) {
    metrics::gauge!("reliefnet_people_rescued").set(view.summary.total_rescued as f64);
    metrics::gauge!("reliefnet_rescue_rate_percent").set(view.summary.rescue_rate as f64);
}
