use serde::Serialize;

/// Visual emphasis the browser maps onto its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Danger,
    Warning,
    Primary,
    Success,
    Default,
}

pub fn severity_tone(severity: &str) -> Tone {
    match severity {
        "critical" => Tone::Danger,
        "high" => Tone::Warning,
        "medium" => Tone::Primary,
        "low" => Tone::Success,
        _ => Tone::Default,
    }
}

pub fn incident_status_tone(status: &str) -> Tone {
    match status {
        "active" => Tone::Danger,
        "ongoing" => Tone::Warning,
        "resolved" => Tone::Success,
        _ => Tone::Default,
    }
}

pub fn team_status_tone(status: &str) -> Tone {
    match status {
        "deployed" => Tone::Warning,
        "available" => Tone::Success,
        _ => Tone::Default,
    }
}

pub fn resource_status_tone(status: &str) -> Tone {
    match status {
        "open" => Tone::Success,
        "busy" => Tone::Warning,
        "full" => Tone::Danger,
        _ => Tone::Default,
    }
}

/// Urgency of an arrival estimate: green within 10 minutes, amber within 30.
pub fn eta_tone(minutes: i64) -> Tone {
    if minutes <= 10 {
        Tone::Success
    } else if minutes <= 30 {
        Tone::Warning
    } else {
        Tone::Danger
    }
}
