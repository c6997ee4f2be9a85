//! Form payloads and their normalisation into store rows.
//!
//! Validation is limited to required fields being present. Everything else
//! is passed to the store as entered.

use serde::Deserialize;
use uuid::Uuid;

use crate::entities::{Location, NewIncident, NewJobApplication, ProfilePatch};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Parse an age the way a browser's `parseInt` would: leading digits win,
/// anything unparseable becomes `None`.
pub fn parse_age(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().ok().map(|n| n * sign)
}

fn required(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobApplicationForm {
    #[serde(default)]
    pub applicant_name: String,
    #[serde(default)]
    pub applicant_age: String,
    #[serde(default)]
    pub work_time_preference: String,
    #[serde(default)]
    pub cover_letter: String,
}

impl JobApplicationForm {
    pub fn into_record(self, job_id: Uuid, applicant_id: Uuid) -> Result<NewJobApplication, FormError> {
        required(&self.applicant_name, "applicant_name")?;
        Ok(NewJobApplication {
            job_id,
            applicant_id,
            applicant_age: parse_age(&self.applicant_age),
            applicant_name: self.applicant_name,
            work_time_preference: self.work_time_preference,
            cover_letter: self.cover_letter,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub phone: String,
    /// Free-text address.
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Trim skills, drop blanks and keep the first occurrence of each.
pub fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    skills.into_iter().fold(Vec::new(), |mut acc, skill| {
        let skill = skill.trim().to_string();
        if !skill.is_empty() && !acc.contains(&skill) {
            acc.push(skill);
        }
        acc
    })
}

impl ProfileForm {
    pub fn into_patch(self) -> ProfilePatch {
        let location = self.location.trim();
        ProfilePatch {
            age: parse_age(&self.age),
            location: (!location.is_empty()).then(|| Location::from_address(location)),
            skills: normalize_skills(self.skills),
            full_name: self.full_name,
            phone: self.phone,
        }
    }
}

pub const EMERGENCY_TYPES: [&str; 4] = [
    "Medical Emergency",
    "Natural Disaster",
    "Fire Emergency",
    "Security Threat",
];

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SosForm {
    #[serde(default)]
    pub emergency_type: String,
    #[serde(default = "default_people_count")]
    pub people_count: i64,
    #[serde(default)]
    pub description: Option<String>,
    /// One-shot reading taken by the browser; absent if the user refused.
    #[serde(default)]
    pub position: Option<Position>,
}

fn default_people_count() -> i64 {
    1
}

impl SosForm {
    pub fn into_incident(self, reported_by: Option<Uuid>) -> Result<NewIncident, FormError> {
        required(&self.emergency_type, "emergency_type")?;
        Ok(NewIncident {
            title: format!("SOS: {}", self.emergency_type.trim()),
            kind: self.emergency_type.trim().to_string(),
            severity: "critical".to_string(),
            status: "active".to_string(),
            description: self.description.filter(|d| !d.trim().is_empty()),
            people_affected: self.people_count.max(1),
            location: self.position.map(|p| Location::from_position(p.lat, p.lng)),
            reported_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_parsing_follows_leading_digits() {
        assert_eq!(parse_age("34"), Some(34));
        assert_eq!(parse_age(" 34 years"), Some(34));
        assert_eq!(parse_age("-3"), Some(-3));
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("abc"), None);
        assert_eq!(parse_age("99999999999"), None);
    }

    #[test]
    fn application_requires_a_name() {
        let form = JobApplicationForm {
            applicant_name: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.into_record(Uuid::nil(), Uuid::nil()),
            Err(FormError::MissingField("applicant_name"))
        );
    }

    #[test]
    fn application_keeps_fields_as_entered() {
        let job_id = Uuid::from_u128(1);
        let applicant_id = Uuid::from_u128(2);
        let form = JobApplicationForm {
            applicant_name: "Ada".to_string(),
            applicant_age: "n/a".to_string(),
            work_time_preference: "nights".to_string(),
            cover_letter: String::new(),
        };
        let record = form.into_record(job_id, applicant_id).unwrap();
        assert_eq!(record.job_id, job_id);
        assert_eq!(record.applicant_id, applicant_id);
        assert_eq!(record.applicant_age, None);
        assert_eq!(record.work_time_preference, "nights");
    }

    #[test]
    fn profile_patch_normalises_location_and_skills() {
        let form = ProfileForm {
            full_name: "Ada".to_string(),
            age: "41".to_string(),
            phone: "555".to_string(),
            location: "  ".to_string(),
            skills: vec![
                "First Aid".to_string(),
                " ".to_string(),
                "First Aid ".to_string(),
                "Driving".to_string(),
            ],
        };
        let patch = form.into_patch();
        assert_eq!(patch.age, Some(41));
        assert_eq!(patch.location, None);
        assert_eq!(patch.skills, vec!["First Aid", "Driving"]);

        let patch = ProfileForm {
            location: "Harbour Road".to_string(),
            ..Default::default()
        }
        .into_patch();
        assert_eq!(
            patch.location.and_then(|l| l.address).as_deref(),
            Some("Harbour Road")
        );
    }

    #[test]
    fn sos_becomes_a_critical_active_incident() {
        let form = SosForm {
            emergency_type: "Fire Emergency".to_string(),
            people_count: 0,
            description: Some(" ".to_string()),
            position: Some(Position { lat: 1.5, lng: -2.0 }),
        };
        let incident = form.into_incident(None).unwrap();
        assert_eq!(incident.title, "SOS: Fire Emergency");
        assert_eq!(incident.severity, "critical");
        assert_eq!(incident.status, "active");
        assert_eq!(incident.people_affected, 1);
        assert_eq!(incident.description, None);
        assert_eq!(
            incident.location,
            Some(Location::from_position(1.5, -2.0))
        );
    }

    #[test]
    fn sos_requires_an_emergency_type() {
        let form: SosForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form.people_count, 1);
        assert_eq!(
            form.into_incident(None).unwrap_err(),
            FormError::MissingField("emergency_type")
        );
    }
}
