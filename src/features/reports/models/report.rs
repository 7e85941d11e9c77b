use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Triage state of a report. The labels are the exact strings stored in
/// the database and exchanged with clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum ReportStatus {
    Pending,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ReportStatus {
    /// Parse the exact client-facing label. Any other value, including a
    /// different casing, is not a valid status.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Pending" => Some(ReportStatus::Pending),
            "In Progress" => Some(ReportStatus::InProgress),
            "Resolved" => Some(ReportStatus::Resolved),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Database model for a submitted report
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: i64,
    pub image: String,
    pub latitude: f64,
    pub longitude: f64,
    pub note: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

/// Data for inserting a new report. `created_at` is the client-supplied
/// submission time; the service falls back to server time.
#[derive(Debug)]
pub struct NewReport {
    pub image: String,
    pub latitude: f64,
    pub longitude: f64,
    pub note: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for status in [
            ReportStatus::Pending,
            ReportStatus::InProgress,
            ReportStatus::Resolved,
        ] {
            assert_eq!(ReportStatus::from_label(status.as_label()), Some(status));
        }
    }

    #[test]
    fn status_rejects_unknown_labels() {
        assert_eq!(ReportStatus::from_label("Archived"), None);
        assert_eq!(ReportStatus::from_label("pending"), None);
        assert_eq!(ReportStatus::from_label(""), None);
    }

    #[test]
    fn status_serializes_to_wire_labels() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(
            serde_json::from_str::<ReportStatus>("\"In Progress\"").unwrap(),
            ReportStatus::InProgress
        );
    }
}
