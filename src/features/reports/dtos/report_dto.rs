use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report, ReportStatus};

/// Coordinate accepted as a JSON number or a numeric string, mirroring
/// what the intake form actually sends.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    Number(f64),
    Text(String),
}

impl CoordinateValue {
    /// Finite numeric value, or None when the input does not parse.
    pub fn as_finite_f64(&self) -> Option<f64> {
        let value = match self {
            CoordinateValue::Number(n) => *n,
            CoordinateValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// Report id accepted as a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReportIdValue {
    Number(i64),
    Text(String),
}

impl ReportIdValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ReportIdValue::Number(n) => Some(*n),
            ReportIdValue::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }
}

/// Request DTO for submitting a report
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitReportDto {
    /// Data-URI encoded photo of the animal
    pub image: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub latitude: Option<CoordinateValue>,
    #[schema(value_type = Option<f64>)]
    pub longitude: Option<CoordinateValue>,
    pub note: Option<String>,
    /// Submission time reported by the client; server time when omitted
    pub created_at: Option<DateTime<Utc>>,
}

impl SubmitReportDto {
    /// Validate the draft and turn it into an insertable report.
    /// Presence is checked before coordinate parsing so the error names
    /// the right problem.
    pub fn into_new_report(self) -> Result<NewReport> {
        let image = self.image.filter(|image| !image.is_empty());
        let (image, latitude, longitude) = match (image, self.latitude, self.longitude) {
            (Some(image), Some(latitude), Some(longitude)) => (image, latitude, longitude),
            _ => {
                return Err(AppError::Validation(
                    "Missing required fields: image, latitude, longitude".to_string(),
                ))
            }
        };

        let (latitude, longitude) = match (latitude.as_finite_f64(), longitude.as_finite_f64()) {
            (Some(latitude), Some(longitude)) => (latitude, longitude),
            _ => {
                return Err(AppError::Validation(
                    "Invalid coordinates. Latitude and longitude must be numbers.".to_string(),
                ))
            }
        };

        Ok(NewReport {
            image,
            latitude,
            longitude,
            note: self.note.unwrap_or_default(),
            created_at: self.created_at,
        })
    }
}

/// Request DTO for updating a report's status
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusDto {
    #[schema(value_type = Option<i64>)]
    pub id: Option<ReportIdValue>,
    pub status: Option<String>,
}

impl UpdateStatusDto {
    /// Validate into a (report id, target status) pair
    pub fn into_parts(self) -> Result<(i64, ReportStatus)> {
        let (id, status) = match (self.id, self.status) {
            (Some(id), Some(status)) => (id, status),
            _ => {
                return Err(AppError::Validation(
                    "Missing required fields: id, status".to_string(),
                ))
            }
        };

        let id = id
            .as_i64()
            .filter(|id| *id > 0)
            .ok_or_else(|| AppError::Validation("Invalid report ID".to_string()))?;

        let status = ReportStatus::from_label(&status).ok_or_else(|| {
            AppError::Validation(
                "Invalid status. Must be: Pending, In Progress, or Resolved".to_string(),
            )
        })?;

        Ok((id, status))
    }
}

/// Response DTO for a report
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: i64,
    pub image: String,
    pub latitude: f64,
    pub longitude: f64,
    pub note: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            image: r.image,
            latitude: r.latitude,
            longitude: r.longitude,
            note: r.note,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

/// Payload flattened into the submit success envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitReceiptDto {
    /// Store-assigned id of the new report
    pub id: i64,
}

/// Query parameters for listing reports
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListReportsQuery {
    /// Exact status value to filter by; omitted returns all reports
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(
        image: Option<&str>,
        latitude: Option<CoordinateValue>,
        longitude: Option<CoordinateValue>,
    ) -> SubmitReportDto {
        SubmitReportDto {
            image: image.map(String::from),
            latitude,
            longitude,
            note: None,
            created_at: None,
        }
    }

    fn num(value: f64) -> Option<CoordinateValue> {
        Some(CoordinateValue::Number(value))
    }

    fn text(value: &str) -> Option<CoordinateValue> {
        Some(CoordinateValue::Text(value.to_string()))
    }

    #[test]
    fn valid_draft_becomes_new_report() {
        let report = draft(Some("data:image/png;base64,abc"), num(27.7172), num(85.3240))
            .into_new_report()
            .unwrap();

        assert_eq!(report.image, "data:image/png;base64,abc");
        assert_eq!(report.latitude, 27.7172);
        assert_eq!(report.longitude, 85.3240);
        assert_eq!(report.note, "");
        assert!(report.created_at.is_none());
    }

    #[test]
    fn string_coordinates_are_accepted() {
        let report = draft(Some("data:,x"), text("27.7172"), text(" 85.3240 "))
            .into_new_report()
            .unwrap();

        assert_eq!(report.latitude, 27.7172);
        assert_eq!(report.longitude, 85.3240);
    }

    #[test]
    fn missing_fields_are_rejected_before_parsing() {
        for dto in [
            draft(None, num(27.7), num(85.3)),
            draft(Some("data:,x"), None, num(85.3)),
            draft(Some("data:,x"), num(27.7), None),
            // An empty image is treated as missing, not as a bad value
            draft(Some(""), text("abc"), num(85.3)),
        ] {
            let err = dto.into_new_report().unwrap_err();
            assert!(matches!(
                err,
                AppError::Validation(msg)
                    if msg == "Missing required fields: image, latitude, longitude"
            ));
        }
    }

    #[test]
    fn non_numeric_coordinates_are_rejected() {
        for (latitude, longitude) in [
            (text("abc"), num(85.3)),
            (num(27.7), text("east")),
            (text("NaN"), num(85.3)),
            (num(f64::INFINITY), num(85.3)),
        ] {
            let err = draft(Some("data:,x"), latitude, longitude)
                .into_new_report()
                .unwrap_err();
            assert!(matches!(
                err,
                AppError::Validation(msg)
                    if msg == "Invalid coordinates. Latitude and longitude must be numbers."
            ));
        }
    }

    #[test]
    fn note_and_created_at_pass_through() {
        let submitted_at = Utc.with_ymd_and_hms(2025, 6, 1, 10, 30, 0).unwrap();
        let dto = SubmitReportDto {
            image: Some("data:,x".to_string()),
            latitude: num(27.7),
            longitude: num(85.3),
            note: Some("Injured dog near the bridge".to_string()),
            created_at: Some(submitted_at),
        };

        let report = dto.into_new_report().unwrap();
        assert_eq!(report.note, "Injured dog near the bridge");
        assert_eq!(report.created_at, Some(submitted_at));
    }

    #[test]
    fn update_status_requires_both_fields() {
        for dto in [
            UpdateStatusDto {
                id: None,
                status: Some("Resolved".to_string()),
            },
            UpdateStatusDto {
                id: Some(ReportIdValue::Number(3)),
                status: None,
            },
        ] {
            let err = dto.into_parts().unwrap_err();
            assert!(matches!(
                err,
                AppError::Validation(msg) if msg == "Missing required fields: id, status"
            ));
        }
    }

    #[test]
    fn update_status_rejects_bad_ids() {
        for id in [
            ReportIdValue::Number(0),
            ReportIdValue::Number(-5),
            ReportIdValue::Text("abc".to_string()),
        ] {
            let dto = UpdateStatusDto {
                id: Some(id),
                status: Some("Resolved".to_string()),
            };
            let err = dto.into_parts().unwrap_err();
            assert!(matches!(
                err,
                AppError::Validation(msg) if msg == "Invalid report ID"
            ));
        }
    }

    #[test]
    fn update_status_rejects_unknown_status() {
        let dto = UpdateStatusDto {
            id: Some(ReportIdValue::Number(1)),
            status: Some("Archived".to_string()),
        };
        let err = dto.into_parts().unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(msg)
                if msg == "Invalid status. Must be: Pending, In Progress, or Resolved"
        ));
    }

    #[test]
    fn update_status_accepts_string_ids() {
        let dto = UpdateStatusDto {
            id: Some(ReportIdValue::Text("42".to_string())),
            status: Some("In Progress".to_string()),
        };
        assert_eq!(
            dto.into_parts().unwrap(),
            (42, ReportStatus::InProgress)
        );
    }
}
