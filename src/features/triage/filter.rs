use crate::features::reports::models::{Report, ReportStatus};
use crate::features::triage::distance::haversine_distance_km;
use crate::shared::constants::RECENT_SUMMARY_LIMIT;

/// Viewer coordinate for proximity triage. Constructing one is the
/// caller's proof that a location fix was obtained; without it the
/// filter cannot be invoked at all.
#[derive(Debug, Clone, Copy)]
pub struct ViewerLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Status filter for the triage view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(ReportStatus),
}

impl StatusFilter {
    /// Parse a filter label: "all" or one of the exact status labels
    pub fn from_label(label: &str) -> Option<Self> {
        if label == "all" {
            return Some(StatusFilter::All);
        }
        ReportStatus::from_label(label).map(StatusFilter::Only)
    }

    fn matches(&self, status: ReportStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// A report with its derived distance from the viewer. The distance is
/// recomputed on every filter pass and never persisted.
#[derive(Debug, Clone)]
pub struct TriagedReport {
    pub report: Report,
    pub distance_km: f64,
}

/// Keep the reports within `radius_km` of the viewer that match the
/// status filter, sorted nearest first. Ties keep their original
/// relative order.
pub fn nearby_reports(
    reports: Vec<Report>,
    viewer: ViewerLocation,
    radius_km: f64,
    status_filter: StatusFilter,
) -> Vec<TriagedReport> {
    let mut kept: Vec<TriagedReport> = reports
        .into_iter()
        .map(|report| {
            let distance_km = haversine_distance_km(
                viewer.latitude,
                viewer.longitude,
                report.latitude,
                report.longitude,
            );
            TriagedReport {
                report,
                distance_km,
            }
        })
        .filter(|t| t.distance_km <= radius_km && status_filter.matches(t.report.status))
        .collect();

    kept.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    kept
}

/// First entries of an already newest-first report list, for the public
/// landing summary. Presentation-layer truncation only; the list
/// endpoint itself never limits.
pub fn recent_summary(reports: &[Report]) -> &[Report] {
    &reports[..reports.len().min(RECENT_SUMMARY_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn report(id: i64, latitude: f64, longitude: f64, status: ReportStatus) -> Report {
        Report {
            id,
            image: "data:image/png;base64,abc".to_string(),
            latitude,
            longitude,
            note: String::new(),
            status,
            created_at: Utc::now(),
        }
    }

    // Viewer in central Kathmandu for the proximity tests
    const VIEWER: ViewerLocation = ViewerLocation {
        latitude: 27.7172,
        longitude: 85.3240,
    };

    #[test]
    fn excludes_reports_beyond_radius() {
        let reports = vec![
            report(1, 27.7180, 85.3250, ReportStatus::Pending), // ~0.1 km
            report(2, 28.2096, 83.9856, ReportStatus::Pending), // Pokhara, ~148 km
        ];

        let kept = nearby_reports(reports, VIEWER, 10.0, StatusFilter::All);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].report.id, 1);
        assert!(kept[0].distance_km <= 10.0);
    }

    #[test]
    fn sorts_ascending_by_distance() {
        let reports = vec![
            report(1, 27.7600, 85.3240, ReportStatus::Pending), // ~4.8 km
            report(2, 27.7172, 85.3240, ReportStatus::Pending), // 0 km
            report(3, 27.7350, 85.3240, ReportStatus::Pending), // ~2.0 km
        ];

        let kept = nearby_reports(reports, VIEWER, 50.0, StatusFilter::All);

        let order: Vec<i64> = kept.iter().map(|t| t.report.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert!(kept.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn equal_distances_keep_original_order() {
        let reports = vec![
            report(5, 27.7180, 85.3250, ReportStatus::Pending),
            report(9, 27.7180, 85.3250, ReportStatus::Pending),
            report(2, 27.7180, 85.3250, ReportStatus::Pending),
        ];

        let kept = nearby_reports(reports, VIEWER, 10.0, StatusFilter::All);

        let order: Vec<i64> = kept.iter().map(|t| t.report.id).collect();
        assert_eq!(order, vec![5, 9, 2]);
    }

    #[test]
    fn status_filter_applies_within_radius() {
        let reports = vec![
            report(1, 27.7180, 85.3250, ReportStatus::Pending),
            report(2, 27.7185, 85.3255, ReportStatus::Resolved),
            report(3, 27.7190, 85.3260, ReportStatus::InProgress),
        ];

        let kept = nearby_reports(
            reports,
            VIEWER,
            10.0,
            StatusFilter::Only(ReportStatus::Resolved),
        );

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].report.id, 2);
    }

    #[test]
    fn filter_labels_parse() {
        assert_eq!(StatusFilter::from_label("all"), Some(StatusFilter::All));
        assert_eq!(
            StatusFilter::from_label("In Progress"),
            Some(StatusFilter::Only(ReportStatus::InProgress))
        );
        assert_eq!(StatusFilter::from_label("Archived"), None);
    }

    #[test]
    fn nearby_viewer_sees_submitted_report() {
        let reports = vec![report(1, 27.7, 85.3, ReportStatus::Pending)];

        let viewer = ViewerLocation {
            latitude: 27.71,
            longitude: 85.31,
        };
        let kept = nearby_reports(reports.clone(), viewer, 5.0, StatusFilter::All);

        assert_eq!(kept.len(), 1);
        assert!((kept[0].distance_km - 1.4).abs() < 0.5, "got {} km", kept[0].distance_km);

        // A viewer on the other side of the world sees nothing
        let far_viewer = ViewerLocation {
            latitude: 0.0,
            longitude: 0.0,
        };
        assert!(nearby_reports(reports, far_viewer, 5.0, StatusFilter::All).is_empty());
    }

    #[test]
    fn recent_summary_truncates_to_limit() {
        let reports: Vec<Report> = (1..=8)
            .map(|id| report(id, 27.7, 85.3, ReportStatus::Pending))
            .collect();

        let summary = recent_summary(&reports);

        assert_eq!(summary.len(), RECENT_SUMMARY_LIMIT);
        assert_eq!(summary[0].id, 1);

        let short: Vec<Report> = reports[..3].to_vec();
        assert_eq!(recent_summary(&short).len(), 3);
    }
}
