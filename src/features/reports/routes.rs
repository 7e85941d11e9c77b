use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature. All routes are public: reports
/// come from an anonymous intake form and the triage view fetches and
/// filters client-side.
pub fn routes(report_service: Arc<ReportService>) -> Router {
    let state = ReportState { report_service };

    Router::new()
        .route("/api/report", post(handlers::submit_report))
        .route("/api/reports", get(handlers::list_reports))
        .route("/api/update-status", post(handlers::update_status))
        .with_state(state)
}
