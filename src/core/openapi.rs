use utoipa::{Modify, OpenApi};

use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        reports_handlers::report_handler::submit_report,
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::update_status,
    ),
    components(
        schemas(
            reports_models::ReportStatus,
            reports_dtos::SubmitReportDto,
            reports_dtos::UpdateStatusDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::SubmitReceiptDto,
            ApiResponse<reports_dtos::SubmitReceiptDto>,
        )
    ),
    tags(
        (name = "reports", description = "Animal welfare reports: public intake, listing, and triage status updates"),
    ),
    info(
        title = "PashuSewa API",
        version = "0.1.0",
        description = "API documentation for PashuSewa",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
