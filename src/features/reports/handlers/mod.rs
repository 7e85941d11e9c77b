pub mod report_handler;

pub use report_handler::{list_reports, submit_report, update_status, ReportState};
