mod report_dto;

pub use report_dto::{
    CoordinateValue, ListReportsQuery, ReportIdValue, ReportResponseDto, SubmitReceiptDto,
    SubmitReportDto, UpdateStatusDto,
};
