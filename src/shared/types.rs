use serde::Serialize;
use utoipa::ToSchema;

/// Uniform response envelope. Success payloads are flattened into the
/// envelope so the wire shape stays `{success, message, ...fields}`;
/// failures carry only `{success: false, message}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }

    pub fn error(message: Option<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message,
            data: None,
        }
    }
}
