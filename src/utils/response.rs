use serde::Serialize;
use utoipa::ToSchema;

/// Standard success envelope.
///
/// Shape:
/// ```json
/// {
///   "isSuccess": true,
///   "code": "COMMON200",
///   "message": "Request was successful.",
///   "result": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T: Serialize> {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<T>,
}

impl<T: Serialize> BaseResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            is_success: true,
            code: "COMMON200".to_string(),
            message: "Request was successful.".to_string(),
            result: Some(result),
        }
    }

    /// Success envelope for read paths where absence is a valid outcome
    /// (`result` serializes as `null`).
    pub fn success_opt(result: Option<T>) -> Self {
        Self {
            is_success: true,
            code: "COMMON200".to_string(),
            message: "Request was successful.".to_string(),
            result,
        }
    }
}

/// Error envelope.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<()>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            code: code.into(),
            message: message.into(),
            result: None,
        }
    }
}
