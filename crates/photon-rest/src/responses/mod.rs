//! API response types.
//!
//! Every response uses the same envelope: `{"code": 200, "data": ...}` on
//! success and `{"code": 500, "error": {...}}` on failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use photon_core::{ErrorResponse, PhotonError};
use serde::Serialize;
use tracing::error;

/// Standard API response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn success(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            data: Some(data),
            error: None,
        }
    }

    /// Creates an error response.
    pub fn error(code: u16, error: ErrorResponse) -> ApiResponse<()> {
        ApiResponse {
            code,
            data: None,
            error: Some(error),
        }
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub PhotonError);

impl From<PhotonError> for AppError {
    fn from(err: PhotonError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        error!(code = self.0.error_code(), error = %self.0, "Request failed");

        let error_response = ErrorResponse::from_error(&self.0);
        let body = Json(ApiResponse::<()>::error(status.as_u16(), error_response));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use photon_core::{FetchError, Photo};

    #[test]
    fn test_success_envelope() {
        let response = ApiResponse::success(vec![Photo::new(1, 1, "t", "u", "tu")]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "code": 200,
                "data": [{"albumId": 1, "id": 1, "title": "t", "url": "u", "thumbnailUrl": "tu"}]
            })
        );
    }

    #[test]
    fn test_error_envelope() {
        let err = PhotonError::from(FetchError::Transport("connection refused".to_string()));
        let response = ApiResponse::<()>::error(500, ErrorResponse::from_error(&err));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], 500);
        assert_eq!(json["error"]["type"], "UPSTREAM_FAILED");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_app_error_status() {
        let response = AppError(PhotonError::CorruptCache("bad".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
