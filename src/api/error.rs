use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::dto::ErrorResponse;
use crate::utils::error::CalcError;

impl CalcError {
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {} (Category: {:?})", self, self.category());
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        let body = ErrorResponse {
            error: self.user_friendly_message(),
        };
        (status, Json(body)).into_response()
    }
}
