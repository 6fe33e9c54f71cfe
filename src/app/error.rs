use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::DeckError;
use crate::models::ErrorResponse;

impl DeckError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DeckError::MissingDeckId
            | DeckError::MalformedDeckId
            | DeckError::InvalidCount
            | DeckError::NonPositiveCount
            | DeckError::NotEnoughCards { .. } => StatusCode::BAD_REQUEST,
            DeckError::DeckNotFound => StatusCode::NOT_FOUND,
            DeckError::CreateFailed | DeckError::ManagerUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DeckError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
