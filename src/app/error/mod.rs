use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::{config::MissingSettings, email::DeliveryError};

mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// Everything that can end an API request early.
///
/// The `Display` output is what the client sees, so variants wrapping internal
/// errors keep their details out of it. Those details are logged instead.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid JSON payload.")]
    InvalidPayload(#[from] JsonRejection),
    #[error("{0}")]
    ValidationError(String),
    #[error("Method not allowed.")]
    MethodNotAllowed,
    #[error(transparent)]
    MissingSettings(#[from] MissingSettings),
    #[error("Failed to send RSVP email.")]
    DeliveryError(#[from] DeliveryError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingSettings(_) | Self::DeliveryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidPayload(rejection) => {
                tracing::warn!(detail = %rejection.body_text(), "rejected rsvp payload");
            }
            Self::ValidationError(reason) => {
                tracing::warn!(detail = %reason, "rsvp failed validation");
            }
            Self::MethodNotAllowed => {}
            Self::MissingSettings(missing) => {
                tracing::error!(%missing, "rsvp received without email settings");
            }
            Self::DeliveryError(e) => {
                tracing::error!(detail = ?e, "failed to send RSVP email");
            }
        }

        (
            self.status_code(),
            Json(schema::Error {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
