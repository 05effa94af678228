use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Timestamp format used when rendering caller-fault errors
const ERROR_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Domain error taxonomy for events.
///
/// `Validation` and `NotFound` carry the moment they were raised, which is
/// part of the rendered message. Everything else is `Internal`.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("{message} (at: {})", .raised_at.format(ERROR_TIME_FORMAT))]
    Validation {
        message: String,
        raised_at: DateTime<Utc>,
    },

    #[error("{message} (at: {})", .raised_at.format(ERROR_TIME_FORMAT))]
    NotFound {
        message: String,
        raised_at: DateTime<Utc>,
    },

    #[error("{0}")]
    Internal(String),
}

pub type EventResult<T> = Result<T, EventError>;

impl EventError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Convert EventError to AppError for standardized error responses
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match &err {
            EventError::Validation { .. } => AppError::BadRequest(err.to_string()),
            EventError::NotFound { .. } => AppError::NotFound(err.to_string()),
            EventError::Internal(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        // AppError owns the status mapping and logs before responding
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
