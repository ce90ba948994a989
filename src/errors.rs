use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Failures signaled by the ledger core. Idempotent no-ops are not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("challenge not found: {0}")]
    ChallengeNotFound(String),

    #[error("{username} is not a participant of challenge {challenge}")]
    ParticipantNotFound { challenge: String, username: String },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl LedgerError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LedgerError::ChallengeNotFound(_) | LedgerError::ParticipantNotFound { .. }
        )
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        if err.is_not_found() {
            Self::not_found(err.to_string())
        } else {
            Self::bad_request(err.to_string())
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::debug!(status = %self.status, error = %self.message, "request rejected");
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}
