//! Typed error handling for biztime
//!
//! Every handler returns `Result<_, BizError>`. Nothing is caught inside the
//! handlers: the error travels back to axum, and the [`IntoResponse`] impl
//! below is the one place where a failure becomes an HTTP response.
//!
//! # Error Categories
//!
//! - [`BizError::NotFound`]: the requested company or invoice does not exist (404)
//! - [`BizError::Validation`]: the request could not be read (400)
//! - [`BizError::Internal`]: anything raised by the store (500)
//!
//! # Wire format
//!
//! ```json
//! { "error": { "message": "There is no company with code 'acme'", "status": 404 } }
//! ```

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt::Display;

/// Message sent to clients for every internal failure.
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// The main error type for biztime handlers
#[derive(Debug, thiserror::Error)]
pub enum BizError {
    /// An identifier did not match any row
    #[error("{message}")]
    NotFound { message: String },

    /// The request body or path could not be turned into a typed input
    #[error("{message}")]
    Validation { message: String },

    /// Store-level failure: constraint violation, connectivity, bad query
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Inner body of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code, repeated in the body
    pub status: u16,
}

/// Error response envelope: `{ "error": { message, status } }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl BizError {
    pub fn not_found(message: impl Into<String>) -> Self {
        BizError::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        BizError::Validation {
            message: message.into(),
        }
    }

    /// NotFound for a company code
    pub fn company_not_found(code: &str) -> Self {
        Self::not_found(format!("There is no company with code '{}'", code))
    }

    /// NotFound for an invoice id
    pub fn invoice_not_found(id: impl Display) -> Self {
        Self::not_found(format!("There is no invoice with id '{}'", id))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BizError::NotFound { .. } => StatusCode::NOT_FOUND,
            BizError::Validation { .. } => StatusCode::BAD_REQUEST,
            BizError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to an error response
    ///
    /// Internal errors never expose their cause to the client.
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            BizError::Internal(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        };

        ErrorResponse {
            error: ErrorBody {
                message,
                status: self.status_code().as_u16(),
            },
        }
    }
}

impl IntoResponse for BizError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            BizError::Internal(err) => tracing::error!(error = ?err, "request failed"),
            other => tracing::debug!(status = status.as_u16(), "{}", other),
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Conversions from extractor rejections
// =============================================================================

impl From<JsonRejection> for BizError {
    fn from(rejection: JsonRejection) -> Self {
        BizError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for BizError {
    fn from(rejection: PathRejection) -> Self {
        BizError::validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for BizError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, _)| format!("'{}' is required", field))
            .collect();
        fields.sort();
        BizError::validation(fields.join(", "))
    }
}

/// A specialized Result type for biztime handlers
pub type BizResult<T> = Result<T, BizError>;
