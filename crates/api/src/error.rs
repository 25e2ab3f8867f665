// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the submission gateway.

use phoenix_reg_domain::{DomainError, FormField};
use phoenix_reg_sheets::AppendError;

/// Message returned when a client exceeds its submission window.
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please wait a minute and try again.";

/// Message returned when the body cannot be decoded at all.
pub const MALFORMED_REQUEST_MESSAGE: &str = "Invalid request body.";

/// Message returned when the spreadsheet write fails.
pub const PERSISTENCE_FAILURE_MESSAGE: &str =
    "Registration could not be saved. Please try again or contact the organizers.";

/// API-level errors.
///
/// Each variant maps to exactly one response class. [`Self::user_message`] is
/// the text a caller may see; `Display` carries the full detail for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A registration rule was violated.
    InvalidInput {
        /// The form field the failure belongs to, if any.
        field: Option<FormField>,
        /// A human-readable description of the failure.
        message: String,
    },
    /// The caller exceeded its submission allowance for the current window.
    RateLimited {
        /// The rate-limit key that was denied.
        client_key: String,
    },
    /// The request body could not be decoded.
    MalformedRequest {
        /// The decoder's description of the problem.
        reason: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The spreadsheet write failed.
    Persistence {
        /// The underlying failure.
        cause: String,
    },
}

impl ApiError {
    /// The message safe to return to the caller.
    ///
    /// Persistence and decode failures are reduced to fixed generic messages.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { message, .. } | Self::ResourceNotFound { message, .. } => {
                message.clone()
            }
            Self::RateLimited { .. } => String::from(RATE_LIMITED_MESSAGE),
            Self::MalformedRequest { .. } => String::from(MALFORMED_REQUEST_MESSAGE),
            Self::Persistence { .. } => String::from(PERSISTENCE_FAILURE_MESSAGE),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput {
                field: Some(field),
                message,
            } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::InvalidInput {
                field: None,
                message,
            } => {
                write!(f, "Invalid input: {message}")
            }
            Self::RateLimited { client_key } => {
                write!(f, "Rate limit exceeded for client '{client_key}'")
            }
            Self::MalformedRequest { reason } => {
                write!(f, "Malformed request: {reason}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Persistence { cause } => {
                write!(f, "Persistence failure: {cause}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput {
            field: err.field(),
            message: err.to_string(),
        }
    }
}

impl From<AppendError> for ApiError {
    fn from(err: AppendError) -> Self {
        Self::Persistence {
            cause: err.to_string(),
        }
    }
}
