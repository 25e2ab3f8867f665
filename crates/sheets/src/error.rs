// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised while writing to the spreadsheet.
///
/// These carry full detail for the server log. Callers must not forward
/// the text to end users.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppendError {
    /// The service-account key could not sign a token request.
    #[error("Failed to sign service account assertion: {message}")]
    Signing { message: String },

    /// The token endpoint refused the service-account assertion.
    #[error("Spreadsheet authentication failed: {message}")]
    Auth { message: String },

    /// The spreadsheet API answered with a non-success status.
    #[error("Spreadsheet API returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never completed.
    #[error("Spreadsheet request failed: {0}")]
    Transport(String),

    /// A response body did not have the expected shape.
    #[error("Unexpected spreadsheet response: {0}")]
    Decode(String),

    /// The backing store is unavailable.
    #[error("Spreadsheet unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for AppendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
