// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use phoenix_reg_api::{ErrorResponse, RegistrationSubmission, SubmissionAccepted};
use thiserror::Error;
use tracing::debug;

/// Shown when the request never reached the server.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Could not reach the registration server. Please check your connection and try again.";

/// Shown when the server answered with something other than the expected body.
pub const UNEXPECTED_RESPONSE_MESSAGE: &str =
    "Unexpected response from the registration server. Please try again.";

/// Errors from sending a submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The server refused the submission and said why.
    #[error("Submission rejected with HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The request did not complete.
    #[error("Submission request failed: {0}")]
    Network(String),

    /// The server's answer could not be understood.
    #[error("Unexpected submission response: {0}")]
    UnexpectedResponse(String),
}

impl TransportError {
    /// The message to show the registrant.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Network(_) => String::from(NETWORK_ERROR_MESSAGE),
            Self::UnexpectedResponse(_) => String::from(UNEXPECTED_RESPONSE_MESSAGE),
        }
    }
}

/// Delivers a submission to the gateway.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Sends `submission` and waits for the gateway's answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway rejected the submission or could not
    /// be reached.
    async fn submit(
        &self,
        submission: &RegistrationSubmission,
    ) -> Result<SubmissionAccepted, TransportError>;
}

/// Posts submissions as JSON to `{base_url}/register-submission`.
#[derive(Debug, Clone)]
pub struct HttpSubmissionTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionTransport {
    /// Creates a transport for the server at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a transport that reuses an existing HTTP client.
    #[must_use]
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}/register-submission", base_url.trim_end_matches('/')),
        }
    }

    /// Returns the URL submissions are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for HttpSubmissionTransport {
    async fn submit(
        &self,
        submission: &RegistrationSubmission,
    ) -> Result<SubmissionAccepted, TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Submission response received");

        if status.is_success() {
            return response
                .json::<SubmissionAccepted>()
                .await
                .map_err(|e| TransportError::UnexpectedResponse(e.to_string()));
        }

        let message: String = response
            .json::<ErrorResponse>()
            .await
            .map_or_else(|_| String::from(UNEXPECTED_RESPONSE_MESSAGE), |body| body.error);
        Err(TransportError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
