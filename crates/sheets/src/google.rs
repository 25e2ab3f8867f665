// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Google Sheets v4 implementation of [`AppendService`].
//!
//! Authentication uses a service account: a short-lived RS256 assertion is
//! exchanged at the OAuth token endpoint for a bearer token, which is cached
//! until shortly before it expires.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use phoenix_reg_domain::RegistrationRecord;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::AppendError;
use crate::row::{header_row, record_row};
use crate::service::AppendService;

const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for each signed assertion.
const ASSERTION_TTL_SECS: i64 = 3600;

/// Tokens are refreshed this many seconds before they expire.
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// Default limit on a whole token or Sheets request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default limit on establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Service-account identity used to sign token requests.
#[derive(Debug, Clone)]
pub struct ServiceAccountCredentials {
    client_email: String,
    private_key: SecretString,
}

impl ServiceAccountCredentials {
    /// Creates credentials from a service-account email and PEM private key.
    ///
    /// Literal `\n` sequences in the key, as found in escaped environment
    /// values, become newlines.
    #[must_use]
    pub fn new(client_email: &str, private_key: &str) -> Self {
        Self {
            client_email: client_email.trim().to_string(),
            private_key: SecretString::from(private_key.replace("\\n", "\n")),
        }
    }

    /// Returns the service-account email.
    #[must_use]
    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// Returns the unescaped PEM private key.
    #[must_use]
    pub const fn private_key(&self) -> &SecretString {
        &self.private_key
    }
}

/// Where and how to write registration rows.
#[derive(Debug, Clone)]
pub struct GoogleSheetsConfig {
    /// The spreadsheet identifier from its URL.
    pub spreadsheet_id: String,
    /// The tab that receives rows.
    pub sheet_name: String,
    /// The signing identity.
    pub credentials: ServiceAccountCredentials,
    /// OAuth token endpoint.
    pub token_uri: String,
    /// Sheets API base URL.
    pub api_base: String,
    /// Limit on each request, from connect to the end of the body.
    pub request_timeout: Duration,
    /// Limit on establishing each connection.
    pub connect_timeout: Duration,
}

impl GoogleSheetsConfig {
    /// Creates a configuration pointing at the public Google endpoints.
    #[must_use]
    pub fn new(spreadsheet_id: &str, sheet_name: &str, credentials: ServiceAccountCredentials) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.trim().to_string(),
            sheet_name: sheet_name.to_string(),
            credentials,
            token_uri: String::from(DEFAULT_TOKEN_URI),
            api_base: String::from(DEFAULT_API_BASE),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// The A1 range covering the header row.
    #[must_use]
    pub fn header_range(&self) -> String {
        format!("{}!A1:Q1", self.sheet_name)
    }

    /// The A1 range rows are appended to.
    #[must_use]
    pub fn append_range(&self) -> String {
        format!("{}!A:Q", self.sheet_name)
    }

    /// The `values` endpoint for `range` in this spreadsheet.
    ///
    /// # Errors
    ///
    /// Returns `AppendError::Transport` if `api_base` is not a usable base URL.
    pub fn values_url(&self, range: &str) -> Result<Url, AppendError> {
        let mut url: Url = Url::parse(&self.api_base)
            .map_err(|e| AppendError::Transport(format!("invalid API base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| AppendError::Transport(String::from("API base URL cannot be a base")))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", &self.spreadsheet_id, "values", range]);
        Ok(url)
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRangeBody<'a> {
    range: &'a str,
    major_dimension: &'a str,
    values: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct AppendBody {
    values: Vec<Vec<String>>,
}

struct CachedToken {
    access_token: SecretString,
    expires_at: i64,
}

/// Appends registration rows to a Google Sheets tab.
pub struct GoogleSheetsAppendService {
    http: Client,
    config: GoogleSheetsConfig,
    signing_key: EncodingKey,
    token: Mutex<Option<CachedToken>>,
}

impl GoogleSheetsAppendService {
    /// Creates the service, parsing the private key up front.
    ///
    /// Every token and Sheets request is bounded by the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The private key is not a valid RSA PEM (`Signing`)
    /// - The HTTP client cannot be built (`Transport`)
    pub fn new(config: GoogleSheetsConfig) -> Result<Self, AppendError> {
        let signing_key: EncodingKey =
            EncodingKey::from_rsa_pem(config.credentials.private_key().expose_secret().as_bytes())
                .map_err(|e| AppendError::Signing {
                    message: e.to_string(),
                })?;

        let http: Client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppendError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            signing_key,
            token: Mutex::new(None),
        })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GoogleSheetsConfig {
        &self.config
    }

    fn sign_assertion(&self, now: i64) -> Result<String, AppendError> {
        let claims: AssertionClaims<'_> = AssertionClaims {
            iss: &self.config.credentials.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.config.token_uri,
            iat: now,
            exp: now + ASSERTION_TTL_SECS,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.signing_key).map_err(
            |e| AppendError::Signing {
                message: e.to_string(),
            },
        )
    }

    /// Returns a valid bearer token, minting a new one when needed.
    async fn access_token(&self) -> Result<SecretString, AppendError> {
        let now: i64 = time::OffsetDateTime::now_utc().unix_timestamp();
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref()
            && token.expires_at - TOKEN_REFRESH_MARGIN_SECS > now
        {
            return Ok(token.access_token.clone());
        }

        debug!(
            client_email = %self.config.credentials.client_email,
            "Requesting spreadsheet access token"
        );

        let assertion: String = self.sign_assertion(now)?;
        let response = self
            .http
            .post(&self.config.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message: String = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unable to read token response body"));
            return Err(AppendError::Auth {
                message: format!("HTTP {}: {message}", status.as_u16()),
            });
        }

        let payload: TokenResponse = response.json().await?;
        let access_token: SecretString = SecretString::from(payload.access_token);
        *cached = Some(CachedToken {
            access_token: access_token.clone(),
            expires_at: now + payload.expires_in,
        });

        Ok(access_token)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message: String = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("unable to read response body"));
        Err(AppendError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AppendService for GoogleSheetsAppendService {
    async fn ensure_header_row(&self) -> Result<(), AppendError> {
        let token: SecretString = self.access_token().await?;
        let range: String = self.config.header_range();
        let url: Url = self.config.values_url(&range)?;

        let response = self
            .http
            .get(url.clone())
            .bearer_auth(token.expose_secret())
            .send()
            .await?;
        let existing: ValueRange = Self::check_status(response).await?.json().await?;

        let has_header: bool = existing
            .values
            .first()
            .and_then(|row| row.first())
            .is_some_and(|cell| match cell {
                serde_json::Value::Null => false,
                serde_json::Value::String(s) => !s.is_empty(),
                _ => true,
            });

        if has_header {
            debug!(range = %range, "Header row already present");
            return Ok(());
        }

        info!(range = %range, "Writing header row");
        let body: ValueRangeBody<'_> = ValueRangeBody {
            range: &range,
            major_dimension: "ROWS",
            values: vec![header_row()],
        };
        let response = self
            .http
            .put(url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(token.expose_secret())
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn append_row(&self, record: &RegistrationRecord) -> Result<(), AppendError> {
        let token: SecretString = self.access_token().await?;
        let url: Url = self.config.values_url(&format!("{}:append", self.config.append_range()))?;

        let body: AppendBody = AppendBody {
            values: vec![record_row(record)],
        };
        let response = self
            .http
            .post(url)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(token.expose_secret())
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
