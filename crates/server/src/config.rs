// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Startup configuration.
//!
//! Every problem found here is reported before the server binds, and is
//! never confused with a request-time validation error.

use clap::{Parser, ValueEnum};
use phoenix_reg_api::{FixedWindowRateLimiter, RateLimitPolicy, SubmissionGateway};
use phoenix_reg_domain::{DomainError, Event, EventCatalog};
use phoenix_reg_sheets::{
    AppendError, AppendService, GoogleSheetsAppendService, GoogleSheetsConfig, InMemorySheet,
    ServiceAccountCredentials,
};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Phoenix Registration Server - HTTP server for festival registrations
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the server to
    #[arg(long, env = "PHOENIX_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// JSON file of events. If not provided, uses the built-in festival lineup.
    #[arg(long, env = "PHOENIX_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Where registrations are written
    #[arg(long, env = "PHOENIX_SHEET_BACKEND", value_enum, default_value_t = SheetBackend::Google)]
    pub sheet_backend: SheetBackend,

    /// Target spreadsheet identifier
    #[arg(long, env = "GOOGLE_SPREADSHEET_ID")]
    pub spreadsheet_id: Option<String>,

    /// Service account email
    #[arg(long, env = "GOOGLE_SERVICE_ACCOUNT_EMAIL")]
    pub service_account_email: Option<String>,

    /// Service account PEM private key; literal `\n` sequences are accepted
    #[arg(long, env = "GOOGLE_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Sheet tab that receives rows
    #[arg(long, env = "PHOENIX_SHEET_NAME", default_value = "Registrations")]
    pub sheet_name: String,

    /// Rate-limit window length in seconds
    #[arg(long, env = "PHOENIX_RATE_LIMIT_WINDOW_SECS", default_value_t = 60)]
    pub rate_limit_window_secs: u64,

    /// Submissions allowed per client within one window
    #[arg(long, env = "PHOENIX_RATE_LIMIT_MAX_REQUESTS", default_value_t = 5)]
    pub rate_limit_max_requests: u32,
}

/// Storage backends for registration rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SheetBackend {
    /// A Google Sheets tab, authenticated with a service account.
    Google,
    /// Process memory; rows are lost on exit.
    Memory,
}

/// Errors raised while turning [`Args`] into a running gateway.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting the chosen backend needs was not provided.
    #[error("Missing configuration: --{flag} (or {env}) is required")]
    MissingSetting {
        flag: &'static str,
        env: &'static str,
    },

    /// A rate-limit setting is zero.
    #[error("Invalid rate limit: {0}")]
    InvalidRateLimit(&'static str),

    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The catalog file is not a JSON list of events.
    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// The catalog's events violate the catalog rules.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] DomainError),

    /// The spreadsheet client could not be created.
    #[error("Invalid spreadsheet configuration: {0}")]
    Sheets(#[from] AppendError),
}

/// Parses a catalog from a JSON array of events.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the events violate the
/// catalog rules.
pub fn parse_catalog(json: &str) -> Result<EventCatalog, ConfigError> {
    let events: Vec<Event> = serde_json::from_str(json)?;
    Ok(EventCatalog::new(events)?)
}

/// Loads the catalog from `path`, or the built-in lineup when `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: Option<&Path>) -> Result<EventCatalog, ConfigError> {
    let Some(path) = path else {
        info!("Using built-in festival catalog");
        return Ok(EventCatalog::festival());
    };

    info!(path = %path.display(), "Loading event catalog");
    let json: String =
        std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
    parse_catalog(&json)
}

fn required(
    value: Option<&str>,
    flag: &'static str,
    env: &'static str,
) -> Result<String, ConfigError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::MissingSetting { flag, env })
}

/// Builds the append service selected by `args`.
///
/// # Errors
///
/// Returns an error if the Google backend is selected and its spreadsheet
/// id or credentials are missing or unusable.
pub fn build_append_service(args: &Args) -> Result<Arc<dyn AppendService>, ConfigError> {
    match args.sheet_backend {
        SheetBackend::Memory => {
            warn!("Using in-memory sheet; registrations will not survive a restart");
            Ok(Arc::new(InMemorySheet::new()))
        }
        SheetBackend::Google => {
            let spreadsheet_id: String = required(
                args.spreadsheet_id.as_deref(),
                "spreadsheet-id",
                "GOOGLE_SPREADSHEET_ID",
            )?;
            let client_email: String = required(
                args.service_account_email.as_deref(),
                "service-account-email",
                "GOOGLE_SERVICE_ACCOUNT_EMAIL",
            )?;
            let private_key: String = required(
                args.private_key.as_deref(),
                "private-key",
                "GOOGLE_PRIVATE_KEY",
            )?;

            let config: GoogleSheetsConfig = GoogleSheetsConfig::new(
                &spreadsheet_id,
                &args.sheet_name,
                ServiceAccountCredentials::new(&client_email, &private_key),
            );
            info!(sheet = %args.sheet_name, "Using Google Sheets backend");
            Ok(Arc::new(GoogleSheetsAppendService::new(config)?))
        }
    }
}

/// Longest accepted rate-limit window, one day.
pub const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 86_400;

/// Builds the rate-limit policy from `args`.
///
/// # Errors
///
/// Returns an error if the window or the allowance is zero, or if the window
/// is longer than [`MAX_RATE_LIMIT_WINDOW_SECS`].
pub fn rate_limit_policy(args: &Args) -> Result<RateLimitPolicy, ConfigError> {
    if args.rate_limit_window_secs == 0 {
        return Err(ConfigError::InvalidRateLimit("window must be at least one second"));
    }
    if args.rate_limit_window_secs > MAX_RATE_LIMIT_WINDOW_SECS {
        return Err(ConfigError::InvalidRateLimit("window must be at most one day"));
    }
    if args.rate_limit_max_requests == 0 {
        return Err(ConfigError::InvalidRateLimit(
            "at least one request per window must be allowed",
        ));
    }
    Ok(RateLimitPolicy {
        window: Duration::from_secs(args.rate_limit_window_secs),
        max_requests: args.rate_limit_max_requests,
    })
}

/// Builds the submission gateway described by `args`.
///
/// # Errors
///
/// Returns the first configuration problem found.
pub fn build_gateway(args: &Args) -> Result<SubmissionGateway, ConfigError> {
    let catalog: EventCatalog = load_catalog(args.catalog.as_deref())?;
    let policy: RateLimitPolicy = rate_limit_policy(args)?;
    let append: Arc<dyn AppendService> = build_append_service(args)?;

    info!(
        events = catalog.len(),
        window_secs = policy.window.as_secs(),
        max_requests = policy.max_requests,
        "Submission gateway configured"
    );

    Ok(SubmissionGateway::new(
        Arc::new(catalog),
        Arc::new(FixedWindowRateLimiter::new(policy)),
        append,
    ))
}
