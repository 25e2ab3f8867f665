// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The append-only spreadsheet boundary for registrations.
//!
//! The submission gateway only ever needs two capabilities from storage:
//! make sure the header row exists, and append one row per registration.
//! [`AppendService`] names that contract. Two implementations live here:
//!
//! - [`GoogleSheetsAppendService`] writes to a Google Sheets tab using a
//!   service account.
//! - [`InMemorySheet`] keeps rows in process memory for local development
//!   and tests, and can be told to fail.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod google;
mod memory;
mod row;
mod service;

#[cfg(test)]
mod tests;

pub use error::AppendError;
pub use google::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, GoogleSheetsAppendService, GoogleSheetsConfig,
    ServiceAccountCredentials,
};
pub use memory::InMemorySheet;
pub use row::{COLUMN_COUNT, HEADER_ROW, header_row, record_row};
pub use service::AppendService;
