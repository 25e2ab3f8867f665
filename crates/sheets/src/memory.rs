// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use phoenix_reg_domain::RegistrationRecord;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::error::AppendError;
use crate::row::{header_row, record_row};
use crate::service::AppendService;

#[derive(Debug, Default)]
struct SheetState {
    rows: Vec<Vec<String>>,
    header_writes: usize,
    append_calls: usize,
    fail_appends: bool,
}

/// An in-process sheet honoring the [`AppendService`] contract.
///
/// Every write is recorded so tests can assert on exactly what was stored,
/// including how many times the header was written.
#[derive(Debug, Default)]
pub struct InMemorySheet {
    state: Mutex<SheetState>,
}

impl InMemorySheet {
    /// Creates an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, SheetState> {
        // Writes are single pushes, so a poisoned lock still holds whole rows.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Makes subsequent appends fail (or succeed again).
    pub fn set_fail_appends(&self, fail: bool) {
        self.state().fail_appends = fail;
    }

    /// All rows, header included.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.state().rows.clone()
    }

    /// All rows after the header.
    #[must_use]
    pub fn data_rows(&self) -> Vec<Vec<String>> {
        self.state().rows.iter().skip(1).cloned().collect()
    }

    /// How many times the header row was written.
    #[must_use]
    pub fn header_writes(&self) -> usize {
        self.state().header_writes
    }

    /// How many append attempts were made, failed ones included.
    #[must_use]
    pub fn append_calls(&self) -> usize {
        self.state().append_calls
    }
}

#[async_trait]
impl AppendService for InMemorySheet {
    async fn ensure_header_row(&self) -> Result<(), AppendError> {
        let mut state = self.state();
        let has_header: bool = state
            .rows
            .first()
            .and_then(|row| row.first())
            .is_some_and(|cell| !cell.is_empty());

        if has_header {
            return Ok(());
        }

        debug!("Writing header row to in-memory sheet");
        if state.rows.is_empty() {
            state.rows.push(header_row());
        } else {
            state.rows[0] = header_row();
        }
        state.header_writes += 1;
        Ok(())
    }

    async fn append_row(&self, record: &RegistrationRecord) -> Result<(), AppendError> {
        let mut state = self.state();
        state.append_calls += 1;
        if state.fail_appends {
            return Err(AppendError::Unavailable(String::from(
                "in-memory sheet is configured to fail",
            )));
        }
        state.rows.push(record_row(record));
        Ok(())
    }
}
