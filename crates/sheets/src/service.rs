// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use phoenix_reg_domain::RegistrationRecord;

use crate::error::AppendError;

/// Row-oriented persistence for registration records.
///
/// Appends are at-least-once: a caller retrying after an error may produce a
/// duplicate row, and no deduplication happens here. Implementations must
/// write each row atomically and never merge or reorder rows.
#[async_trait]
pub trait AppendService: Send + Sync {
    /// Writes the fixed header row if, and only if, the sheet has none.
    ///
    /// Calling this on an already-headered sheet performs no write.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be read or written.
    async fn ensure_header_row(&self) -> Result<(), AppendError>;

    /// Appends exactly one row for `record`.
    ///
    /// # Errors
    ///
    /// Returns an error if the row was not confirmed as written.
    async fn append_row(&self, record: &RegistrationRecord) -> Result<(), AppendError>;

    /// Ensures the header row, then appends `record`.
    ///
    /// # Errors
    ///
    /// Returns the first error from either step. No row is appended if the
    /// header check fails.
    async fn append_registration(&self, record: &RegistrationRecord) -> Result<(), AppendError> {
        self.ensure_header_row().await?;
        self.append_row(record).await
    }
}
