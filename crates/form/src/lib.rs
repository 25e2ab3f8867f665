// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration form state.
//!
//! [`FormController`] is the single owner of a registrant's draft. It reacts
//! to discrete input events (field edits, event toggles, team-size changes,
//! submit) and never performs I/O itself; submission goes through a
//! [`SubmissionTransport`].

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

mod controller;
mod transport;

#[cfg(test)]
mod tests;

pub use controller::{FormController, SubmissionStatus};
pub use transport::{
    HttpSubmissionTransport, NETWORK_ERROR_MESSAGE, SubmissionTransport, TransportError,
    UNEXPECTED_RESPONSE_MESSAGE,
};
