// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use async_trait::async_trait;
use phoenix_reg_api::{RegistrationSubmission, SubmissionAccepted};
use phoenix_reg_domain::{EventCatalog, FormField};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::{FormController, SubmissionTransport, TransportError};

/// A transport that replays canned outcomes and records what it was sent.
#[derive(Default)]
pub struct FakeTransport {
    outcomes: Mutex<VecDeque<Result<SubmissionAccepted, TransportError>>>,
    sent: Mutex<Vec<RegistrationSubmission>>,
}

impl FakeTransport {
    pub fn with_outcomes(outcomes: Vec<Result<SubmissionAccepted, TransportError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<RegistrationSubmission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionTransport for FakeTransport {
    async fn submit(
        &self,
        submission: &RegistrationSubmission,
    ) -> Result<SubmissionAccepted, TransportError> {
        self.sent.lock().unwrap().push(submission.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SubmissionAccepted::default()))
    }
}

pub fn create_test_controller() -> FormController {
    FormController::new(Arc::new(EventCatalog::festival()))
}

/// Fills in a valid leader.
pub fn fill_leader(controller: &mut FormController) {
    assert!(controller.set_field(FormField::Name, "Ann"));
    assert!(controller.set_field(FormField::Email, "ann@x.com"));
    assert!(controller.set_field(FormField::College, "DSCE"));
    assert!(controller.set_field(FormField::Phone, "9876543210"));
}
