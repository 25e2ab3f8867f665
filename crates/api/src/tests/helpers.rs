// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use phoenix_reg_domain::EventCatalog;
use phoenix_reg_sheets::InMemorySheet;
use serde_json::{Value, json};
use std::sync::Arc;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{FixedWindowRateLimiter, RateLimitPolicy, SubmissionGateway};

pub struct TestGateway {
    pub gateway: SubmissionGateway,
    pub sheet: Arc<InMemorySheet>,
}

pub fn create_test_gateway() -> TestGateway {
    let sheet: Arc<InMemorySheet> = Arc::new(InMemorySheet::new());
    let gateway: SubmissionGateway = SubmissionGateway::new(
        Arc::new(EventCatalog::festival()),
        Arc::new(FixedWindowRateLimiter::new(RateLimitPolicy::default())),
        sheet.clone(),
    );
    TestGateway { gateway, sheet }
}

pub const fn create_test_time() -> OffsetDateTime {
    datetime!(2026-03-01 10:00 UTC)
}

/// Scenario A: a valid solo registration for Algorithm Arena.
pub fn create_solo_body() -> Value {
    json!({
        "name": "Ann",
        "email": "ann@x.com",
        "college": "DSCE",
        "phone": "9876543210",
        "teamSize": 1,
        "selectedEvents": ["algorithm-arena"],
        "teamMembers": []
    })
}

/// A valid three-person registration for Code-NO-Thon 2026.
pub fn create_team_body() -> Value {
    json!({
        "name": "Bob",
        "email": "Bob@X.com",
        "college": "RVCE",
        "phone": "+91 98765-43210",
        "teamSize": 3,
        "selectedEvents": ["code-a-thon-2026"],
        "teamMembers": [
            {"name": "Cy", "email": "cy@x.com"},
            {"name": "Di", "email": "di@x.com"}
        ]
    })
}

pub fn to_bytes(body: &Value) -> Vec<u8> {
    serde_json::to_vec(body).unwrap()
}
