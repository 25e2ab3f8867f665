// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-client submission rate limiting.
//!
//! The gateway only depends on the [`RateLimiter`] capability. The default
//! [`FixedWindowRateLimiter`] keeps its counters in process memory: they are
//! lost on restart and are not shared between instances.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

/// Default window length.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Default number of requests allowed per window.
pub const DEFAULT_MAX_REQUESTS: u32 = 5;

/// Expired keys are swept once every this many requests.
pub const CLEANUP_INTERVAL: u64 = 100;

/// The outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    /// The request may proceed.
    Allowed,
    /// The request exceeds the allowance for the current window.
    Denied,
}

impl RateDecision {
    /// Returns whether the request may proceed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Counts requests per client key and decides whether each may proceed.
///
/// Implementations must increment and compare atomically per key so that
/// concurrent requests never lose an update.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Records one request for `key` and returns whether it is allowed.
    async fn check_and_increment(&self, key: &str) -> RateDecision;
}

/// Window length and allowance for [`FixedWindowRateLimiter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// How long a window lasts from its first request.
    pub window: Duration,
    /// Requests allowed within one window.
    pub max_requests: u32,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            max_requests: DEFAULT_MAX_REQUESTS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct WindowEntry {
    count: u32,
    /// `None` when `now + window` is past what `Instant` can represent.
    reset_at: Option<Instant>,
}

impl WindowEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.reset_at.is_some_and(|reset_at| now > reset_at)
    }
}

#[derive(Debug, Default)]
struct WindowTable {
    entries: HashMap<String, WindowEntry>,
    requests_seen: u64,
}

impl WindowTable {
    fn sweep(&mut self, now: Instant) -> usize {
        let before: usize = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before - self.entries.len()
    }
}

/// In-memory fixed-window limiter.
///
/// A key's window opens on its first request and lasts `policy.window`. The
/// count resets to 1 on the first request after the window has expired.
/// Keys whose window has expired are dropped every [`CLEANUP_INTERVAL`]
/// requests, so the table only holds clients seen within the last window.
#[derive(Debug, Default)]
pub struct FixedWindowRateLimiter {
    policy: RateLimitPolicy,
    table: Mutex<WindowTable>,
}

impl FixedWindowRateLimiter {
    /// Creates a limiter with the given policy.
    #[must_use]
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self {
            policy,
            table: Mutex::new(WindowTable::default()),
        }
    }

    /// Returns the active policy.
    #[must_use]
    pub const fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    /// Records one request for `key` as if it arrived at `now`.
    ///
    /// # Arguments
    ///
    /// * `key` - The client key
    /// * `now` - The arrival instant
    pub async fn check_and_increment_at(&self, key: &str, now: Instant) -> RateDecision {
        let mut table = self.table.lock().await;

        table.requests_seen = table.requests_seen.wrapping_add(1);
        if table.requests_seen.is_multiple_of(CLEANUP_INTERVAL) {
            let removed: usize = table.sweep(now);
            debug!(
                removed,
                remaining = table.entries.len(),
                "Swept expired rate-limit windows"
            );
        }

        let window_end: Option<Instant> = now.checked_add(self.policy.window);
        let entry: &mut WindowEntry = table
            .entries
            .entry(key.to_string())
            .or_insert(WindowEntry {
                count: 0,
                reset_at: window_end,
            });

        if entry.is_expired(now) {
            entry.count = 1;
            entry.reset_at = window_end;
        } else {
            entry.count = entry.count.saturating_add(1);
        }

        if entry.count > self.policy.max_requests {
            RateDecision::Denied
        } else {
            RateDecision::Allowed
        }
    }

    /// Drops every key whose window expired before `now` and returns how
    /// many were removed.
    pub async fn cleanup_at(&self, now: Instant) -> usize {
        self.table.lock().await.sweep(now)
    }

    /// Number of keys currently tracked.
    pub async fn tracked_keys(&self) -> usize {
        self.table.lock().await.entries.len()
    }
}

#[async_trait]
impl RateLimiter for FixedWindowRateLimiter {
    async fn check_and_increment(&self, key: &str) -> RateDecision {
        self.check_and_increment_at(key, Instant::now()).await
    }
}
