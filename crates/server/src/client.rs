// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client identification for rate limiting.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use std::convert::Infallible;
use tracing::debug;

/// The bucket shared by every request without a usable forwarded address.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Longest forwarded address accepted as a key.
const MAX_CLIENT_KEY_LEN: usize = 64;

/// Extractor for the caller's rate-limit key.
///
/// The key is the first entry of `X-Forwarded-For`, trimmed. Missing,
/// empty, oversized, or oddly shaped values fall back to [`UNKNOWN_CLIENT`].
/// Extraction never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientKey(pub String);

/// Reads the first forwarded address from `headers`, if it is usable.
#[must_use]
pub fn forwarded_client(headers: &HeaderMap) -> Option<String> {
    let raw: &str = headers.get("x-forwarded-for")?.to_str().ok()?;
    let first: &str = raw.split(',').next()?.trim();
    if first.is_empty() || first.len() > MAX_CLIENT_KEY_LEN {
        return None;
    }
    first
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b':' | b'-' | b'[' | b']'))
        .then(|| first.to_string())
}

impl<S: Send + Sync> FromRequestParts<S> for ClientKey {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let key: String = forwarded_client(&parts.headers).unwrap_or_else(|| {
            debug!("No usable X-Forwarded-For; using shared bucket");
            String::from(UNKNOWN_CLIENT)
        });
        Ok(Self(key))
    }
}
