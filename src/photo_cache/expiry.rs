//! Expiry extraction from signed URLs.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Reads the point in time after which a resource URL stops working
pub trait ExpiryExtractor: Send + Sync {
    fn extract_expiry(&self, url: &str) -> Option<DateTime<Utc>>;
}

/// `Expires=<unix seconds>` as a query parameter of its own. The `[?&]` prefix
/// keeps `X-Amz-Expires=<duration>` from matching.
static EXPIRES_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]Expires=(\d+)").expect("valid expires pattern"));

/// Expiry from the `Expires` query parameter used by presigned storage URLs
#[derive(Debug, Clone, Copy, Default)]
pub struct SignedUrlExpiry;

impl ExpiryExtractor for SignedUrlExpiry {
    fn extract_expiry(&self, url: &str) -> Option<DateTime<Utc>> {
        let captures = EXPIRES_PARAM.captures(url)?;
        let secs: i64 = captures.get(1)?.as_str().parse().ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}
