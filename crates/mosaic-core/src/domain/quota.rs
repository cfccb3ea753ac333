//! Daily write quota view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Successful gallery creations allowed per UTC day.
pub const DAILY_LIMIT: u64 = 1000;

/// `used` at or above this raises the warning flag (98% of the limit).
pub const WARNING_THRESHOLD: u64 = DAILY_LIMIT * 98 / 100;

/// Expiry applied on every counter write. Slides with each write.
pub const QUOTA_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// `YYYY-MM-DD` bucket for a UTC instant.
pub fn day_bucket(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Snapshot of the day's quota usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaStatus {
    pub date: String,
    pub used: u64,
    pub limit: u64,
    pub remaining: u64,
    /// `used / limit * 100` with one decimal.
    pub percentage: String,
    pub warning: bool,
}

impl QuotaStatus {
    pub fn new(date: String, used: u64) -> Self {
        Self {
            date,
            used,
            limit: DAILY_LIMIT,
            remaining: DAILY_LIMIT.saturating_sub(used),
            percentage: format!("{:.1}", used as f64 / DAILY_LIMIT as f64 * 100.0),
            warning: used >= WARNING_THRESHOLD,
        }
    }
}
