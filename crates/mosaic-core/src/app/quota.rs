//! QuotaTracker - 日次の書き込みカウンタ
//!
//! # 注意（既知の挙動）
//! - read-modify-write は非アトミック: 同時 increment は取りこぼしうる
//! - 書き込みのたびに 24h の期限を張り直す（UTC 0 時ではなくスライド）
//!
//! どちらも best-effort の近似として受け入れています。

use std::sync::Arc;

use crate::domain::QuotaStatus;
use crate::domain::quota::{QUOTA_TTL, WARNING_THRESHOLD, day_bucket};
use crate::ports::{Clock, KvStore, PutOptions, StoreError};

pub const QUOTA_KEY_PREFIX: &str = "quota:";

/// Per-UTC-day counter of successful gallery creations.
#[derive(Clone)]
pub struct QuotaTracker {
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
}

impl QuotaTracker {
    pub fn new(store: Arc<dyn KvStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    fn today(&self) -> String {
        day_bucket(self.clock.now())
    }

    fn key(date: &str) -> String {
        format!("{QUOTA_KEY_PREFIX}{date}")
    }

    async fn current(&self, key: &str) -> Result<u64, StoreError> {
        let raw = self.store.get(key).await?;
        Ok(raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0))
    }

    /// Adds one to today's counter and returns the new value.
    pub async fn increment(&self) -> Result<u64, StoreError> {
        let key = Self::key(&self.today());
        let used = self.current(&key).await? + 1;

        self.store
            .put(&key, used.to_string(), PutOptions::expiring_in(QUOTA_TTL))
            .await?;

        if used == WARNING_THRESHOLD {
            tracing::warn!(used, key = %key, "daily gallery quota reached warning threshold");
        }
        Ok(used)
    }

    pub async fn read(&self) -> Result<QuotaStatus, StoreError> {
        let date = self.today();
        let used = self.current(&Self::key(&date)).await?;
        Ok(QuotaStatus::new(date, used))
    }
}
