//! KvStore port - TTL 付きキーバリューストア（外部のブラックボックス）
//!
//! ギャラリーとクォータカウンタの正本（source of truth）。
//!
//! # 前提
//! - 結果整合（eventual consistency）
//! - 書き込み回数に上限がある
//! - 失敗は "not found"（`Ok(None)`）と区別できる `StoreError` で返す

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Platform-level write quota rejected the operation.
    #[error("store quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("store operation failed: {0}")]
    Backend(String),

    #[error("stored value could not be decoded: {0}")]
    Decode(String),
}

impl StoreError {
    /// True for quota rejections, including backends that only report them
    /// through the error message.
    pub fn is_quota(&self) -> bool {
        match self {
            StoreError::QuotaExceeded(_) => true,
            StoreError::Backend(msg) => {
                let msg = msg.to_ascii_lowercase();
                msg.contains("quota") || msg.contains("limit exceeded")
            }
            StoreError::Decode(_) => false,
        }
    }
}

/// Options for `KvStore::put`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PutOptions {
    /// Time until the key stops being retrievable. `None` keeps it forever.
    pub expiration_ttl: Option<Duration>,
}

impl PutOptions {
    pub fn expiring_in(ttl: Duration) -> Self {
        Self {
            expiration_ttl: Some(ttl),
        }
    }
}

/// Options for `KvStore::list`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub prefix: Option<String>,
    pub limit: Option<usize>,
}

impl ListOptions {
    pub fn prefixed(prefix: impl Into<String>, limit: usize) -> Self {
        Self {
            prefix: Some(prefix.into()),
            limit: Some(limit),
        }
    }
}

/// KvStore は文字列キーから文字列値へのマップ
///
/// # 設計原則
/// - TTL はストア側の機能（アプリは期限切れを観測せず、単に見つからなくなる）
/// - compare-and-swap は無い（check-then-write は非トランザクション）
/// - `list` は期限切れキーを返さない
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn put(&self, key: &str, value: String, options: PutOptions) -> Result<(), StoreError>;

    /// Keys in lexicographic order, at most `options.limit`.
    async fn list(&self, options: ListOptions) -> Result<Vec<String>, StoreError>;
}

/// Reads a key and decodes it as JSON.
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Decode(format!("{key}: {e}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_detection_by_variant_and_message() {
        assert!(StoreError::QuotaExceeded("x".into()).is_quota());
        assert!(StoreError::Backend("Daily QUOTA reached".into()).is_quota());
        assert!(!StoreError::Backend("timeout".into()).is_quota());
        assert!(!StoreError::Decode("quota".into()).is_quota());
    }
}
