//! InMemoryKvStore - 開発用の TTL 付きキーバリューストア
//!
//! # 学習ポイント
//! - DashMap による並行アクセス
//! - Clock 経由の期限判定（FixedClock でテストから時間を進められる）
//! - 遅延削除（読み取り時）+ 明示的な sweep

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;

use crate::ports::{Clock, KvStore, ListOptions, PutOptions, StoreError, SystemClock};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Entry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }
}

/// InMemoryKvStore はプロセス内だけで完結するストア
///
/// # 実装詳細
/// - DashMap<String, Entry> で保持
/// - 期限切れは get/list 時に削除、`purge_expired` で一括削除
/// - プロセス終了でデータは消える
#[derive(Clone)]
pub struct InMemoryKvStore {
    data: Arc<DashMap<String, Entry>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryKvStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            data: Arc::new(DashMap::new()),
            clock,
        }
    }

    /// Number of entries held, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes every expired entry. Returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.data.len();
        self.data.retain(|_, entry| !entry.is_expired(now));
        before - self.data.len()
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let now = self.clock.now();
        let Some(entry) = self.data.get(key) else {
            return Ok(None);
        };
        if entry.is_expired(now) {
            drop(entry);
            self.data.remove_if(key, |_, e| e.is_expired(now));
            return Ok(None);
        }
        Ok(Some(entry.value.clone()))
    }

    async fn put(&self, key: &str, value: String, options: PutOptions) -> Result<(), StoreError> {
        let expires_at = match options.expiration_ttl {
            Some(ttl) => {
                let ttl = chrono::Duration::from_std(ttl)
                    .map_err(|e| StoreError::Backend(format!("invalid ttl for {key}: {e}")))?;
                Some(self.clock.now() + ttl)
            }
            None => None,
        };
        self.data
            .insert(key.to_string(), Entry { value, expires_at });
        Ok(())
    }

    async fn list(&self, options: ListOptions) -> Result<Vec<String>, StoreError> {
        let now = self.clock.now();
        let mut keys = Vec::new();
        let mut expired = Vec::new();

        for entry in self.data.iter() {
            let key = entry.key();
            if let Some(prefix) = options.prefix.as_deref()
                && !key.starts_with(prefix)
            {
                continue;
            }
            if entry.value().is_expired(now) {
                expired.push(key.clone());
            } else {
                keys.push(key.clone());
            }
        }

        for key in expired {
            self.data.remove_if(&key, |_, e| e.is_expired(now));
        }

        keys.sort();
        if let Some(limit) = options.limit {
            keys.truncate(limit);
        }
        Ok(keys)
    }
}
