//! Store wrapper that injects failures, for tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::InMemoryKvStore;
use crate::ports::{KvStore, ListOptions, PutOptions, StoreError};

/// How a failing `put` reports itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutFailure {
    Quota,
    Backend,
}

/// Delegates to an `InMemoryKvStore` unless told to fail.
pub struct FaultyKvStore {
    inner: InMemoryKvStore,
    /// Puts to keys with one of these prefixes fail.
    failing_put_prefixes: Mutex<Vec<(String, PutFailure)>>,
    /// Gets of these exact keys fail.
    failing_gets: Mutex<HashSet<String>>,
    fail_list: Mutex<bool>,
    puts: AtomicUsize,
}

impl FaultyKvStore {
    pub fn new(inner: InMemoryKvStore) -> Self {
        Self {
            inner,
            failing_put_prefixes: Mutex::new(Vec::new()),
            failing_gets: Mutex::new(HashSet::new()),
            fail_list: Mutex::new(false),
            puts: AtomicUsize::new(0),
        }
    }

    pub fn fail_puts_under(&self, prefix: &str, failure: PutFailure) {
        self.failing_put_prefixes
            .lock()
            .unwrap()
            .push((prefix.to_string(), failure));
    }

    pub fn fail_get(&self, key: &str) {
        self.failing_gets.lock().unwrap().insert(key.to_string());
    }

    pub fn fail_list(&self) {
        *self.fail_list.lock().unwrap() = true;
    }

    /// Number of successful puts.
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KvStore for FaultyKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.failing_gets.lock().unwrap().contains(key) {
            return Err(StoreError::Backend(format!("injected get failure for {key}")));
        }
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: String, options: PutOptions) -> Result<(), StoreError> {
        let failure = self
            .failing_put_prefixes
            .lock()
            .unwrap()
            .iter()
            .find(|(prefix, _)| key.starts_with(prefix.as_str()))
            .map(|(_, failure)| *failure);
        match failure {
            Some(PutFailure::Quota) => Err(StoreError::QuotaExceeded(format!("writes for {key}"))),
            Some(PutFailure::Backend) => Err(StoreError::Backend(format!(
                "injected put failure for {key}"
            ))),
            None => {
                self.inner.put(key, value, options).await?;
                self.puts.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        }
    }

    async fn list(&self, options: ListOptions) -> Result<Vec<String>, StoreError> {
        if *self.fail_list.lock().unwrap() {
            return Err(StoreError::Backend("injected list failure".into()));
        }
        self.inner.list(options).await
    }
}
