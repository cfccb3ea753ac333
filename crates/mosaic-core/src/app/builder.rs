//! AppBuilder - アプリケーションの構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - ports の差し替え（テストでは FixedClock + InMemoryKvStore）

use std::sync::Arc;

use super::auth::AdminGuard;
use super::gallery_store::{GalleryStore, MAX_LIST_LIMIT};
use super::quota::QuotaTracker;
use super::service::GalleryService;
use crate::config::MosaicConfig;
use crate::impls::InMemoryKvStore;
use crate::ports::{Base36IdGenerator, Clock, IdGenerator, KvStore, SystemClock};

/// AppBuilder は GalleryService を構築
///
/// # 使用例
/// ```ignore
/// let service = AppBuilder::new(MosaicConfig::load(None)?)
///     .store(Arc::new(MyEdgeKv::new()))
///     .build()?;
/// ```
///
/// # デフォルト
/// - store: SystemClock 上の InMemoryKvStore
/// - clock: SystemClock
/// - id_generator: Base36IdGenerator
pub struct AppBuilder {
    config: MosaicConfig,
    store: Option<Arc<dyn KvStore>>,
    clock: Option<Arc<dyn Clock>>,
    ids: Option<Arc<dyn IdGenerator>>,
}

/// BuildError はアプリケーション構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("default_list_limit must be between 1 and 100, got {0}")]
    InvalidListLimit(usize),

    #[error("base_url must be an absolute http(s) URL or empty, got {0:?}")]
    InvalidBaseUrl(String),
}

impl AppBuilder {
    pub fn new(config: MosaicConfig) -> Self {
        Self {
            config,
            store: None,
            clock: None,
            ids: None,
        }
    }

    pub fn store(mut self, store: Arc<dyn KvStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// # 検証
    /// - default_list_limit が 1..=100 に収まっているか
    /// - base_url が空、または http(s) の絶対 URL か（末尾の `/` は落とす）
    pub fn build(self) -> Result<GalleryService, BuildError> {
        let limit = self.config.default_list_limit;
        if !(1..=MAX_LIST_LIMIT).contains(&limit) {
            return Err(BuildError::InvalidListLimit(limit));
        }

        let base_url = self.config.base_url.trim().trim_end_matches('/').to_string();
        if !base_url.is_empty()
            && !(base_url.starts_with("https://") || base_url.starts_with("http://"))
        {
            return Err(BuildError::InvalidBaseUrl(self.config.base_url));
        }

        let clock: Arc<dyn Clock> = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryKvStore::new(clock.clone())));
        let ids = self
            .ids
            .unwrap_or_else(|| Arc::new(Base36IdGenerator::new(clock.clone())));

        let quota = QuotaTracker::new(store.clone(), clock.clone());
        let galleries = GalleryStore::new(store, clock, ids, quota);
        let guard = AdminGuard::new(self.config.admin_token);

        tracing::debug!(
            admin_guard = guard.is_enabled(),
            base_url = %base_url,
            default_list_limit = limit,
            "gallery service built"
        );
        Ok(GalleryService::new(galleries, guard, base_url, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateGalleryRequest, GalleryId};

    struct FixedIds;

    impl IdGenerator for FixedIds {
        fn generate(&self) -> GalleryId {
            GalleryId::new("fixed-id")
        }
    }

    #[test]
    fn build_with_defaults() {
        assert!(AppBuilder::new(MosaicConfig::default()).build().is_ok());
    }

    #[test]
    fn rejects_out_of_range_list_limit() {
        for limit in [0, 101] {
            let config = MosaicConfig {
                default_list_limit: limit,
                ..Default::default()
            };
            assert!(matches!(
                AppBuilder::new(config).build(),
                Err(BuildError::InvalidListLimit(l)) if l == limit
            ));
        }
    }

    #[test]
    fn rejects_relative_base_url() {
        let config = MosaicConfig {
            base_url: "gal.example".into(),
            ..Default::default()
        };
        assert!(matches!(
            AppBuilder::new(config).build(),
            Err(BuildError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = MosaicConfig {
            base_url: "https://gal.example/".into(),
            ..Default::default()
        };
        let svc = AppBuilder::new(config).build().unwrap();
        assert_eq!(
            svc.location(&GalleryId::new("x")),
            "https://gal.example/gallery/x"
        );
    }

    #[tokio::test]
    async fn custom_id_generator_is_used() {
        let svc = AppBuilder::new(MosaicConfig::default())
            .id_generator(Arc::new(FixedIds))
            .build()
            .unwrap();
        let resp = svc
            .create(CreateGalleryRequest::new(vec!["https://host/a.jpg".into()]))
            .await;
        assert_eq!(resp.id, Some(GalleryId::new("fixed-id")));
        assert_eq!(resp.url.as_deref(), Some("/gallery/fixed-id"));
    }
}
