//! GalleryStore - ギャラリーの作成・参照・一覧
//!
//! # ライフサイクル
//! nonexistent → active（30 日未満）→ nonexistent
//!
//! 期限切れはストアの TTL だけで起きます。アプリケーションは "expired" を
//! 観測せず、単にレコードが見つからなくなります。
//!
//! # 冪等な作成（非トランザクション）
//! 既存チェック → 書き込みは check-then-write です。同じ gallery_id で
//! 同時に作成されると両方が "not found" を通過し、後勝ちで上書きされ、
//! クォータも二重に数えられます。ストアに CAS が無い限り既知の挙動です。

use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;

use super::quota::QuotaTracker;
use crate::domain::{CreateGalleryRequest, ExistenceCheck, Gallery, GalleryError, GalleryId};
use crate::ports::{Clock, IdGenerator, KvStore, ListOptions, PutOptions, get_json};

pub const GALLERY_KEY_PREFIX: &str = "gallery:";

/// Retention of a gallery record.
pub const GALLERY_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Upper bound on `list` results.
pub const MAX_LIST_LIMIT: usize = 100;

/// Whether `create` wrote a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreateStatus {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub id: GalleryId,
    pub status: CreateStatus,
}

pub struct GalleryStore {
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    quota: QuotaTracker,
}

impl GalleryStore {
    pub fn new(
        store: Arc<dyn KvStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        quota: QuotaTracker,
    ) -> Self {
        Self {
            store,
            clock,
            ids,
            quota,
        }
    }

    pub fn quota(&self) -> &QuotaTracker {
        &self.quota
    }

    fn key(id: &GalleryId) -> String {
        format!("{GALLERY_KEY_PREFIX}{id}")
    }

    /// Creates a gallery, or reports the existing one under the same id.
    pub async fn create(
        &self,
        request: CreateGalleryRequest,
    ) -> Result<CreateOutcome, GalleryError> {
        let requested_id = request.requested_id();
        let images = match request.images {
            Some(images) if !images.is_empty() => images,
            Some(_) => return Err(GalleryError::InvalidData("images must not be empty".into())),
            None => return Err(GalleryError::InvalidData("images are required".into())),
        };

        let id = requested_id.unwrap_or_else(|| self.ids.generate());
        let key = Self::key(&id);

        if self.store.get(&key).await?.is_some() {
            tracing::debug!(gallery_id = %id, "gallery already exists, skipping write");
            return Ok(CreateOutcome {
                id,
                status: CreateStatus::AlreadyExists,
            });
        }

        let gallery = Gallery::new(
            id.clone(),
            request.title,
            request.author,
            images,
            self.clock.now_millis(),
            request.theme_colors,
        );
        let body = serde_json::to_string(&gallery)
            .map_err(|e| GalleryError::ServerError(format!("encode gallery {id}: {e}")))?;

        if let Err(e) = self
            .store
            .put(&key, body, PutOptions::expiring_in(GALLERY_TTL))
            .await
        {
            tracing::error!(gallery_id = %id, error = %e, "failed to persist gallery");
            return Err(GalleryError::from_write_failure(e));
        }

        // accounting is advisory: never fails the creation
        match self.quota.increment().await {
            Ok(used) => tracing::debug!(used, "quota incremented"),
            Err(e) => tracing::warn!(gallery_id = %id, error = %e, "quota increment failed"),
        }

        tracing::info!(gallery_id = %id, image_count = gallery.image_count, "gallery created");
        Ok(CreateOutcome {
            id,
            status: CreateStatus::Created,
        })
    }

    pub async fn get(&self, id: &GalleryId) -> Result<Option<Gallery>, GalleryError> {
        let gallery = get_json::<Gallery>(self.store.as_ref(), &Self::key(id)).await?;
        if gallery.is_none() {
            tracing::debug!(gallery_id = %id, "gallery not found");
        }
        Ok(gallery)
    }

    pub async fn check(&self, id: &GalleryId) -> Result<ExistenceCheck, GalleryError> {
        Ok(self
            .get(id)
            .await?
            .map_or_else(ExistenceCheck::missing, |g| ExistenceCheck::from(&g)))
    }

    /// Most recent galleries first.
    ///
    /// Best-effort snapshot: each record is fetched independently, and one
    /// that fails to load is left out instead of failing the listing.
    pub async fn list(&self, limit: usize) -> Result<Vec<Gallery>, GalleryError> {
        let limit = limit.min(MAX_LIST_LIMIT);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let keys = self
            .store
            .list(ListOptions::prefixed(GALLERY_KEY_PREFIX, limit))
            .await?;

        let store = self.store.as_ref();
        let fetches = keys.iter().map(|key| async move {
            match get_json::<Gallery>(store, key).await {
                Ok(Some(g)) if !g.id.is_empty() => Some(g),
                Ok(Some(_)) => {
                    tracing::debug!(key = %key, "skipping gallery without id");
                    None
                }
                Ok(None) => None,
                Err(e) => {
                    tracing::debug!(key = %key, error = %e, "skipping unreadable gallery");
                    None
                }
            }
        });

        let mut galleries: Vec<Gallery> = join_all(fetches).await.into_iter().flatten().collect();
        galleries.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(galleries)
    }
}
