//! GalleryService - 外部（HTTP/プレゼンテーション層）に公開する操作
//!
//! # 公開操作
//! - create / create_json: ギャラリー作成（構造化された結果を返す）
//! - view: 1 件取得（無ければ NotFound）
//! - check: 存在確認
//! - quota: クォータ参照（管理トークン）
//! - list: 新しい順の一覧 + カバーレイアウト

use serde::Serialize;

use super::auth::AdminGuard;
use super::gallery_store::{CreateOutcome, CreateStatus, GalleryStore, MAX_LIST_LIMIT};
use super::listing::GalleryCard;
use crate::domain::{
    CreateGalleryRequest, ErrorKind, ExistenceCheck, Gallery, GalleryError, GalleryId, QuotaStatus,
};

/// Structured result of a creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<GalleryId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CreateStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,

    pub message: String,
}

impl CreateResponse {
    fn failed(err: &GalleryError) -> Self {
        Self {
            success: false,
            id: None,
            url: None,
            status: None,
            error: Some(err.kind()),
            message: err.to_string(),
        }
    }
}

pub struct GalleryService {
    galleries: GalleryStore,
    guard: AdminGuard,
    base_url: String,
    default_list_limit: usize,
}

impl GalleryService {
    pub fn new(
        galleries: GalleryStore,
        guard: AdminGuard,
        base_url: impl Into<String>,
        default_list_limit: usize,
    ) -> Self {
        Self {
            galleries,
            guard,
            base_url: base_url.into(),
            default_list_limit,
        }
    }

    pub fn galleries(&self) -> &GalleryStore {
        &self.galleries
    }

    /// Public location of a gallery.
    pub fn location(&self, id: &GalleryId) -> String {
        format!("{}/gallery/{}", self.base_url, id)
    }

    pub async fn create(&self, request: CreateGalleryRequest) -> CreateResponse {
        match self.galleries.create(request).await {
            Ok(CreateOutcome { id, status }) => {
                let message = match status {
                    CreateStatus::Created => "gallery created",
                    CreateStatus::AlreadyExists => "gallery already exists",
                };
                CreateResponse {
                    success: true,
                    url: Some(self.location(&id)),
                    id: Some(id),
                    status: Some(status),
                    error: None,
                    message: message.to_string(),
                }
            }
            Err(e) => CreateResponse::failed(&e),
        }
    }

    /// Like `create`, for a raw JSON body.
    pub async fn create_json(&self, body: &str) -> CreateResponse {
        match serde_json::from_str::<CreateGalleryRequest>(body) {
            Ok(request) => self.create(request).await,
            Err(e) => CreateResponse::failed(&GalleryError::InvalidData(e.to_string())),
        }
    }

    pub async fn view(&self, id: &GalleryId) -> Result<Gallery, GalleryError> {
        self.galleries
            .get(id)
            .await?
            .ok_or_else(|| GalleryError::NotFound(id.clone()))
    }

    pub async fn check(&self, id: &GalleryId) -> Result<ExistenceCheck, GalleryError> {
        self.galleries.check(id).await
    }

    pub async fn quota(&self, authorization: Option<&str>) -> Result<QuotaStatus, GalleryError> {
        self.guard.authorize(authorization)?;
        Ok(self.galleries.quota().read().await?)
    }

    pub async fn list(&self, limit: Option<usize>) -> Result<Vec<GalleryCard>, GalleryError> {
        let limit = limit.unwrap_or(self.default_list_limit).min(MAX_LIST_LIMIT);
        let galleries = self.galleries.list(limit).await?;
        Ok(galleries.into_iter().map(GalleryCard::from).collect())
    }
}
