//! Errors - エラー型と分類
//!
//! # 分類
//! - InvalidData: クライアントエラー（画像リストが無い・空）
//! - QuotaExceeded: ストアのプラットフォーム上限（翌日リトライ可）
//! - ServerError: その他の永続化エラー（調査なしでのリトライは無意味）
//! - NotFound: 存在しない・期限切れ（失敗ではなく正当な終端状態）
//! - Unauthorized: 管理トークン不一致（トークン設定時のみ）

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::GalleryId;
use crate::ports::StoreError;

/// Machine-readable error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidData,
    QuotaExceeded,
    ServerError,
    NotFound,
    Unauthorized,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidData => "INVALID_DATA",
            ErrorKind::QuotaExceeded => "QUOTA_EXCEEDED",
            ErrorKind::ServerError => "SERVER_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
        }
    }

    /// Caused by the request rather than the system.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorKind::ServerError)
    }

    /// Worth retrying later without changing the request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::QuotaExceeded)
    }
}

/// Error returned by the gallery operations.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("invalid gallery data: {0}")]
    InvalidData(String),

    #[error("storage quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("server error: {0}")]
    ServerError(String),

    #[error("gallery not found: {0}")]
    NotFound(GalleryId),

    #[error("unauthorized")]
    Unauthorized,
}

impl GalleryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GalleryError::InvalidData(_) => ErrorKind::InvalidData,
            GalleryError::QuotaExceeded(_) => ErrorKind::QuotaExceeded,
            GalleryError::ServerError(_) => ErrorKind::ServerError,
            GalleryError::NotFound(_) => ErrorKind::NotFound,
            GalleryError::Unauthorized => ErrorKind::Unauthorized,
        }
    }

    /// Classifies a failed record write.
    pub fn from_write_failure(err: StoreError) -> Self {
        if err.is_quota() {
            GalleryError::QuotaExceeded(err.to_string())
        } else {
            GalleryError::ServerError(err.to_string())
        }
    }
}

impl From<StoreError> for GalleryError {
    fn from(err: StoreError) -> Self {
        GalleryError::ServerError(err.to_string())
    }
}
