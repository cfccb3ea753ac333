//! AdminGuard - 管理用エンドポイント（クォータ参照）の静的トークン検証
//!
//! トークンが設定されていない場合はチェック自体を行いません（デフォルトで公開）。

use subtle::ConstantTimeEq;

use crate::domain::GalleryError;

#[derive(Debug, Clone, Default)]
pub struct AdminGuard {
    token: Option<String>,
}

impl AdminGuard {
    /// A blank token counts as not configured.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.token.is_some()
    }

    /// Checks an `Authorization` header value (`Bearer <token>`).
    pub fn authorize(&self, authorization: Option<&str>) -> Result<(), GalleryError> {
        let Some(expected) = self.token.as_deref() else {
            return Ok(());
        };

        let presented = authorization
            .map(str::trim)
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .ok_or(GalleryError::Unauthorized)?;

        if bool::from(presented.as_bytes().ct_eq(expected.as_bytes())) {
            Ok(())
        } else {
            tracing::warn!("rejected admin request with mismatched token");
            Err(GalleryError::Unauthorized)
        }
    }
}
