//! Domain identifiers.
//!
//! # GalleryId
//! ギャラリーの主キー。クライアント指定の文字列、または
//! `IdGenerator` が生成した base-36 文字列のどちらかです。
//!
//! - 作成に成功した時点で一意
//! - 作成後は不変（レコードは上書きされない）
//! - JSON では素の文字列としてシリアライズされる

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a gallery record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryId(String);

impl GalleryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for GalleryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for GalleryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for GalleryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
