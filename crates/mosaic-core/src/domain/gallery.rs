//! Gallery record and creation request.
//!
//! A gallery is written once and never updated in place. The store's TTL is
//! the only deletion path.

use serde::{Deserialize, Serialize};

use super::ids::GalleryId;

pub const DEFAULT_TITLE: &str = "Untitled Gallery";
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Optional presentation colors attached to a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub accent: String,
}

/// The persisted unit representing one shareable image collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub id: GalleryId,
    pub title: String,
    pub author: String,

    /// Display order.
    pub images: Vec<String>,

    /// Milliseconds since the Unix epoch, set once at creation.
    pub created: i64,

    /// Length of `images` at creation time. Not recomputed on read.
    pub image_count: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_colors: Option<ThemeColors>,
}

impl Gallery {
    /// Builds a fresh record from a validated request.
    ///
    /// `images` must already be known to be non-empty.
    pub fn new(
        id: GalleryId,
        title: Option<String>,
        author: Option<String>,
        images: Vec<String>,
        created: i64,
        theme_colors: Option<ThemeColors>,
    ) -> Self {
        let image_count = images.len();
        Self {
            id,
            title: non_blank_or(title, DEFAULT_TITLE),
            author: non_blank_or(author, DEFAULT_AUTHOR),
            images,
            created,
            image_count,
            theme_colors,
        }
    }
}

fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Input of a gallery creation.
///
/// Every field is optional at the wire level so that a missing image list can
/// be reported as `InvalidData` instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateGalleryRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub images: Option<Vec<String>>,

    #[serde(default)]
    pub gallery_id: Option<String>,

    #[serde(default)]
    pub theme_colors: Option<ThemeColors>,
}

impl CreateGalleryRequest {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images: Some(images),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_gallery_id(mut self, id: impl Into<String>) -> Self {
        self.gallery_id = Some(id.into());
        self
    }

    pub fn with_theme_colors(
        mut self,
        primary: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        self.theme_colors = Some(ThemeColors {
            primary: primary.into(),
            accent: accent.into(),
        });
        self
    }

    /// Client-supplied id as sent. Blank strings count as absent.
    pub fn requested_id(&self) -> Option<GalleryId> {
        self.gallery_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .map(GalleryId::from)
    }
}

/// Result of an existence check. `image_count` and `created` are present only
/// when the gallery exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistenceCheck {
    pub exists: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
}

impl ExistenceCheck {
    pub fn missing() -> Self {
        Self {
            exists: false,
            image_count: None,
            created: None,
        }
    }
}

impl From<&Gallery> for ExistenceCheck {
    fn from(gallery: &Gallery) -> Self {
        Self {
            exists: true,
            image_count: Some(gallery.image_count),
            created: Some(gallery.created),
        }
    }
}
