//! Listing view model: one cover card per gallery.

use serde::Serialize;

use crate::domain::layout::select;
use crate::domain::{CoverSelection, Gallery};

/// What the presentation layer needs to draw a gallery in a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryCard {
    pub gallery: Gallery,
    pub cover: CoverSelection,
    /// Leading images shown on the cover, `cover.cover_image_count` of them.
    pub cover_images: Vec<String>,
}

impl From<Gallery> for GalleryCard {
    fn from(gallery: Gallery) -> Self {
        let cover = select(gallery.id.as_str(), gallery.image_count);
        let cover_images = gallery
            .images
            .iter()
            .take(cover.cover_image_count)
            .cloned()
            .collect();
        Self {
            gallery,
            cover,
            cover_images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CoverLayout, GalleryId};

    fn gallery(id: &str, n: usize) -> Gallery {
        let images = (0..n).map(|i| format!("https://host/{i}.jpg")).collect();
        Gallery::new(GalleryId::new(id), None, None, images, 0, None)
    }

    #[test]
    fn card_takes_leading_images() {
        // "abc" selects triple
        let card = GalleryCard::from(gallery("abc", 6));
        assert_eq!(card.cover.layout, CoverLayout::Triple);
        assert_eq!(
            card.cover_images,
            vec!["https://host/0.jpg", "https://host/1.jpg", "https://host/2.jpg"]
        );
    }

    #[test]
    fn card_never_asks_for_missing_images() {
        // "a" selects grid (4) but only three exist
        let card = GalleryCard::from(gallery("a", 3));
        assert_eq!(card.cover.layout, CoverLayout::Grid);
        assert_eq!(card.cover_images.len(), 3);
    }

    #[test]
    fn single_image_card() {
        let card = GalleryCard::from(gallery("anything", 1));
        assert_eq!(card.cover.layout, CoverLayout::Single);
        assert_eq!(card.cover_images.len(), 1);
    }
}
