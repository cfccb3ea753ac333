//! Cover layout selection for gallery listings.
//!
//! The layout is derived from the gallery id instead of being stored, so the
//! same gallery renders the same way on every page load and on every server.
//! The hash must stay bit-compatible with the 32-bit `h * 31 + c` string hash
//! over UTF-16 code units; changing it reshuffles every existing listing.

use serde::{Deserialize, Serialize};

/// Visual arrangement of a gallery's cover card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverLayout {
    Single,
    Split,
    Featured,
    Grid,
    Hero,
    Triple,
}

/// Hash-selected layouts for galleries with three or more images, in index order.
const HASHED_LAYOUTS: [CoverLayout; 5] = [
    CoverLayout::Split,
    CoverLayout::Featured,
    CoverLayout::Grid,
    CoverLayout::Hero,
    CoverLayout::Triple,
];

impl CoverLayout {
    /// Number of images the layout wants to show.
    pub fn required_images(&self) -> usize {
        match self {
            CoverLayout::Single | CoverLayout::Hero => 1,
            CoverLayout::Split => 2,
            CoverLayout::Featured | CoverLayout::Triple => 3,
            CoverLayout::Grid => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoverLayout::Single => "single",
            CoverLayout::Split => "split",
            CoverLayout::Featured => "featured",
            CoverLayout::Grid => "grid",
            CoverLayout::Hero => "hero",
            CoverLayout::Triple => "triple",
        }
    }
}

/// Layout plus the number of images it actually uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverSelection {
    pub layout: CoverLayout,
    pub cover_image_count: usize,
}

/// 32-bit signed string hash (`h = h * 31 + c`, wrapping).
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(i32::from(c)))
}

/// Chooses a cover layout for a gallery. Pure function of its arguments.
pub fn select(id: &str, image_count: usize) -> CoverSelection {
    let layout = match image_count {
        0 | 1 => CoverLayout::Single,
        2 => CoverLayout::Split,
        _ => {
            // i64 so that |i32::MIN| does not overflow
            let index = i64::from(string_hash(id)).abs() % HASHED_LAYOUTS.len() as i64;
            HASHED_LAYOUTS[index as usize]
        }
    };

    CoverSelection {
        layout,
        cover_image_count: layout.required_images().min(image_count),
    }
}
