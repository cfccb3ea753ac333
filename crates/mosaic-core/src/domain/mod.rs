//! Domain model (ids, gallery records, quota, layouts, errors).
//!
//! ストアやランタイムに依存しない純粋な型と関数だけを置きます。

pub mod errors;
pub mod gallery;
pub mod ids;
pub mod layout;
pub mod quota;

pub use self::errors::{ErrorKind, GalleryError};
pub use self::gallery::{CreateGalleryRequest, ExistenceCheck, Gallery, ThemeColors};
pub use self::ids::GalleryId;
pub use self::layout::{CoverLayout, CoverSelection};
pub use self::quota::QuotaStatus;
