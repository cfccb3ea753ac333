//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせてアプリケーションロジックを実装します。
//! リクエスト間でメモリ上の状態は共有せず、すべての状態は KvStore にあります。
//!
//! # 主要コンポーネント
//! - **AppBuilder**: 構築とワイヤリング
//! - **GalleryService**: 公開操作の窓口
//! - **GalleryStore**: 作成・参照・一覧
//! - **QuotaTracker**: 日次の書き込みカウンタ
//! - **AdminGuard**: クォータ参照の静的トークン検証
//! - **GalleryCard**: 一覧用のカバー情報

pub mod auth;
pub mod builder;
pub mod gallery_store;
pub mod listing;
pub mod quota;
pub mod service;

pub use self::auth::AdminGuard;
pub use self::builder::{AppBuilder, BuildError};
pub use self::gallery_store::{CreateOutcome, CreateStatus, GalleryStore};
pub use self::listing::GalleryCard;
pub use self::quota::QuotaTracker;
pub use self::service::{CreateResponse, GalleryService};
