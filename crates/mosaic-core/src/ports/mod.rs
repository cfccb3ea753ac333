//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部システム（キーバリューストア、時計、乱数）への
//! インターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - キーバリューストアが唯一の状態（リクエスト間でメモリを共有しない）
//! - 期限切れはストアの TTL に任せる

pub mod clock;
pub mod id_generator;
pub mod kv_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{Base36IdGenerator, IdGenerator};
pub use self::kv_store::{KvStore, ListOptions, PutOptions, StoreError, get_json};
