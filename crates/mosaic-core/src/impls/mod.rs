//! Impls - 実装（開発用・テスト用）
//!
//! このモジュールには ports の実装を含めます。
//!
//! # 含まれる実装
//! - **InMemoryKvStore**: 開発用の TTL 付きストア
//! - **FaultyKvStore**: 失敗注入用（テストのみ）
//!
//! # 本番用実装
//! 本番のストア（エッジの KV サービスなど）は `KvStore` を実装した別クレートに置きます。

pub mod inmem_kv;

#[cfg(test)]
pub mod faulty_kv;

pub use self::inmem_kv::InMemoryKvStore;
