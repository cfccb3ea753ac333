//! mosaic-core
//!
//! Core of the Mosaic gallery service: time-limited image galleries stored in
//! a key-value store with expiration, plus a best-effort daily write quota.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, gallery, quota, layout, errors）
//! - **ports**: 抽象化レイヤー（KvStore, Clock, IdGenerator）
//! - **app**: アプリケーションロジック（builder, service, gallery_store, quota, listing, auth）
//! - **impls**: 実装（InMemoryKvStore など開発用）
//! - **config**: 設定の読み込み

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
