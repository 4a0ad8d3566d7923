// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod search;
pub mod security;
pub mod store;
pub mod time;

/* -------------------------------- 再エクスポート -------------------------------- */

// 時刻関連
pub use time::{FixedClock, fixed_now};

// セキュリティ関連
pub use security::{
    DummyTokenManager, StaticCsrfTokens, EXPIRED_TOKEN, OUTSIDER_TOKEN, TEST_CSRF_TOKEN,
    TEST_TOKEN,
};

// 検索インデックス
pub use search::{FailingSearchIndex, RecordingSearchIndex};

// インメモリリポジトリ
pub use store::{InMemoryStore, StoreState};
