// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod builders;
pub mod helpers;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use helpers::*;
