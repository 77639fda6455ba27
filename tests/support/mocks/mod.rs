// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod board_repos;
pub mod repos;
pub mod time;

// 時刻関連
pub use time::{FixedClock, fixed_now};

// ボードリポジトリ
pub use board_repos::InMemoryBoards;

// その他のリポジトリ
pub use repos::{EmptyAgentGroups, EmptyAgents, EmptyTickets};
