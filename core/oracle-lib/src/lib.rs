//! 戰鬥敘事神諭客戶端
//!
//! 將進攻兵力送往外部敘事服務，驗證並夾限回傳的戰報；
//! 任何傳輸、逾時或解析失敗都會改用固定公式的備援結果，不會向外拋錯。

mod client;
mod error;
mod narrator;
mod request;
mod response;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use client::*;
pub use error::*;
pub use narrator::*;
pub use request::*;
pub use response::*;

pub type TroopCount = u32;
pub type Loot = u64;
