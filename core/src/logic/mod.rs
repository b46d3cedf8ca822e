//! 核心業務邏輯（純函式狀態轉移）

pub mod combat;
pub mod construction;
pub mod grid;
pub mod id_generator;
pub mod ledger;
pub mod production;
pub mod registry;
pub mod troops;
