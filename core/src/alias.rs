//! 型別別名

pub use oracle_lib::{Loot, TroopCount};

pub type Coord = usize;
pub type BuildingID = u64;
pub type Level = u32;
/// 金幣與聖水餘額，累積過程中可能有小數
pub type Amount = f64;
