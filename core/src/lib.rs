//! 村莊經濟核心
//!
//! 此函式庫實作基地建造遊戲的經濟狀態機，包括：
//! - 資源帳本（金幣、聖水、士兵）
//! - 建築設定表與村莊網格
//! - 回合生產、建造與升級、士兵訓練
//! - 戰鬥神諭的結算套用與遊戲進程

pub mod alias;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod error;
pub mod logic;
pub mod session;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

// 重新導出常用類型
pub use alias::*;
pub use config::SessionConfig;
pub use core_types::{
    Building, BuildingBehavior, BuildingConfig, BuildingKind, Cost, GameState, Position, Resource,
};
pub use error::{EconomyError, Error, ErrorKind, GridError, LoadError, Result, SessionError};
pub use logic::grid::VillageGrid;
pub use oracle_lib::{CombatResult, Narrator, OfflineNarrator, OracleClient};
pub use session::{AttackTicket, VillageSession};
