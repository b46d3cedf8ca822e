//! 遊戲常數定義

use crate::alias::{Amount, Coord, Level, TroopCount};

/// 村莊網格邊長
pub const GRID_SIZE: Coord = 12;

/// 初始金幣
pub const INITIAL_GOLD: Amount = 500.0;

/// 初始聖水
pub const INITIAL_ELIXIR: Amount = 500.0;

/// 每名士兵的訓練費用（聖水）
pub const TROOP_COST_ELIXIR: u64 = 10;

/// 每級兵營一次可訓練的士兵數
pub const TROOP_TRAIN_AMOUNT: TroopCount = 5;

/// 金礦與聖水收集器每級每回合產量
pub const PRODUCTION_PER_LEVEL: Amount = 1.5;

/// 升級費用的等比成長率
pub const UPGRADE_COST_GROWTH: f64 = 1.5;

/// 新建築的等級
pub const STARTING_LEVEL: Level = 1;

/// 生產回合間隔（毫秒）
pub const TICK_INTERVAL_MS: u64 = 1000;

/// 神諭請求逾時（毫秒）
pub const ORACLE_TIMEOUT_MS: u64 = 15_000;
