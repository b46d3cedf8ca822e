//! 核心資料型別

use crate::alias::{Amount, BuildingID, Coord, Level, TroopCount};
use crate::constants::{GRID_SIZE, INITIAL_ELIXIR, INITIAL_GOLD, STARTING_LEVEL};
use crate::logic::grid::VillageGrid;
use crate::logic::id_generator::generate_unique_id;
use crate::logic::registry::config_for;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum_macros::{Display, EnumIter};

/// 資源種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Resource {
    Gold,
    Elixir,
}

/// 建築種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BuildingKind {
    TownHall,
    Mine,
    Collector,
    Barracks,
    Cannon,
}

/// 建築的行為，依種類查表而非繼承
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingBehavior {
    Headquarters,
    Produces(Resource),
    TrainsTroops,
    Defends,
}

/// 建築種類的靜態設定
#[derive(Debug, PartialEq)]
pub struct BuildingConfig {
    pub kind: BuildingKind,
    pub name: &'static str,
    pub symbol: &'static str,
    pub cost_resource: Resource,
    pub base_cost: u64,
    pub description: &'static str,
    pub behavior: BuildingBehavior,
    /// 主堡只在開局放置一次
    pub constructible: bool,
}

/// 一筆費用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub resource: Resource,
    pub amount: u64,
}

impl Cost {
    pub fn new(resource: Resource, amount: u64) -> Self {
        Self { resource, amount }
    }
}

#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    pub fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

/// 網格上的建築實體
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingID,
    pub kind: BuildingKind,
    pub level: Level,
    pub position: Position,
}

impl Building {
    pub fn new(id: BuildingID, kind: BuildingKind, position: Position) -> Self {
        Self {
            id,
            kind,
            level: STARTING_LEVEL,
            position,
        }
    }

    pub fn config(&self) -> &'static BuildingConfig {
        config_for(self.kind)
    }
}

/// 遊戲狀態，唯一的可變根節點
///
/// 所有操作都是 `&GameState -> GameState` 的純函式，失敗時不產生新狀態。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub gold: Amount,
    pub elixir: Amount,
    pub troops: TroopCount,
    pub grid: VillageGrid,
}

impl GameState {
    /// 開局村莊：主堡位於網格中央
    pub fn new_village(gold: Amount, elixir: Amount) -> Self {
        let center = Position::new(GRID_SIZE / 2, GRID_SIZE / 2);
        let town_hall = Building::new(
            generate_unique_id(&HashSet::new()),
            BuildingKind::TownHall,
            center,
        );
        Self {
            gold: gold.max(0.0),
            elixir: elixir.max(0.0),
            troops: 0,
            grid: VillageGrid::with_town_hall(town_hall),
        }
    }

    pub fn balance(&self, resource: Resource) -> Amount {
        match resource {
            Resource::Gold => self.gold,
            Resource::Elixir => self.elixir,
        }
    }

    /// 顯示用，捨去小數
    pub fn display_gold(&self) -> u64 {
        self.gold as u64
    }

    /// 顯示用，捨去小數
    pub fn display_elixir(&self) -> u64 {
        self.elixir as u64
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_village(INITIAL_GOLD, INITIAL_ELIXIR)
    }
}
