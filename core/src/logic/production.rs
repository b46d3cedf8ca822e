//! 生產排程：每回合依金礦與聖水收集器等級入帳

use crate::alias::Amount;
use crate::constants::PRODUCTION_PER_LEVEL;
use crate::core_types::{BuildingBehavior, GameState, Resource};
use crate::logic::grid::VillageGrid;
use crate::logic::ledger::credit;

/// 一回合的產量
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Production {
    pub gold: Amount,
    pub elixir: Amount,
}

impl Production {
    pub fn is_empty(&self) -> bool {
        self.gold <= 0.0 && self.elixir <= 0.0
    }
}

pub fn production_per_tick(grid: &VillageGrid) -> Production {
    grid.iter()
        .fold(Production::default(), |mut production, building| {
            let amount = Amount::from(building.level) * PRODUCTION_PER_LEVEL;
            match building.config().behavior {
                BuildingBehavior::Produces(Resource::Gold) => production.gold += amount,
                BuildingBehavior::Produces(Resource::Elixir) => production.elixir += amount,
                _ => {}
            }
            production
        })
}

/// 執行一回合生產
///
/// 沒有任何產量時回傳 `None`，呼叫端沿用原狀態。產量不受儲存上限影響。
pub fn tick(state: &GameState) -> Option<GameState> {
    let production = production_per_tick(&state.grid);
    if production.is_empty() {
        return None;
    }
    Some(credit(state, production.gold, production.elixir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{Building, BuildingKind, Position};

    fn with(state: &GameState, id: u64, kind: BuildingKind, x: usize, level: u32) -> GameState {
        let mut building = Building::new(id, kind, Position::new(x, 0));
        building.level = level;
        GameState {
            grid: state.grid.place(building).unwrap(),
            ..state.clone()
        }
    }

    #[test]
    fn test_no_producers_is_noop() {
        let state = GameState::default();
        assert!(production_per_tick(&state.grid).is_empty());
        assert!(tick(&state).is_none());

        // 兵營與加農砲不生產
        let state = with(&state, 1, BuildingKind::Barracks, 0, 3);
        let state = with(&state, 2, BuildingKind::Cannon, 1, 2);
        assert!(tick(&state).is_none());
    }

    #[test]
    fn test_production_scales_with_level() {
        let state = GameState::new_village(0.0, 0.0);
        let state = with(&state, 1, BuildingKind::Mine, 0, 1);
        let state = with(&state, 2, BuildingKind::Mine, 1, 2);
        let state = with(&state, 3, BuildingKind::Collector, 2, 1);

        let production = production_per_tick(&state.grid);
        assert_eq!(production.gold, 4.5);
        assert_eq!(production.elixir, 1.5);

        let state = tick(&state).unwrap();
        let state = tick(&state).unwrap();
        assert_eq!(state.gold, 9.0);
        assert_eq!(state.elixir, 3.0);
        assert_eq!(state.troops, 0);
    }
}
