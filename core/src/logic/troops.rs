//! 士兵訓練容量

use crate::alias::TroopCount;
use crate::constants::{TROOP_COST_ELIXIR, TROOP_TRAIN_AMOUNT};
use crate::core_types::{BuildingBehavior, Cost, GameState, Resource};
use crate::error::{EconomyError, Result};
use crate::logic::ledger::{credit_troops, pay};

/// 所有兵營等級 × 每級訓練數
pub fn trainable_capacity(state: &GameState) -> TroopCount {
    state
        .grid
        .iter()
        .filter(|b| b.config().behavior == BuildingBehavior::TrainsTroops)
        .map(|b| b.level.saturating_mul(TROOP_TRAIN_AMOUNT))
        .fold(0, TroopCount::saturating_add)
}

pub fn training_cost(capacity: TroopCount) -> Cost {
    Cost::new(Resource::Elixir, u64::from(capacity) * TROOP_COST_ELIXIR)
}

/// 一次訓練滿容量的士兵，不做部分訓練
///
/// 容量每次重新計算而非保留，連續呼叫必須由呼叫端序列化。
pub fn train(state: &GameState) -> Result<GameState> {
    let capacity = trainable_capacity(state);
    if capacity == 0 {
        return Err(EconomyError::NoBarracks.into());
    }
    let paid = pay(state, training_cost(capacity))?;
    Ok(credit_troops(&paid, capacity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{BuildingKind, Position};
    use crate::error::ErrorKind;
    use crate::logic::construction::{build, upgrade};

    #[test]
    fn test_no_barracks_no_capacity() {
        let state = GameState::default();
        assert_eq!(trainable_capacity(&state), 0);

        let err = train(&state).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::Economy(EconomyError::NoBarracks)
        ));
    }

    #[test]
    fn test_capacity_sums_barracks_levels() {
        let state = GameState::new_village(5000.0, 5000.0);
        let state = build(&state, BuildingKind::Barracks, Position::new(0, 0)).unwrap();
        let state = build(&state, BuildingKind::Barracks, Position::new(1, 0)).unwrap();
        let state = build(&state, BuildingKind::Mine, Position::new(2, 0)).unwrap();
        assert_eq!(trainable_capacity(&state), 10);

        let id = state.grid.occupant_at(Position::new(0, 0)).unwrap().id;
        let state = upgrade(&state, id).unwrap();
        assert_eq!(trainable_capacity(&state), 15);
    }

    #[test]
    fn test_train_costs_elixir_per_troop() {
        let state = GameState::default();
        let state = build(&state, BuildingKind::Barracks, Position::new(1, 1)).unwrap();

        assert_eq!(training_cost(5), Cost::new(Resource::Elixir, 50));
        let state = train(&state).unwrap();
        assert_eq!(state.troops, 5);
        assert_eq!(state.elixir, 450.0);
        assert_eq!(state.gold, 300.0);
    }

    #[test]
    fn test_train_insufficient_elixir() {
        let state = GameState::new_village(500.0, 49.0);
        let state = build(&state, BuildingKind::Barracks, Position::new(1, 1)).unwrap();

        let err = train(&state).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::Economy(EconomyError::InsufficientFunds {
                resource: Resource::Elixir,
                ..
            })
        ));
    }
}
