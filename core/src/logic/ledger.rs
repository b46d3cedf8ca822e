//! 經濟帳本：所有資源變動都經過這裡，餘額永不為負

use crate::alias::{Amount, TroopCount};
use crate::core_types::{Cost, GameState, Resource};
use crate::error::{EconomyError, Result};

/// 增加金幣與聖水，累積時可能為小數
///
/// 非有限值（NaN、無限）的增量會被忽略。
pub fn credit(state: &GameState, gold: Amount, elixir: Amount) -> GameState {
    GameState {
        gold: apply_delta(state.gold, gold),
        elixir: apply_delta(state.elixir, elixir),
        ..state.clone()
    }
}

fn apply_delta(balance: Amount, delta: Amount) -> Amount {
    if !delta.is_finite() {
        return balance;
    }
    let next = balance + delta;
    if next.is_finite() { next.max(0.0) } else { balance }
}

/// 扣除資源，餘額不足時失敗且不修改狀態
///
/// 金額必須是有限且非負的數值。
pub fn debit(state: &GameState, resource: Resource, amount: Amount) -> Result<GameState> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(EconomyError::InvalidAmount { resource, amount }.into());
    }
    let available = state.balance(resource);
    if available < amount {
        return Err(EconomyError::InsufficientFunds {
            resource,
            required: amount,
            available,
        }
        .into());
    }

    let mut next = state.clone();
    match resource {
        Resource::Gold => next.gold -= amount,
        Resource::Elixir => next.elixir -= amount,
    }
    Ok(next)
}

pub fn can_afford(state: &GameState, cost: Cost) -> bool {
    state.balance(cost.resource) >= cost.amount as Amount
}

pub fn pay(state: &GameState, cost: Cost) -> Result<GameState> {
    debit(state, cost.resource, cost.amount as Amount)
}

pub fn credit_troops(state: &GameState, count: TroopCount) -> GameState {
    GameState {
        troops: state.troops.saturating_add(count),
        ..state.clone()
    }
}

/// 移除士兵，最少歸零
pub fn remove_troops(state: &GameState, count: TroopCount) -> GameState {
    GameState {
        troops: state.troops.saturating_sub(count),
        ..state.clone()
    }
}
