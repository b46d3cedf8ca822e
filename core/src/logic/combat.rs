//! 戰鬥結算套用

use crate::alias::Amount;
use crate::core_types::GameState;
use crate::logic::ledger::{credit, remove_troops};
use oracle_lib::CombatResult;

/// 每場完成的進攻只套用一次
pub fn apply_combat_result(state: &GameState, result: &CombatResult) -> GameState {
    let looted = credit(
        state,
        result.gold_looted as Amount,
        result.elixir_looted as Amount,
    );
    remove_troops(&looted, result.troops_lost)
}
