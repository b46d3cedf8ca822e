//! 建造與升級引擎
//!
//! 先驗證再一次提交：扣款與網格變動同時成立，或都不發生。

use crate::alias::BuildingID;
use crate::constants::GRID_SIZE;
use crate::core_types::{Building, BuildingKind, Cost, GameState, Position};
use crate::error::{EconomyError, GridError, Result};
use crate::logic::grid::is_valid_position;
use crate::logic::id_generator::generate_unique_id;
use crate::logic::ledger::pay;
use crate::logic::registry::{build_cost, config_for, upgrade_cost};

/// 在空格建造新建築（等級 1）
///
/// 檢查順序：邊界、佔據、可否建造、資源。佔據檢查先於資源，
/// 因此在已佔據的格子建造一律回報 `CellOccupied`。
pub fn build(state: &GameState, kind: BuildingKind, pos: Position) -> Result<GameState> {
    build_with_id(state, kind, pos).map(|(next, _)| next)
}

/// 同 [`build`]，並回傳新建築的 ID
pub fn build_with_id(
    state: &GameState,
    kind: BuildingKind,
    pos: Position,
) -> Result<(GameState, BuildingID)> {
    if !is_valid_position(pos) {
        return Err(GridError::OutOfBounds {
            x: pos.x,
            y: pos.y,
            size: GRID_SIZE,
        }
        .into());
    }
    if let Some(occupant) = state.grid.occupant_at(pos) {
        return Err(GridError::CellOccupied {
            x: pos.x,
            y: pos.y,
            occupant: occupant.kind,
        }
        .into());
    }
    if !config_for(kind).constructible {
        return Err(EconomyError::NotConstructible { kind }.into());
    }

    let paid = pay(state, build_cost(kind))?;
    let id = generate_unique_id(&state.grid.ids());
    let grid = paid.grid.place(Building::new(id, kind, pos))?;
    Ok((GameState { grid, ..paid }, id))
}

/// 目前等級升到下一級的費用
pub fn upgrade_cost_for(state: &GameState, id: BuildingID) -> Result<Cost> {
    let building = state.grid.get(id).ok_or(GridError::NotFound { id })?;
    Ok(upgrade_cost(building.kind, building.level))
}

/// 升級一級，多級升級需重複呼叫
pub fn upgrade(state: &GameState, id: BuildingID) -> Result<GameState> {
    let cost = upgrade_cost_for(state, id)?;
    let paid = pay(state, cost)?;
    let grid = paid.grid.upgrade(id)?;
    Ok(GameState { grid, ..paid })
}
