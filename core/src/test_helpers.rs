//! 測試輔助：快速搭建村莊狀態

use crate::alias::{Amount, BuildingID, Coord, Level};
use crate::core_types::{Building, BuildingKind, GameState, Position};
use crate::logic::id_generator::generate_unique_id;

pub use oracle_lib::test_helpers::ScriptedNarrator;

/// 開局村莊加上指定建築，`(種類, x, y, 等級)`
pub fn village_with(
    gold: Amount,
    elixir: Amount,
    buildings: &[(BuildingKind, Coord, Coord, Level)],
) -> GameState {
    let mut state = GameState::new_village(gold, elixir);
    for &(kind, x, y, level) in buildings {
        let id = generate_unique_id(&state.grid.ids());
        let mut building = Building::new(id, kind, Position::new(x, y));
        building.level = level;
        state.grid = state
            .grid
            .place(building)
            .expect("測試村莊的建築位置不可重疊");
    }
    state
}

/// 取得指定位置的建築 ID
pub fn id_at(state: &GameState, x: Coord, y: Coord) -> BuildingID {
    state
        .grid
        .occupant_at(Position::new(x, y))
        .map(|b| b.id)
        .expect("指定位置應有建築")
}
