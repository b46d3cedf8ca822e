//! 村莊網格：每格至多一棟建築

use crate::alias::{BuildingID, Level};
use crate::constants::GRID_SIZE;
use crate::core_types::{Building, Position};
use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VillageGrid {
    buildings: Vec<Building>,
}

/// 驗證位置是否在網格邊界內
pub fn is_valid_position(pos: Position) -> bool {
    pos.x < GRID_SIZE && pos.y < GRID_SIZE
}

impl VillageGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_town_hall(town_hall: Building) -> Self {
        Self {
            buildings: vec![town_hall],
        }
    }

    pub fn occupant_at(&self, pos: Position) -> Option<&Building> {
        self.buildings.iter().find(|b| b.position == pos)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.occupant_at(pos).is_some()
    }

    pub fn get(&self, id: BuildingID) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Building> {
        self.buildings.iter()
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn ids(&self) -> HashSet<BuildingID> {
        self.buildings.iter().map(|b| b.id).collect()
    }

    /// 放置建築，位置越界或已被佔據時失敗且不修改網格
    pub fn place(&self, building: Building) -> Result<Self> {
        let Position { x, y } = building.position;
        if !is_valid_position(building.position) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                size: GRID_SIZE,
            }
            .into());
        }
        if let Some(occupant) = self.occupant_at(building.position) {
            return Err(GridError::CellOccupied {
                x,
                y,
                occupant: occupant.kind,
            }
            .into());
        }

        let mut next = self.clone();
        next.buildings.push(building);
        Ok(next)
    }

    /// 將建築升一級，ID 與位置不變
    pub fn upgrade(&self, id: BuildingID) -> Result<Self> {
        let mut next = self.clone();
        let building = next
            .buildings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(GridError::NotFound { id })?;
        building.level += 1;
        Ok(next)
    }

    pub fn level_of(&self, id: BuildingID) -> Option<Level> {
        self.get(id).map(|b| b.level)
    }
}
