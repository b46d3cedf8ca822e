//! 唯一 ID 產生邏輯

use crate::alias::BuildingID;
use rand::random;
use std::collections::HashSet;

/// 產生不在集合中的隨機 ID
pub fn generate_unique_id(used_ids: &HashSet<BuildingID>) -> BuildingID {
    loop {
        let new_id: BuildingID = random();
        if !used_ids.contains(&new_id) {
            return new_id;
        }
    }
}
