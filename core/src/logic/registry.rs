//! 建築設定表，以種類查表

use crate::alias::Level;
use crate::constants::UPGRADE_COST_GROWTH;
use crate::core_types::{BuildingBehavior, BuildingConfig, BuildingKind, Cost, Resource};
use strum::IntoEnumIterator;

static TOWN_HALL: BuildingConfig = BuildingConfig {
    kind: BuildingKind::TownHall,
    name: "Town Hall",
    symbol: "🏰",
    cost_resource: Resource::Gold,
    base_cost: 1000,
    description: "The heart of your village.",
    behavior: BuildingBehavior::Headquarters,
    constructible: false,
};

static MINE: BuildingConfig = BuildingConfig {
    kind: BuildingKind::Mine,
    name: "Gold Mine",
    symbol: "⛏️",
    cost_resource: Resource::Elixir,
    base_cost: 100,
    description: "Produces Gold over time.",
    behavior: BuildingBehavior::Produces(Resource::Gold),
    constructible: true,
};

static COLLECTOR: BuildingConfig = BuildingConfig {
    kind: BuildingKind::Collector,
    name: "Elixir Collector",
    symbol: "⚗️",
    cost_resource: Resource::Gold,
    base_cost: 100,
    description: "Produces Elixir over time.",
    behavior: BuildingBehavior::Produces(Resource::Elixir),
    constructible: true,
};

static BARRACKS: BuildingConfig = BuildingConfig {
    kind: BuildingKind::Barracks,
    name: "Barracks",
    symbol: "⚔️",
    cost_resource: Resource::Gold,
    base_cost: 200,
    description: "Allows you to train troops.",
    behavior: BuildingBehavior::TrainsTroops,
    constructible: true,
};

static CANNON: BuildingConfig = BuildingConfig {
    kind: BuildingKind::Cannon,
    name: "Cannon",
    symbol: "💣",
    cost_resource: Resource::Gold,
    base_cost: 250,
    description: "Defends your village.",
    behavior: BuildingBehavior::Defends,
    constructible: true,
};

pub fn config_for(kind: BuildingKind) -> &'static BuildingConfig {
    match kind {
        BuildingKind::TownHall => &TOWN_HALL,
        BuildingKind::Mine => &MINE,
        BuildingKind::Collector => &COLLECTOR,
        BuildingKind::Barracks => &BARRACKS,
        BuildingKind::Cannon => &CANNON,
    }
}

/// 建造選單可選的種類（不含主堡）
pub fn constructible_kinds() -> impl Iterator<Item = BuildingKind> {
    BuildingKind::iter().filter(|kind| config_for(*kind).constructible)
}

pub fn build_cost(kind: BuildingKind) -> Cost {
    let config = config_for(kind);
    Cost::new(config.cost_resource, config.base_cost)
}

/// `floor(base_cost × 1.5^current_level)`
pub fn scaled_cost(base_cost: u64, current_level: Level) -> u64 {
    let exponent = i32::try_from(current_level).unwrap_or(i32::MAX);
    (base_cost as f64 * UPGRADE_COST_GROWTH.powi(exponent)).floor() as u64
}

pub fn upgrade_cost(kind: BuildingKind, current_level: Level) -> Cost {
    let config = config_for(kind);
    Cost::new(
        config.cost_resource,
        scaled_cost(config.base_cost, current_level),
    )
}
