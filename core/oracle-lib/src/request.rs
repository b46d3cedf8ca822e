use crate::*;
use serde::Serialize;
use serde_json::{Value, json};

/// 敘事者人設
pub const NARRATOR_PERSONA: &str =
    "You are an epic battle narrator for a fantasy strategy base-building game.";

/// 每名士兵的最大掠奪提示
pub const MAX_LOOT_PER_TROOP: Loot = 30;

/// 送往敘事服務的戰鬥請求
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRequest {
    pub troops_sent: TroopCount,
    pub max_loot: Loot,
    pub prompt: String,
    pub system_instruction: &'static str,
    pub response_schema: Value,
}

impl BattleRequest {
    pub fn new(troops_sent: TroopCount) -> Self {
        let max_loot = Loot::from(troops_sent) * MAX_LOOT_PER_TROOP;
        Self {
            troops_sent,
            max_loot,
            prompt: battle_prompt(troops_sent, max_loot),
            system_instruction: NARRATOR_PERSONA,
            response_schema: response_schema(),
        }
    }
}

fn battle_prompt(troops_sent: TroopCount, max_loot: Loot) -> String {
    format!(
        "The player is attacking an enemy goblin village with an army of {troops_sent} barbarians. \
         Generate a thrilling, 2-sentence battle report describing the clash. \
         Determine the outcome and loot. The enemy defenses vary in strength randomly. \
         Max potential loot is around {max_loot} gold and elixir. \
         The more troops used, the higher the chance of securing big loot, \
         but also expect some losses in combat."
    )
}

/// 要求敘事服務遵守的 JSON 結構
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "report": {
                "type": "string",
                "description": "A short, exciting 2-sentence story about how the battle went."
            },
            "goldLooted": {
                "type": "integer",
                "description": "Amount of gold stolen from the enemy. Scale based on troop count."
            },
            "elixirLooted": {
                "type": "integer",
                "description": "Amount of elixir stolen from the enemy. Scale based on troop count."
            },
            "troopsLost": {
                "type": "integer",
                "description": "Number of troops that died. Must be between 0 and the total troops sent."
            }
        },
        "required": ["report", "goldLooted", "elixirLooted", "troopsLost"]
    })
}
