use crate::*;
use serde::{Deserialize, Serialize};

/// 戰報缺漏時的預設敘述
pub const DEFAULT_REPORT: &str = "The battle was a blur of chaos!";

/// 備援戰報
pub const FALLBACK_REPORT: &str = "The battle was simulated offline due to a mystical interference (API error). Your troops fought bravely.";

/// 備援時每名士兵帶回的金幣與聖水
pub const FALLBACK_LOOT_PER_TROOP: Loot = 10;

/// 備援陣亡比例 1/5（即 20%，無條件捨去）
pub const FALLBACK_LOSS_DIVISOR: TroopCount = 5;

/// 一場戰鬥的結算，只套用到遊戲狀態一次
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatResult {
    pub report: String,
    pub gold_looted: Loot,
    pub elixir_looted: Loot,
    pub troops_lost: TroopCount,
}

/// 敘事服務的原始回應，數值尚未夾限
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCombatResult {
    #[serde(default)]
    report: Option<String>,
    gold_looted: f64,
    elixir_looted: f64,
    troops_lost: f64,
}

// 服務可能回傳 `120.0` 或超出整數範圍的值，一律以浮點讀入後捨去小數
fn floor_non_negative(value: f64) -> f64 {
    value.floor().max(0.0)
}

impl RawCombatResult {
    fn clamp(self, troops_sent: TroopCount) -> CombatResult {
        let report = self
            .report
            .filter(|report| !report.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REPORT.to_string());
        let troops_lost = floor_non_negative(self.troops_lost).min(f64::from(troops_sent));

        // `as` 轉換在超出範圍時飽和
        CombatResult {
            report,
            gold_looted: floor_non_negative(self.gold_looted) as Loot,
            elixir_looted: floor_non_negative(self.elixir_looted) as Loot,
            troops_lost: troops_lost as TroopCount,
        }
    }
}

impl CombatResult {
    /// 解析敘事服務回傳的文字並夾限數值
    ///
    /// 掠奪量不得為負，陣亡數介於 0 與出兵數之間；
    /// 任何必要數值欄位缺漏或型別錯誤都視為解析失敗。
    pub fn from_response(text: &str, troops_sent: TroopCount) -> Result<Self, OracleError> {
        let raw: RawCombatResult = serde_json::from_str(strip_code_fence(text))?;
        Ok(raw.clamp(troops_sent))
    }

    /// 神諭失敗時的固定結果
    pub fn fallback(troops_sent: TroopCount) -> Self {
        let loot = Loot::from(troops_sent) * FALLBACK_LOOT_PER_TROOP;
        Self {
            report: FALLBACK_REPORT.to_string(),
            gold_looted: loot,
            elixir_looted: loot,
            troops_lost: troops_sent / FALLBACK_LOSS_DIVISOR,
        }
    }
}

// 生成式服務偶爾會把 JSON 包在 markdown 區塊中
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_for_ten_troops() {
        let result = CombatResult::fallback(10);
        assert_eq!(result.gold_looted, 100);
        assert_eq!(result.elixir_looted, 100);
        assert_eq!(result.troops_lost, 2);
        assert_eq!(result.report, FALLBACK_REPORT);
    }

    #[test]
    fn test_fallback_loss_rounds_down() {
        assert_eq!(CombatResult::fallback(1).troops_lost, 0);
        assert_eq!(CombatResult::fallback(4).troops_lost, 0);
        assert_eq!(CombatResult::fallback(5).troops_lost, 1);
        assert_eq!(CombatResult::fallback(14).troops_lost, 2);
    }

    #[test]
    fn test_troops_lost_clamped_to_troops_sent() {
        let text = r#"{"report":"Ouch.","goldLooted":40,"elixirLooted":30,"troopsLost":15}"#;
        let result = CombatResult::from_response(text, 10).expect("解析應成功");
        assert_eq!(result.troops_lost, 10);
        assert_eq!(result.gold_looted, 40);
        assert_eq!(result.elixir_looted, 30);
        assert_eq!(result.report, "Ouch.");
    }

    #[test]
    fn test_negative_values_clamped_to_zero() {
        let text = r#"{"report":"Bad day.","goldLooted":-50,"elixirLooted":-1,"troopsLost":-3}"#;
        let result = CombatResult::from_response(text, 10).expect("解析應成功");
        assert_eq!(result.gold_looted, 0);
        assert_eq!(result.elixir_looted, 0);
        assert_eq!(result.troops_lost, 0);
    }

    #[test]
    fn test_missing_report_uses_default() {
        let text = r#"{"goldLooted":1,"elixirLooted":2,"troopsLost":0}"#;
        let result = CombatResult::from_response(text, 3).expect("解析應成功");
        assert_eq!(result.report, DEFAULT_REPORT);

        let text = r#"{"report":"  ","goldLooted":1,"elixirLooted":2,"troopsLost":0}"#;
        let result = CombatResult::from_response(text, 3).expect("解析應成功");
        assert_eq!(result.report, DEFAULT_REPORT);
    }

    #[test]
    fn test_missing_numeric_field_is_error() {
        let text = r#"{"report":"No loot field.","elixirLooted":2,"troopsLost":0}"#;
        assert!(matches!(
            CombatResult::from_response(text, 3),
            Err(OracleError::Parse(_))
        ));
        assert!(CombatResult::from_response("not json", 3).is_err());
        assert!(CombatResult::from_response("", 3).is_err());
    }

    #[test]
    fn test_code_fence_is_stripped() {
        let text = "```json\n{\"goldLooted\":5,\"elixirLooted\":6,\"troopsLost\":1}\n```";
        let result = CombatResult::from_response(text, 3).expect("解析應成功");
        assert_eq!(result.gold_looted, 5);
        assert_eq!(result.troops_lost, 1);
    }

    #[test]
    fn test_float_values_are_floored() {
        let text = r#"{"report":"Won.","goldLooted":120.0,"elixirLooted":80.9,"troopsLost":2.5}"#;
        let result = CombatResult::from_response(text, 10).expect("解析應成功");
        assert_eq!(result.report, "Won.");
        assert_eq!(result.gold_looted, 120);
        assert_eq!(result.elixir_looted, 80);
        assert_eq!(result.troops_lost, 2);
    }

    #[test]
    fn test_huge_loot_saturates() {
        let text = r#"{"goldLooted":18446744073709551615,"elixirLooted":1e30,"troopsLost":1e20}"#;
        let result = CombatResult::from_response(text, 7).expect("解析應成功");
        assert_eq!(result.gold_looted, u64::MAX);
        assert_eq!(result.elixir_looted, u64::MAX);
        assert_eq!(result.troops_lost, 7);
        assert_eq!(result.report, DEFAULT_REPORT);
    }
}
