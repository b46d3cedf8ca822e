use crate::*;
use std::time::Duration;
use tracing::{debug, warn};

/// 神諭請求的預設逾時
pub const DEFAULT_ORACLE_TIMEOUT: Duration = Duration::from_secs(15);

/// 戰鬥神諭客戶端
///
/// 狀態流程：閒置 → 請求中 → 已解決；請求失敗時改走備援結果。
/// 對外永遠回傳一份合法的 [`CombatResult`]。
#[derive(Debug)]
pub struct OracleClient<N> {
    narrator: N,
    timeout: Duration,
}

impl<N: Narrator> OracleClient<N> {
    pub fn new(narrator: N) -> Self {
        Self {
            narrator,
            timeout: DEFAULT_ORACLE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    /// 解決一場進攻，失敗時吸收錯誤並回傳備援結果
    pub async fn resolve_attack(&self, troops_sent: TroopCount) -> CombatResult {
        match self.try_resolve_attack(troops_sent).await {
            Ok(result) => {
                debug!(
                    troops_sent,
                    gold = result.gold_looted,
                    elixir = result.elixir_looted,
                    lost = result.troops_lost,
                    "戰鬥由敘事服務解決"
                );
                result
            }
            Err(err) => {
                warn!(troops_sent, error = %err, "戰鬥模擬失敗，改用備援結果");
                CombatResult::fallback(troops_sent)
            }
        }
    }

    /// 只走請求路徑，錯誤原樣回傳
    pub async fn try_resolve_attack(
        &self,
        troops_sent: TroopCount,
    ) -> Result<CombatResult, OracleError> {
        let request = BattleRequest::new(troops_sent);
        let text = tokio::time::timeout(self.timeout, self.narrator.narrate(&request))
            .await
            .map_err(|_| OracleError::Timeout(self.timeout))??;
        CombatResult::from_response(&text, troops_sent)
    }
}
