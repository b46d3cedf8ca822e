use crate::*;

/// 外部敘事服務的抽象
///
/// 實作者只負責傳輸：送出請求並回傳原始文字，解析與夾限由 [`OracleClient`] 處理。
pub trait Narrator {
    fn narrate(
        &self,
        request: &BattleRequest,
    ) -> impl Future<Output = Result<String, OracleError>> + Send;
}

/// 未設定敘事服務時使用，永遠回報無法使用，讓每場戰鬥都走備援結果
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineNarrator;

impl Narrator for OfflineNarrator {
    async fn narrate(&self, _request: &BattleRequest) -> Result<String, OracleError> {
        Err(OracleError::Unavailable("未設定敘事服務".to_string()))
    }
}
