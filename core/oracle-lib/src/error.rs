use std::time::Duration;
use thiserror::Error;

/// 神諭請求失敗的原因，只在客戶端內部流通
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("敘事服務無法使用: {0}")]
    Unavailable(String),

    #[error("敘事服務傳輸失敗: {0}")]
    Transport(String),

    #[error("敘事服務逾時（{0:?}）")]
    Timeout(Duration),

    #[error("戰報解析失敗: {0}")]
    Parse(#[from] serde_json::Error),
}
