//! 測試用敘事服務

use crate::*;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Fail(String),
}

/// 依序回放預先排好的回應，並記錄收到的請求
///
/// 腳本用盡後回報無法使用。
#[derive(Debug, Default)]
pub struct ScriptedNarrator {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<BattleRequest>>,
    delay: Option<Duration>,
}

impl ScriptedNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Reply::Text(text.into()))
    }

    pub fn fail(self, reason: impl Into<String>) -> Self {
        self.push(Reply::Fail(reason.into()))
    }

    /// 每次回應前先等待，用來測試逾時
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<BattleRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(self, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(reply);
        self
    }
}

impl Narrator for ScriptedNarrator {
    async fn narrate(&self, request: &BattleRequest) -> Result<String, OracleError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail(reason)) => Err(OracleError::Transport(reason)),
            None => Err(OracleError::Unavailable("腳本已用盡".to_string())),
        }
    }
}
