//! 錯誤處理系統
//!
//! 所有引擎錯誤都以值回傳，發生錯誤時遊戲狀態保持不變。

use crate::alias::{Amount, BuildingID, Coord};
use crate::core_types::{BuildingKind, Resource};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Economy(#[from] EconomyError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// 網格錯誤
#[derive(Debug, ThisError, PartialEq)]
pub enum GridError {
    #[error("位置超出網格邊界: ({x}, {y}) 邊界 {size}")]
    OutOfBounds { x: Coord, y: Coord, size: Coord },
    #[error("位置 ({x}, {y}) 已被 {occupant} 佔據")]
    CellOccupied {
        x: Coord,
        y: Coord,
        occupant: BuildingKind,
    },
    #[error("建築不存在: {id}")]
    NotFound { id: BuildingID },
}

/// 資源與建造錯誤
#[derive(Debug, ThisError, PartialEq)]
pub enum EconomyError {
    #[error("{resource} 不足: 需要 {required}，目前 {available:.0}")]
    InsufficientFunds {
        resource: Resource,
        required: Amount,
        available: Amount,
    },
    #[error("{resource} 金額無效: {amount}")]
    InvalidAmount { resource: Resource, amount: Amount },
    #[error("{kind} 無法建造")]
    NotConstructible { kind: BuildingKind },
    #[error("需要兵營才能訓練士兵")]
    NoBarracks,
}

/// 遊戲進程錯誤
#[derive(Debug, ThisError, PartialEq)]
pub enum SessionError {
    #[error("沒有士兵可以出征")]
    NoTroops,
    #[error("已有一場進攻正在進行")]
    AttackInProgress,
    #[error("票券不屬於這場進攻")]
    ForeignTicket,
}

/// 設定載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("讀取 {path} 失敗: {reason}")]
    ReadError { path: String, reason: String },
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
    #[error("{format} 序列化失敗: {reason}")]
    SerializeError { format: String, reason: String },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| e.context(context))
    }
}
