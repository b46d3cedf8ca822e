//! 遊戲進程
//!
//! 持有唯一的可變 [`GameState`]，把純函式的結果換上去。
//! `&mut self` 保證同一時間只有一個寫入者；進攻以 [`AttackTicket`] 佔用唯一的請求槽，
//! 票券存活期間其他進攻會被拒絕，票券被丟棄（包含請求被取消）時槽位自動釋放。

use crate::alias::{BuildingID, Level, TroopCount};
use crate::config::SessionConfig;
use crate::core_types::{BuildingKind, GameState, Position};
use crate::error::{GridError, Result, SessionError};
use crate::logic::{combat, construction, production, troops};
use oracle_lib::{CombatResult, Narrator, OracleClient};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::{debug, info};

/// 進行中的進攻
#[derive(Debug)]
#[must_use = "丟棄票券會放棄這次進攻"]
pub struct AttackTicket {
    troops_sent: TroopCount,
    _slot: Arc<()>,
}

impl AttackTicket {
    pub fn troops_sent(&self) -> TroopCount {
        self.troops_sent
    }
}

#[derive(Debug)]
pub struct VillageSession<N> {
    state: GameState,
    oracle: OracleClient<N>,
    tick_interval: Duration,
    ticks: u64,
    attack_slot: Weak<()>,
}

impl<N: Narrator> VillageSession<N> {
    pub fn new(config: &SessionConfig, narrator: N) -> Self {
        info!(
            gold = config.initial_gold,
            elixir = config.initial_elixir,
            "開始新村莊"
        );
        Self::with_state(
            config,
            GameState::new_village(config.initial_gold, config.initial_elixir),
            narrator,
        )
    }

    pub fn with_state(config: &SessionConfig, state: GameState, narrator: N) -> Self {
        Self {
            state,
            oracle: OracleClient::new(narrator).with_timeout(config.oracle_timeout()),
            tick_interval: config.tick_interval(),
            ticks: 0,
            attack_slot: Weak::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn oracle(&self) -> &OracleClient<N> {
        &self.oracle
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_attacking(&self) -> bool {
        self.attack_slot.strong_count() > 0
    }

    /// 執行一回合生產，回傳狀態是否改變
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        match production::tick(&self.state) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }

    pub fn build(&mut self, kind: BuildingKind, pos: Position) -> Result<BuildingID> {
        let (next, id) = construction::build_with_id(&self.state, kind, pos)?;
        debug!(%kind, x = pos.x, y = pos.y, id, "建造完成");
        self.state = next;
        Ok(id)
    }

    pub fn upgrade(&mut self, id: BuildingID) -> Result<Level> {
        let next = construction::upgrade(&self.state, id)?;
        let level = next.grid.level_of(id).ok_or(GridError::NotFound { id })?;
        debug!(id, level, "升級完成");
        self.state = next;
        Ok(level)
    }

    /// 回傳這次訓練的士兵數
    pub fn train(&mut self) -> Result<TroopCount> {
        let next = troops::train(&self.state)?;
        let trained = next.troops - self.state.troops;
        debug!(trained, total = next.troops, "訓練完成");
        self.state = next;
        Ok(trained)
    }

    /// 佔用進攻槽位並派出目前所有士兵
    pub fn begin_attack(&mut self) -> Result<AttackTicket> {
        if self.is_attacking() {
            return Err(SessionError::AttackInProgress.into());
        }
        if self.state.troops == 0 {
            return Err(SessionError::NoTroops.into());
        }

        let slot = Arc::new(());
        self.attack_slot = Arc::downgrade(&slot);
        debug!(troops = self.state.troops, "出征");
        Ok(AttackTicket {
            troops_sent: self.state.troops,
            _slot: slot,
        })
    }

    /// 將結算套用到目前狀態（請求期間可能已經過多個回合）並釋放槽位
    ///
    /// 只接受本進程目前槽位發出的票券，其他票券被拒絕且不修改狀態。
    pub fn finish_attack(&mut self, ticket: AttackTicket, result: &CombatResult) -> Result<()> {
        if !Weak::ptr_eq(&self.attack_slot, &Arc::downgrade(&ticket._slot)) {
            return Err(SessionError::ForeignTicket.into());
        }
        self.state = combat::apply_combat_result(&self.state, result);
        info!(
            troops_sent = ticket.troops_sent,
            gold = result.gold_looted,
            elixir = result.elixir_looted,
            lost = result.troops_lost,
            "戰鬥結束"
        );
        Ok(())
    }

    pub async fn attack(&mut self) -> Result<CombatResult> {
        let ticket = self.begin_attack()?;
        let result = self.oracle.resolve_attack(ticket.troops_sent()).await;
        self.finish_attack(ticket, &result)?;
        Ok(result)
    }
}
