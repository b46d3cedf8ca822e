//! 無介面的村莊模擬：跑幾個回合、建造、訓練並出征一次
//!
//! 用法：`village_sim [session.toml]`

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use village_core::{BuildingKind, OfflineNarrator, Position, SessionConfig, VillageSession};

const SIMULATED_TICKS: u32 = 5;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => SessionConfig::load(&path)
            .with_context(|| format!("無法載入設定 {}", path.display()))?,
        None => SessionConfig::default(),
    };

    let mut session = VillageSession::new(&config, OfflineNarrator);
    session.build(BuildingKind::Collector, Position::new(2, 2))?;
    session.build(BuildingKind::Mine, Position::new(3, 3))?;
    session.build(BuildingKind::Barracks, Position::new(1, 1))?;

    let mut interval = tokio::time::interval(session.tick_interval());
    for _ in 0..SIMULATED_TICKS {
        interval.tick().await;
        session.tick();
        let state = session.state();
        info!(
            tick = session.ticks(),
            gold = state.display_gold(),
            elixir = state.display_elixir(),
            "生產"
        );
    }

    let trained = session.train()?;
    info!(trained, "訓練士兵");

    let result = session.attack().await?;
    info!(report = %result.report, "戰報");

    let state = session.state();
    info!(
        gold = state.display_gold(),
        elixir = state.display_elixir(),
        troops = state.troops,
        buildings = state.grid.len(),
        "模擬結束"
    );
    Ok(())
}
