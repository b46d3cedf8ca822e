use oracle_lib::test_helpers::ScriptedNarrator;
use oracle_lib::*;
use std::time::Duration;

// clear; cargo fmt; cargo test -p oracle-lib -- --nocapture
#[tokio::test]
async fn test_resolve_with_narrated_result() {
    let narrator = ScriptedNarrator::new().reply(
        r#"{"report":"The goblins fled.","goldLooted":120,"elixirLooted":80,"troopsLost":3}"#,
    );
    let client = OracleClient::new(narrator);

    let result = client.resolve_attack(10).await;

    assert_eq!(result.report, "The goblins fled.");
    assert_eq!(result.gold_looted, 120);
    assert_eq!(result.elixir_looted, 80);
    assert_eq!(result.troops_lost, 3);

    // 請求帶有兵力與掠奪上限提示
    let requests = client.narrator().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].troops_sent, 10);
    assert_eq!(requests[0].max_loot, 300);
}

#[tokio::test]
async fn test_resolve_clamps_untrusted_values() {
    let narrator = ScriptedNarrator::new().reply(
        r#"{"report":"A massacre.","goldLooted":-10,"elixirLooted":-20,"troopsLost":15}"#,
    );
    let client = OracleClient::new(narrator);

    let result = client.resolve_attack(10).await;

    assert_eq!(result.gold_looted, 0);
    assert_eq!(result.elixir_looted, 0);
    assert_eq!(result.troops_lost, 10);
}

#[tokio::test]
async fn test_transport_failure_falls_back() {
    let client = OracleClient::new(ScriptedNarrator::new().fail("connection reset"));

    let result = client.resolve_attack(10).await;

    assert_eq!(result, CombatResult::fallback(10));
    assert_eq!(result.gold_looted, 100);
    assert_eq!(result.elixir_looted, 100);
    assert_eq!(result.troops_lost, 2);
    assert_eq!(result.report, FALLBACK_REPORT);
}

#[tokio::test]
async fn test_malformed_response_falls_back() {
    let client = OracleClient::new(
        ScriptedNarrator::new()
            .reply("the narrator forgot the format")
            .reply(r#"{"report":"Half an answer.","goldLooted":5}"#),
    );

    assert_eq!(client.resolve_attack(7).await, CombatResult::fallback(7));
    assert_eq!(client.resolve_attack(7).await, CombatResult::fallback(7));
}

#[tokio::test]
async fn test_offline_narrator_always_falls_back() {
    let client = OracleClient::new(OfflineNarrator);

    assert!(matches!(
        client.try_resolve_attack(5).await,
        Err(OracleError::Unavailable(_))
    ));
    assert_eq!(client.resolve_attack(5).await, CombatResult::fallback(5));
}

#[tokio::test(start_paused = true)]
async fn test_slow_narrator_times_out() {
    let narrator = ScriptedNarrator::new()
        .reply(r#"{"report":"Too late.","goldLooted":999,"elixirLooted":999,"troopsLost":0}"#)
        .with_delay(Duration::from_secs(60));
    let client = OracleClient::new(narrator).with_timeout(Duration::from_secs(2));

    assert!(matches!(
        client.try_resolve_attack(10).await,
        Err(OracleError::Timeout(_))
    ));

    let result = client.resolve_attack(10).await;
    assert_eq!(result, CombatResult::fallback(10));
}
