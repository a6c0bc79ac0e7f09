//! Tests for reset and cancellation

use super::common::*;
use pipeline_demo_sdk::*;

#[tokio::test(start_paused = true)]
async fn test_reset_mid_run_restores_initial_snapshot() {
    let player = standard_player();
    player.start();
    run_for(10_000).await;
    assert_eq!(player.snapshot().phase, Phase::MediaProcessing);

    player.reset();
    assert!(!player.is_running());
    assert_eq!(player.snapshot(), initial_for(&player));

    // Nothing from the cancelled run lands later
    run_for(20_000).await;
    assert_eq!(player.snapshot(), initial_for(&player));
}

#[tokio::test(start_paused = true)]
async fn test_start_then_reset_publishes_nothing() {
    let player = standard_player();
    let mut rx = player.subscribe();

    player.start();
    player.reset();
    run_for(20_000).await;

    assert!(!rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), initial_for(&player));
    assert!(!player.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_reset_is_idempotent() {
    let player = standard_player();
    player.reset();
    let first = player.snapshot();
    player.reset();
    assert_eq!(player.snapshot(), first);
    assert_eq!(first, initial_for(&player));

    player.start();
    run_for(6_000).await;
    player.reset();
    let after_run = player.snapshot();
    player.reset();
    assert_eq!(player.snapshot(), after_run);
    assert_eq!(after_run, initial_for(&player));
}

#[tokio::test(start_paused = true)]
async fn test_initial_snapshot_contents() {
    let player = standard_player();
    let state = player.snapshot();

    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.agents.len(), 4);
    assert!(state
        .agents
        .values()
        .all(|a| a.status == AgentStatus::Idle && a.progress == 0));
    assert!(state.feed.is_empty());
    assert!(state.voice_transcript.is_empty());
    assert_eq!(state.social_delivery, SocialDelivery::PENDING);
}

#[tokio::test(start_paused = true)]
async fn test_restart_after_reset_uses_fresh_schedule() {
    let player = standard_player();
    player.start();
    run_for(8_000).await;

    player.reset();
    assert!(player.start());

    // Old run would have reached quality validation by now
    run_for(5_000).await;
    assert_eq!(player.snapshot().phase, Phase::Transcreation);
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_transitions() {
    let player = standard_player();
    let mut rx = player.subscribe();
    player.start();
    run_for(1).await;
    assert_eq!(rx.borrow_and_update().phase, Phase::Listening);

    drop(player);
    run_for(20_000).await;

    // Sender is gone, and no transition published after the drop
    assert!(rx.has_changed().is_err());
    assert_eq!(rx.borrow().phase, Phase::Listening);
}
