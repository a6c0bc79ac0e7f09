//! Tests for players built from custom timelines

use super::common::*;
use pipeline_demo_sdk::*;

#[tokio::test(start_paused = true)]
async fn test_double_speed_finishes_in_half_the_time() {
    let player = player_with(Timeline::default().with_speed(2.0).unwrap());
    player.start();

    run_for(9_249).await;
    assert_eq!(player.snapshot().phase, Phase::Distribution);

    run_for(1).await;
    assert_eq!(player.snapshot().phase, Phase::Complete);
    assert!(!player.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_yaml_timeline_changes_boundaries() {
    let timeline = Timeline::from_yaml("durations_ms:\n  listening: 500\n").unwrap();
    let player = player_with(timeline);
    player.start();

    run_for(500).await;
    assert_eq!(player.snapshot().phase, Phase::IntentParsing);
    assert_eq!(player.timeline().total().as_millis(), 16_000);
}

#[tokio::test(start_paused = true)]
async fn test_transitions_keep_every_phase_at_top_speed() {
    let player = player_with(Timeline::default().with_speed(2000.0).unwrap());
    let mut transitions = player.transitions();
    let mut rx = player.subscribe();
    player.start();

    // A watch receiver that only looks once sees just the latest phase
    run_for(20).await;
    assert_eq!(rx.borrow_and_update().phase, Phase::Complete);

    let mut phases = Vec::new();
    while let Ok(state) = transitions.try_recv() {
        phases.push(state.phase);
    }
    assert_eq!(phases, Phase::SEQUENCE.to_vec());
}
