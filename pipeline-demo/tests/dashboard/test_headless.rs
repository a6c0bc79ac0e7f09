//! Tests for the headless JSON-lines replay

use std::sync::Arc;

use pipeline_demo::headless::replay;
use pipeline_demo_sdk::{
    InstagramStatus, Phase, PipelineScript, PipelineState, Timeline, TimelinePlayer,
};
use tokio::runtime::Handle;

fn player() -> TimelinePlayer {
    TimelinePlayer::new(
        Arc::new(PipelineScript::standard()),
        Timeline::default(),
        Handle::current(),
    )
}

#[tokio::test(start_paused = true)]
async fn test_replay_writes_one_line_per_phase() {
    let player = player();
    let mut out = Vec::new();

    let written = replay(&player, &mut out).await.unwrap();
    assert_eq!(written, Phase::SEQUENCE.len());

    let text = String::from_utf8(out).unwrap();
    let states: Vec<PipelineState> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let phases: Vec<Phase> = states.iter().map(|s| s.phase).collect();
    assert_eq!(phases, Phase::SEQUENCE.to_vec());

    let last = states.last().unwrap();
    assert_eq!(last.feed.len(), 17);
    assert_eq!(last.social_delivery.instagram, InstagramStatus::Live);
    assert!(!player.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_replay_lines_use_wire_names() {
    let player = player();
    let mut out = Vec::new();
    replay(&player, &mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
    assert_eq!(first["phase"], "listening");
    assert_eq!(first["agents"]["supervisor"]["status"], "processing");
    assert_eq!(first["social_delivery"]["whatsapp"], "pending");
}

#[tokio::test(start_paused = true)]
async fn test_replay_at_top_speed_keeps_every_phase() {
    let player = TimelinePlayer::new(
        Arc::new(PipelineScript::standard()),
        Timeline::default().with_speed(2000.0).unwrap(),
        Handle::current(),
    );
    let mut out = Vec::new();

    let written = replay(&player, &mut out).await.unwrap();
    assert_eq!(written, 7);

    let text = String::from_utf8(out).unwrap();
    let phases: Vec<Phase> = text
        .lines()
        .map(|line| serde_json::from_str::<PipelineState>(line).unwrap().phase)
        .collect();
    assert_eq!(phases, Phase::SEQUENCE.to_vec());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_replay_on_worker_threads_ends_at_complete() {
    for _ in 0..20 {
        let player = TimelinePlayer::new(
            Arc::new(PipelineScript::standard()),
            Timeline::default().with_speed(2000.0).unwrap(),
            Handle::current(),
        );
        let mut out = Vec::new();
        assert_eq!(replay(&player, &mut out).await.unwrap(), 7);

        let text = String::from_utf8(out).unwrap();
        let last: PipelineState = serde_json::from_str(text.lines().last().unwrap()).unwrap();
        assert_eq!(last.phase, Phase::Complete);
        assert!(!player.is_running());
    }
}
