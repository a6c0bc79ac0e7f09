//! Tests for a full uninterrupted run

use super::common::*;
use pipeline_demo_sdk::*;

#[tokio::test(start_paused = true)]
async fn test_full_run_reaches_complete() {
    let player = standard_player();
    assert!(player.start());
    assert!(player.is_running());

    run_for(18_500).await;

    let state = player.snapshot();
    assert_eq!(state.phase, Phase::Complete);
    for agent in AgentName::ALL {
        let record = state.agent(agent).unwrap();
        assert_eq!(record.status, AgentStatus::Complete, "{} not complete", agent);
        assert_eq!(record.progress, 100);
    }
    assert_eq!(state.feed.len(), 17);
    assert_eq!(state.social_delivery.whatsapp, WhatsAppStatus::Delivered);
    assert_eq!(state.social_delivery.instagram, InstagramStatus::Live);
    assert_eq!(state.social_delivery.sharechat, ShareChatStatus::Trending);
    assert_eq!(state.voice_transcript, player.script().voice_transcript);
    assert!(!player.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_phases_published_in_order_once_each() {
    let player = standard_player();
    let seen = record(&player);

    player.start();
    run_for(20_000).await;

    let phases: Vec<Phase> = seen.lock().unwrap().iter().map(|s| s.phase).collect();
    assert_eq!(phases, Phase::SEQUENCE.to_vec());
}

#[tokio::test(start_paused = true)]
async fn test_feed_length_matches_cutoff_per_phase() {
    let player = standard_player();
    let seen = record(&player);

    player.start();
    run_for(20_000).await;

    let expected = [0, 2, 3, 6, 7, 11, 14, 17];
    for state in seen.lock().unwrap().iter() {
        assert_eq!(
            state.feed.len(),
            expected[state.phase.index()],
            "wrong feed length at {}",
            state.phase
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_phase_boundaries_follow_durations() {
    let player = standard_player();
    player.start();

    run_for(1).await;
    assert_eq!(player.snapshot().phase, Phase::Listening);
    assert!(player.snapshot().voice_transcript.is_empty());

    run_for(2_998).await;
    assert_eq!(player.snapshot().phase, Phase::Listening);

    run_for(1).await;
    assert_eq!(player.snapshot().phase, Phase::IntentParsing);
    assert!(!player.snapshot().voice_transcript.is_empty());

    // t = 13000
    run_for(10_000).await;
    let state = player.snapshot();
    assert_eq!(state.phase, Phase::QualityValidation);
    assert_eq!(
        state.agent(AgentName::Supervisor).unwrap().status,
        AgentStatus::Processing
    );
    assert_eq!(state.social_delivery, SocialDelivery::PENDING);

    // t = 15000
    run_for(2_000).await;
    let state = player.snapshot();
    assert_eq!(state.phase, Phase::Distribution);
    assert_eq!(state.social_delivery.whatsapp, WhatsAppStatus::Sent);
    assert!(player.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_start_while_running_is_noop() {
    let player = standard_player();
    let seen = record(&player);

    assert!(player.start());
    run_for(4_000).await;
    assert_eq!(player.snapshot().phase, Phase::IntentParsing);

    assert!(!player.start());
    assert_eq!(player.snapshot().phase, Phase::IntentParsing);

    // The first schedule still finishes at 18.5s
    run_for(14_500).await;
    assert_eq!(player.snapshot().phase, Phase::Complete);

    run_for(10_000).await;
    let phases: Vec<Phase> = seen.lock().unwrap().iter().map(|s| s.phase).collect();
    assert_eq!(phases, Phase::SEQUENCE.to_vec());
}

#[tokio::test(start_paused = true)]
async fn test_social_delivery_never_regresses() {
    let player = standard_player();
    let seen = record(&player);

    player.start();
    run_for(20_000).await;

    let states = seen.lock().unwrap();
    for pair in states.windows(2) {
        let (a, b) = (&pair[0].social_delivery, &pair[1].social_delivery);
        assert!(b.whatsapp.rank() >= a.whatsapp.rank());
        assert!(b.instagram.rank() >= a.instagram.rank());
        assert!(b.sharechat.rank() >= a.sharechat.rank());
    }
}

#[tokio::test(start_paused = true)]
async fn test_restart_after_complete() {
    let player = standard_player();
    player.start();
    run_for(18_500).await;
    assert!(!player.is_running());

    assert!(player.start());
    assert_eq!(player.snapshot(), initial_for(&player));

    run_for(18_500).await;
    assert_eq!(player.snapshot().phase, Phase::Complete);
}
