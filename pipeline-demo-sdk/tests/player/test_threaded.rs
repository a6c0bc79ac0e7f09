//! Tests on a multi-threaded runtime with real time
//!
//! At the fastest accepted speed several deadlines fall into neighbouring
//! timer ticks, so worker threads race to publish.

use std::time::Duration;

use super::common::*;
use pipeline_demo_sdk::*;
use tokio::sync::broadcast::error::RecvError;

const RUNS: usize = 50;

/// Fastest speed the default durations allow
fn fastest_timeline() -> Timeline {
    Timeline::default().with_speed(2000.0).unwrap()
}

async fn next_transition(rx: &mut tokio::sync::broadcast::Receiver<PipelineState>) -> Phase {
    let received = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("transition did not arrive");
    match received {
        Ok(state) => state.phase,
        Err(RecvError::Lagged(n)) => panic!("transition receiver lagged by {}", n),
        Err(RecvError::Closed) => panic!("transition channel closed"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_fast_runs_end_complete_on_worker_threads() {
    for run in 0..RUNS {
        let player = player_with(fastest_timeline());
        let mut transitions = player.transitions();
        assert!(player.start());

        let mut phases = Vec::new();
        loop {
            let phase = next_transition(&mut transitions).await;
            phases.push(phase);
            if phase.is_terminal() {
                break;
            }
        }
        assert_eq!(phases, Phase::SEQUENCE.to_vec(), "run {}", run);

        // Stragglers from the same run must not overwrite the terminal state
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(player.snapshot().phase, Phase::Complete, "run {}", run);
        assert!(!player.is_running(), "run {}", run);
        assert!(transitions.try_recv().is_err(), "run {}", run);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_restart_after_fast_run_repeats_sequence() {
    let player = player_with(fastest_timeline());
    let mut transitions = player.transitions();

    for _ in 0..3 {
        assert!(player.start());
        let mut phases = Vec::new();
        while phases.last().map_or(true, |p: &Phase| !p.is_terminal()) {
            phases.push(next_transition(&mut transitions).await);
        }
        assert_eq!(phases, Phase::SEQUENCE.to_vec());
        assert!(!player.is_running());
    }
}
