//! Common helpers for player tests

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pipeline_demo_sdk::{PipelineScript, PipelineState, Timeline, TimelinePlayer};
use tokio::runtime::Handle;

/// Player with the built-in script on the test runtime
pub fn standard_player() -> TimelinePlayer {
    TimelinePlayer::standard()
}

pub fn player_with(timeline: Timeline) -> TimelinePlayer {
    TimelinePlayer::new(Arc::new(PipelineScript::standard()), timeline, Handle::current())
}

/// Let `ms` of paused time pass, then give woken tasks a chance to run
pub async fn run_for(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    settle().await;
}

pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// Collect every snapshot the player publishes from now on
pub fn record(player: &TimelinePlayer) -> Arc<Mutex<Vec<PipelineState>>> {
    let mut rx = player.subscribe();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            sink.lock().unwrap().push(state);
        }
    });

    seen
}

pub fn initial_for(player: &TimelinePlayer) -> PipelineState {
    PipelineState::initial(player.script())
}
