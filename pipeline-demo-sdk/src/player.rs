//! Timeline player: replays the phase sequence on timers
//!
//! `start()` spawns one tokio task per phase, each sleeping until its offset
//! from the start instant. Every task handle is kept so `reset()` can abort
//! all outstanding work before it returns. A task that already woke up but
//! has not published yet is stopped by the run generation check, which runs
//! under the same lock as `reset()`.
//!
//! Deadlines that land in the same timer tick may wake their tasks in any
//! order. Whichever task takes the lock first publishes every phase up to its
//! own, in sequence; the tasks behind it find their phase already published.
//! Each transition goes out on a `watch` channel (latest snapshot only) and
//! on a `broadcast` channel (every transition, for consumers that must not
//! miss one).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Local;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::lookup::snapshot_for;
use crate::script::PipelineScript;
use crate::timeline::Timeline;
use crate::types::{Phase, PipelineState};

/// Room for more than one full run of transitions per lagging receiver
const TRANSITION_BUFFER: usize = 32;

struct Control {
    /// Bumped on every reset; transitions from an older run are dropped
    generation: u64,
    running: bool,
    /// Latest phase published in this generation
    published: Phase,
    pending: Vec<JoinHandle<()>>,
}

impl Control {
    fn cancel_pending(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}

fn lock(control: &Mutex<Control>) -> MutexGuard<'_, Control> {
    control.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct TimelinePlayer {
    script: Arc<PipelineScript>,
    timeline: Timeline,
    runtime: Handle,
    state_tx: Arc<watch::Sender<PipelineState>>,
    transitions_tx: broadcast::Sender<PipelineState>,
    control: Arc<Mutex<Control>>,
}

impl TimelinePlayer {
    pub fn new(script: Arc<PipelineScript>, timeline: Timeline, runtime: Handle) -> Self {
        let (state_tx, _) = watch::channel(PipelineState::initial(&script));
        let (transitions_tx, _) = broadcast::channel(TRANSITION_BUFFER);

        Self {
            script,
            timeline,
            runtime,
            state_tx: Arc::new(state_tx),
            transitions_tx,
            control: Arc::new(Mutex::new(Control {
                generation: 0,
                running: false,
                published: Phase::Idle,
                pending: Vec::new(),
            })),
        }
    }

    /// Player for the built-in script and timings on the current runtime
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn standard() -> Self {
        Self::new(
            Arc::new(PipelineScript::standard()),
            Timeline::default(),
            Handle::current(),
        )
    }

    /// Begin a run. Returns `false` without touching the schedule if a run
    /// is already in flight.
    pub fn start(&self) -> bool {
        let mut control = lock(&self.control);
        if control.running {
            debug!("start ignored, run already in progress");
            return false;
        }

        self.reset_locked(&mut control);
        control.running = true;
        let generation = control.generation;
        let origin = Instant::now();

        for phase in Phase::SEQUENCE {
            let deadline = origin + self.timeline.offset(phase);
            let script = Arc::clone(&self.script);
            let outlets = Outlets {
                state_tx: Arc::clone(&self.state_tx),
                transitions_tx: self.transitions_tx.clone(),
            };
            let control_ref = Arc::clone(&self.control);

            let handle = self.runtime.spawn(async move {
                sleep_until(deadline).await;
                publish(&control_ref, &outlets, &script, generation, phase);
            });
            control.pending.push(handle);
        }

        info!(
            generation,
            total_ms = self.timeline.total().as_millis() as u64,
            "pipeline run started"
        );
        true
    }

    /// Cancel every scheduled transition and restore the initial snapshot
    pub fn reset(&self) {
        let mut control = lock(&self.control);
        let was_running = control.running;
        self.reset_locked(&mut control);
        if was_running {
            info!(generation = control.generation, "pipeline run cancelled");
        }
    }

    fn reset_locked(&self, control: &mut Control) {
        control.cancel_pending();
        control.generation += 1;
        control.running = false;
        control.published = Phase::Idle;

        let initial = PipelineState::initial(&self.script);
        self.state_tx.send_if_modified(|state| {
            if *state == initial {
                false
            } else {
                *state = initial;
                true
            }
        });
    }

    pub fn is_running(&self) -> bool {
        lock(&self.control).running
    }

    /// Copy of the latest published snapshot
    pub fn snapshot(&self) -> PipelineState {
        self.state_tx.borrow().clone()
    }

    /// Receiver notified on every published snapshot
    ///
    /// Do not hold a `borrow()` of the receiver across calls to `start` or
    /// `reset`; both replace the value under the channel's write lock.
    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.state_tx.subscribe()
    }

    /// Receiver for every transition published after this call, in phase
    /// order
    ///
    /// Unlike [`subscribe`](Self::subscribe), nothing is coalesced; a
    /// receiver that falls more than a few runs behind sees
    /// `RecvError::Lagged`. Resets are not sent here.
    pub fn transitions(&self) -> broadcast::Receiver<PipelineState> {
        self.transitions_tx.subscribe()
    }

    pub fn script(&self) -> &PipelineScript {
        &self.script
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

impl Drop for TimelinePlayer {
    fn drop(&mut self) {
        lock(&self.control).cancel_pending();
    }
}

/// Channels a phase task publishes to
struct Outlets {
    state_tx: Arc<watch::Sender<PipelineState>>,
    transitions_tx: broadcast::Sender<PipelineState>,
}

fn publish(
    control: &Mutex<Control>,
    outlets: &Outlets,
    script: &PipelineScript,
    generation: u64,
    phase: Phase,
) {
    let mut control = lock(control);
    if control.generation != generation {
        debug!(%phase, generation, "dropping transition from cancelled run");
        return;
    }
    if phase <= control.published {
        debug!(%phase, "transition already published by an earlier task");
        return;
    }

    // Phases whose timers share this tick but have not taken the lock yet
    let from = control.published;
    let due = Phase::SEQUENCE
        .into_iter()
        .filter(|p| *p > from && *p <= phase);
    for next in due {
        let snapshot = snapshot_for(script, next, Local::now());
        let feed_len = snapshot.feed.len();
        // No receivers is fine; the watch channel still holds the value
        let _ = outlets.transitions_tx.send(snapshot.clone());
        outlets.state_tx.send_replace(snapshot);
        control.published = next;
        debug!(phase = %next, feed_len, "phase published");
    }

    if phase.is_terminal() {
        control.running = false;
        // Any task still holding a handle finds its phase already published
        control.pending.clear();
    }
}
