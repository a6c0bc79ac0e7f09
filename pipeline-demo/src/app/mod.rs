//! Dashboard state and input handling
//!
//! The app owns the tokio runtime that drives the timeline player, the same
//! way the terminal loop stays synchronous and polls shared state every frame.

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use pipeline_demo_sdk::{Phase, PipelineScript, PipelineState, Timeline, TimelinePlayer};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tracing::debug;

mod notifications;
mod views;
pub use notifications::{Notification, NotificationLevel, NotificationManager};
pub use views::View;

pub struct App {
    pub player: TimelinePlayer,
    /// Latest snapshot seen by the render loop
    pub state: PipelineState,
    pub running: bool,
    pub notifications: NotificationManager,
    pub should_quit: bool,
    pub view: View,
    run_started_at: Option<Instant>,
    run_finished_in: Option<Duration>,
    state_rx: watch::Receiver<PipelineState>,

    // Declared last so the player's tasks are aborted before the runtime shuts down
    pub tokio_runtime: tokio::runtime::Runtime,
}

impl App {
    pub fn new(timeline: Timeline) -> Result<Self> {
        let tokio_runtime =
            tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
        let player = TimelinePlayer::new(
            Arc::new(PipelineScript::standard()),
            timeline,
            tokio_runtime.handle().clone(),
        );
        let mut state_rx = player.subscribe();
        let state = state_rx.borrow_and_update().clone();

        Ok(Self {
            player,
            state,
            running: false,
            notifications: NotificationManager::new(),
            should_quit: false,
            view: View::Pipeline,
            run_started_at: None,
            run_finished_in: None,
            state_rx,
            tokio_runtime,
        })
    }

    pub fn script(&self) -> &PipelineScript {
        self.player.script()
    }

    /// Pull the latest snapshot from the player, called once per frame
    pub fn poll(&mut self) {
        self.notifications.cleanup_expired();
        self.running = self.player.is_running();

        if !self.state_rx.has_changed().unwrap_or(false) {
            return;
        }

        let next = self.state_rx.borrow_and_update().clone();
        if next.phase != self.state.phase {
            debug!(from = %self.state.phase, to = %next.phase, "dashboard saw phase change");
            if next.phase.is_terminal() {
                self.run_finished_in = self.run_started_at.map(|t| t.elapsed());
                self.notifications.success(format!(
                    "Pipeline complete: {} feed entries, est. ₹{:.2}",
                    next.feed.len(),
                    self.script().estimated_cost_inr()
                ));
            }
        }
        self.state = next;
    }

    pub fn start(&mut self) {
        if self.player.start() {
            self.run_started_at = Some(Instant::now());
            self.run_finished_in = None;
            self.notifications.info("Pipeline started");
        } else {
            self.notifications.warning("Pipeline is already running");
        }
        self.running = self.player.is_running();
    }

    pub fn reset(&mut self) {
        let was_idle = self.state.phase == Phase::Idle && !self.running;
        self.player.reset();
        self.run_started_at = None;
        self.run_finished_in = None;
        self.running = false;
        if !was_idle {
            self.notifications.info("Pipeline reset");
        }
        self.poll();
    }

    /// Time since `start()`, frozen once the run completes
    pub fn elapsed(&self) -> Option<Duration> {
        self.run_finished_in
            .or_else(|| self.run_started_at.map(|t| t.elapsed()))
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => {
                self.start();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset();
            }
            KeyCode::Tab | KeyCode::Right => self.next_view(),
            KeyCode::BackTab | KeyCode::Left => self.previous_view(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(view) = View::from_digit(c) {
                    self.view = view;
                }
            }
            _ => {}
        }
    }
}
