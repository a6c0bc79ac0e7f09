//! Command-line options and timeline configuration

use anyhow::{Context, Result};
use clap::Parser;
use pipeline_demo_sdk::Timeline;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pipeline-demo",
    version,
    about = "Replays the simulated voice-to-distribution agent pipeline"
)]
pub struct Args {
    /// Playback speed multiplier (2.0 replays twice as fast)
    #[arg(short = 's', long)]
    pub speed: Option<f64>,

    /// YAML file overriding phase durations and speed
    #[arg(short = 't', long, value_name = "FILE")]
    pub timeline: Option<PathBuf>,

    /// Replay once without the dashboard, printing each snapshot as a JSON line
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub headless: bool,

    /// Start the pipeline as soon as the dashboard opens
    #[arg(short = 'a', long, action = clap::ArgAction::SetTrue)]
    pub autostart: bool,

    /// Write logs to this file while the dashboard owns the terminal
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Resolve the timeline: file first, then `--speed` on top
    pub fn timeline(&self) -> Result<Timeline> {
        let timeline = match &self.timeline {
            Some(path) => Timeline::load(path)
                .with_context(|| format!("Failed to load timeline from {}", path.display()))?,
            None => Timeline::default(),
        };

        match self.speed {
            Some(speed) => timeline
                .with_speed(speed)
                .context("Invalid --speed value"),
            None => Ok(timeline),
        }
    }
}
