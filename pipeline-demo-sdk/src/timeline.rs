//! Phase durations and replay speed
//!
//! A timeline can be loaded from YAML; every field is optional and falls
//! back to the built-in durations:
//!
//! ```yaml
//! speed: 2.0
//! durations_ms:
//!   transcreation: 6000
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::types::Phase;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("failed to read timeline file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid timeline YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("speed must be a positive finite number, got {0}")]
    InvalidSpeed(f64),

    #[error("phase '{0}' has a zero duration; only the terminal phase may be instantaneous")]
    ZeroDuration(Phase),

    #[error("phase '{phase}' lasts under 1ms at speed {speed}; lower the speed")]
    PhaseTooShort { phase: Phase, speed: f64 },
}

pub type TimelineResult<T> = Result<T, TimelineError>;

/// Shortest scaled gap allowed between two phase deadlines (one timer tick)
pub const MIN_PHASE_DURATION: Duration = Duration::from_millis(1);

/// How long each phase lasts before the next one is published, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PhaseDurations {
    pub listening: u64,
    pub intent_parsing: u64,
    pub transcreation: u64,
    pub media_processing: u64,
    pub quality_validation: u64,
    pub distribution: u64,
    pub complete: u64,
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            listening: 3000,
            intent_parsing: 2000,
            transcreation: 4000,
            media_processing: 4000,
            quality_validation: 2000,
            distribution: 3500,
            complete: 0,
        }
    }
}

impl PhaseDurations {
    pub fn get(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Idle => 0,
            Phase::Listening => self.listening,
            Phase::IntentParsing => self.intent_parsing,
            Phase::Transcreation => self.transcreation,
            Phase::MediaProcessing => self.media_processing,
            Phase::QualityValidation => self.quality_validation,
            Phase::Distribution => self.distribution,
            Phase::Complete => self.complete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeline {
    /// Playback multiplier; 2.0 replays twice as fast
    pub speed: f64,
    pub durations_ms: PhaseDurations,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            speed: 1.0,
            durations_ms: PhaseDurations::default(),
        }
    }
}

impl Timeline {
    pub fn from_yaml(yaml: &str) -> TimelineResult<Self> {
        let timeline: Timeline = serde_yaml::from_str(yaml)?;
        timeline.validate()?;
        Ok(timeline)
    }

    pub fn load(path: &Path) -> TimelineResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TimelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn with_speed(mut self, speed: f64) -> TimelineResult<Self> {
        self.speed = speed;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(TimelineError::InvalidSpeed(self.speed));
        }

        // Offsets closer than one timer tick would share a wakeup
        for phase in Phase::SEQUENCE {
            if phase.is_terminal() {
                continue;
            }
            if self.durations_ms.get(phase) == 0 {
                return Err(TimelineError::ZeroDuration(phase));
            }
            if self.duration(phase) < MIN_PHASE_DURATION {
                return Err(TimelineError::PhaseTooShort {
                    phase,
                    speed: self.speed,
                });
            }
        }

        Ok(())
    }

    /// Scaled duration of `phase`
    pub fn duration(&self, phase: Phase) -> Duration {
        self.scale(self.durations_ms.get(phase))
    }

    /// Delay from `start()` until `phase` is published
    ///
    /// Each phase fires once every phase before it in the sequence has run
    /// its course, so the first phase fires immediately.
    pub fn offset(&self, phase: Phase) -> Duration {
        let total_ms: u64 = Phase::SEQUENCE
            .iter()
            .take_while(|p| **p < phase)
            .map(|p| self.durations_ms.get(*p))
            .sum();
        self.scale(total_ms)
    }

    /// Delay from `start()` until the terminal phase is published
    pub fn total(&self) -> Duration {
        self.offset(Phase::Complete)
    }

    fn scale(&self, ms: u64) -> Duration {
        Duration::from_nanos((ms as f64 * 1_000_000.0 / self.speed).round() as u64)
    }
}
