//! Shared model and timeline player for the agent pipeline demo
//!
//! The dashboard binary renders whatever [`PipelineState`] the
//! [`TimelinePlayer`] publishes; nothing outside the player writes state.

pub mod lookup;
pub mod player;
pub mod script;
pub mod timeline;
pub mod types;

pub use lookup::{
    feed_prefix, progress_for_phase, snapshot_for, social_status, status_for_phase, step_state,
    voice_transcript_for,
};
pub use player::TimelinePlayer;
pub use script::PipelineScript;
pub use timeline::{PhaseDurations, Timeline, TimelineError, TimelineResult, MIN_PHASE_DURATION};
pub use types::*;
