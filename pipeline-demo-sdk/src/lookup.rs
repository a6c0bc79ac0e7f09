//! Pure derivations from (script, phase) to snapshot pieces

use chrono::{DateTime, Duration, Local};

use crate::script::PipelineScript;
use crate::types::{
    AgentName, AgentStatus, FeedEntry, InstagramStatus, Phase, PipelineState, ShareChatStatus,
    SocialDelivery, StepState, WhatsAppStatus,
};

/// Spacing between synthesized feed timestamps
pub const FEED_ENTRY_SPACING_MS: i64 = 800;

/// Agent status during `phase`; cells missing from the table are `Idle`
///
/// The supervisor drops back to `Processing` during quality validation and
/// platform strategy has no entry there; both are kept as observed.
pub fn status_for_phase(agent: AgentName, phase: Phase) -> AgentStatus {
    use AgentName::*;
    use AgentStatus::{Complete, Idle, Processing};

    match phase {
        Phase::Idle => Idle,
        Phase::Listening | Phase::IntentParsing => match agent {
            Supervisor => Processing,
            _ => Idle,
        },
        Phase::Transcreation => match agent {
            Supervisor => Complete,
            Transcreation => Processing,
            _ => Idle,
        },
        Phase::MediaProcessing => match agent {
            Supervisor | Transcreation => Complete,
            MediaFactory => Processing,
            PlatformStrategy => Idle,
        },
        Phase::QualityValidation => match agent {
            Supervisor => Processing,
            Transcreation | MediaFactory => Complete,
            PlatformStrategy => Idle,
        },
        Phase::Distribution => match agent {
            PlatformStrategy => Processing,
            _ => Complete,
        },
        Phase::Complete => Complete,
    }
}

pub fn progress_for_phase(agent: AgentName, phase: Phase) -> u8 {
    status_for_phase(agent, phase).progress()
}

/// Master feed truncated at the cutoff for `phase`, stamped backward from `now`
pub fn feed_prefix(script: &PipelineScript, phase: Phase, now: DateTime<Local>) -> Vec<FeedEntry> {
    let visible = &script.feed[..script.feed_cutoff(phase)];
    let len = visible.len() as i64;

    visible
        .iter()
        .enumerate()
        .map(|(i, entry)| FeedEntry {
            id: format!("feed-{}", i),
            agent: entry.agent,
            message: entry.message.clone(),
            category: entry.category,
            timestamp: now - Duration::milliseconds((len - i as i64) * FEED_ENTRY_SPACING_MS),
        })
        .collect()
}

/// Delivery statuses for `phase`
///
/// Thresholds are positions within [`Phase::SEQUENCE`]: distribution (5)
/// reaches the intermediate status, complete (6) the final one.
pub fn social_status(phase: Phase) -> SocialDelivery {
    match phase.sequence_index() {
        Some(i) if i >= 6 => SocialDelivery {
            whatsapp: WhatsAppStatus::Delivered,
            instagram: InstagramStatus::Live,
            sharechat: ShareChatStatus::Trending,
        },
        Some(i) if i >= 5 => SocialDelivery {
            whatsapp: WhatsAppStatus::Sent,
            instagram: InstagramStatus::Posted,
            sharechat: ShareChatStatus::Posted,
        },
        _ => SocialDelivery::PENDING,
    }
}

/// The voice brief appears once intent parsing begins
pub fn voice_transcript_for(script: &PipelineScript, phase: Phase) -> String {
    if phase >= Phase::IntentParsing {
        script.voice_transcript.clone()
    } else {
        String::new()
    }
}

pub fn step_state(step: Phase, current: Phase) -> StepState {
    if current.is_terminal() || current > step {
        StepState::Complete
    } else if current == step {
        StepState::Active
    } else {
        StepState::Pending
    }
}

/// Full snapshot for `phase`, built fresh from the script
pub fn snapshot_for(script: &PipelineScript, phase: Phase, now: DateTime<Local>) -> PipelineState {
    let agents = script
        .agents
        .iter()
        .map(|(name, template)| (*name, template.with_status(status_for_phase(*name, phase))))
        .collect();

    PipelineState {
        phase,
        agents,
        feed: feed_prefix(script, phase, now),
        voice_transcript: voice_transcript_for(script, phase),
        social_delivery: social_status(phase),
    }
}

impl PipelineState {
    /// Snapshot before `start()` and after every `reset()`
    pub fn initial(script: &PipelineScript) -> Self {
        Self {
            phase: Phase::Idle,
            agents: script.agents.clone(),
            feed: Vec::new(),
            voice_transcript: String::new(),
            social_delivery: SocialDelivery::PENDING,
        }
    }
}
