//! Snapshot types published by the timeline player
//!
//! Every enum here is closed so the lookup tables in [`crate::lookup`] are
//! checked for exhaustiveness at compile time.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Pipeline phase, in replay order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Idle,
    Listening,
    IntentParsing,
    Transcreation,
    MediaProcessing,
    QualityValidation,
    Distribution,
    Complete,
}

impl Phase {
    /// Every phase, ordered by index
    pub const ALL: [Phase; 8] = [
        Phase::Idle,
        Phase::Listening,
        Phase::IntentParsing,
        Phase::Transcreation,
        Phase::MediaProcessing,
        Phase::QualityValidation,
        Phase::Distribution,
        Phase::Complete,
    ];

    /// Phases the player schedules after `start()` (everything but `Idle`)
    pub const SEQUENCE: [Phase; 7] = [
        Phase::Listening,
        Phase::IntentParsing,
        Phase::Transcreation,
        Phase::MediaProcessing,
        Phase::QualityValidation,
        Phase::Distribution,
        Phase::Complete,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Position within [`Phase::SEQUENCE`], `None` for `Idle`
    pub fn sequence_index(self) -> Option<usize> {
        self.index().checked_sub(1)
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Complete
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Listening => "listening",
            Phase::IntentParsing => "intent-parsing",
            Phase::Transcreation => "transcreation",
            Phase::MediaProcessing => "media-processing",
            Phase::QualityValidation => "quality-validation",
            Phase::Distribution => "distribution",
            Phase::Complete => "complete",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentName {
    Supervisor,
    Transcreation,
    MediaFactory,
    PlatformStrategy,
}

impl AgentName {
    pub const ALL: [AgentName; 4] = [
        AgentName::Supervisor,
        AgentName::Transcreation,
        AgentName::MediaFactory,
        AgentName::PlatformStrategy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentName::Supervisor => "supervisor",
            AgentName::Transcreation => "transcreation",
            AgentName::MediaFactory => "media-factory",
            AgentName::PlatformStrategy => "platform-strategy",
        }
    }
}

impl fmt::Display for AgentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Idle,
    Processing,
    Complete,
    Error,
}

impl AgentStatus {
    /// Progress percentage shown for an agent in this status
    pub fn progress(self) -> u8 {
        match self {
            AgentStatus::Complete => 100,
            AgentStatus::Processing => 60,
            AgentStatus::Idle | AgentStatus::Error => 0,
        }
    }
}

/// One agent as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: AgentName,
    pub label: String,
    pub description: String,
    pub status: AgentStatus,
    pub progress: u8,
}

impl AgentRecord {
    /// Copy of this record with `status` applied and progress derived from it
    pub fn with_status(&self, status: AgentStatus) -> Self {
        Self {
            status,
            progress: status.progress(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedCategory {
    Thought,
    Action,
    Result,
    Error,
}

/// Entry of the master feed list, before it is stamped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedTemplate {
    pub agent: AgentName,
    pub message: String,
    pub category: FeedCategory,
}

/// Feed line as published in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub id: String,
    pub agent: AgentName,
    pub message: String,
    pub category: FeedCategory,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhatsAppStatus {
    Pending,
    Sent,
    Delivered,
    Read,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstagramStatus {
    Pending,
    Posted,
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareChatStatus {
    Pending,
    Posted,
    Trending,
}

/// Advancement order of a delivery status, used to check that a run never regresses
pub trait DeliveryRank {
    fn rank(&self) -> u8;
    fn label(&self) -> &'static str;
}

impl DeliveryRank for WhatsAppStatus {
    fn rank(&self) -> u8 {
        *self as u8
    }

    fn label(&self) -> &'static str {
        match self {
            WhatsAppStatus::Pending => "pending",
            WhatsAppStatus::Sent => "sent",
            WhatsAppStatus::Delivered => "delivered",
            WhatsAppStatus::Read => "read",
        }
    }
}

impl DeliveryRank for InstagramStatus {
    fn rank(&self) -> u8 {
        *self as u8
    }

    fn label(&self) -> &'static str {
        match self {
            InstagramStatus::Pending => "pending",
            InstagramStatus::Posted => "posted",
            InstagramStatus::Live => "live",
        }
    }
}

impl DeliveryRank for ShareChatStatus {
    fn rank(&self) -> u8 {
        *self as u8
    }

    fn label(&self) -> &'static str {
        match self {
            ShareChatStatus::Pending => "pending",
            ShareChatStatus::Posted => "posted",
            ShareChatStatus::Trending => "trending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialDelivery {
    pub whatsapp: WhatsAppStatus,
    pub instagram: InstagramStatus,
    pub sharechat: ShareChatStatus,
}

impl SocialDelivery {
    pub const PENDING: SocialDelivery = SocialDelivery {
        whatsapp: WhatsAppStatus::Pending,
        instagram: InstagramStatus::Pending,
        sharechat: ShareChatStatus::Pending,
    };
}

impl Default for SocialDelivery {
    fn default() -> Self {
        Self::PENDING
    }
}

/// Full dashboard snapshot, replaced wholesale on every transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineState {
    pub phase: Phase,
    pub agents: BTreeMap<AgentName, AgentRecord>,
    pub feed: Vec<FeedEntry>,
    pub voice_transcript: String,
    pub social_delivery: SocialDelivery,
}

impl PipelineState {
    pub fn agent(&self, name: AgentName) -> Option<&AgentRecord> {
        self.agents.get(&name)
    }
}

/// Where a dashboard step sits relative to the current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Pending,
    Active,
    Complete,
}

/// Catalog entry for one step on the pipeline timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStep {
    pub phase: Phase,
    pub label: String,
    pub description: String,
    pub estimate: String,
    pub cost_inr: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    WhatsApp,
    Instagram,
    ShareChat,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::WhatsApp => "WhatsApp",
            Platform::Instagram => "Instagram",
            Platform::ShareChat => "ShareChat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaAspect {
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Landscape,
}

impl MediaAspect {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaAspect::Portrait => "9:16",
            MediaAspect::Square => "1:1",
            MediaAspect::Landscape => "16:9",
        }
    }
}

/// Localized post preview shown in the social hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPreview {
    pub platform: Platform,
    pub caption: String,
    pub language: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hashtags: Vec<String>,
    pub media_aspect: MediaAspect,
}

/// Headline figure on a dashboard card, e.g. `247` with note `+12%`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

/// Labelled number drawn as one bar of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformReach {
    pub platform: Platform,
    pub reach: u64,
}

/// Entry on the distribution page's delivery timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryEvent {
    /// Seconds after the run was triggered
    pub at_secs: u32,
    pub event: String,
    /// `None` when the event concerns every platform
    pub platform: Option<Platform>,
}

/// Historical figures behind the analytics and distribution views
///
/// These are fixed sample numbers; a replay never changes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub quick_stats: Vec<StatCard>,
    pub metric_cards: Vec<StatCard>,
    /// Execution time of recent runs in seconds, oldest first
    pub run_durations_secs: Vec<f64>,
    pub cost_split_inr: Vec<Measure>,
    /// Percent of tasks each agent completed without a retry
    pub agent_accuracy: Vec<Measure>,
    /// Scores in `0.0..=1.0`
    pub quality_scores: Vec<Measure>,
    pub reach_stats: Vec<StatCard>,
    pub platform_reach: Vec<PlatformReach>,
    pub delivery_events: Vec<DeliveryEvent>,
}

impl Insights {
    /// How much faster the latest run was than the oldest, in whole percent
    pub fn speedup_percent(&self) -> u32 {
        match (self.run_durations_secs.first(), self.run_durations_secs.last()) {
            (Some(first), Some(last)) if *first > 0.0 => {
                ((first - last) / first * 100.0).floor().max(0.0) as u32
            }
            _ => 0,
        }
    }

    pub fn total_cost_inr(&self) -> f64 {
        self.cost_split_inr.iter().map(|m| m.value).sum()
    }

    pub fn total_reach(&self) -> u64 {
        self.platform_reach.iter().map(|p| p.reach).sum()
    }

    pub fn reach(&self, platform: Platform) -> u64 {
        self.platform_reach
            .iter()
            .find(|p| p.platform == platform)
            .map_or(0, |p| p.reach)
    }
}

/// `36400` as `36.4K`; counts under a thousand are printed as is
pub fn compact_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
