//! Constant fixtures replayed by the timeline player
//!
//! A [`PipelineScript`] is built once and shared behind an `Arc`; the player
//! never mutates it, each transition derives a fresh snapshot from it.

use std::collections::BTreeMap;

use crate::types::{
    AgentName, AgentRecord, AgentStatus, DeliveryEvent, FeedCategory, FeedTemplate, Insights,
    MediaAspect, Measure, Phase, PipelineStep, Platform, PlatformReach, SocialPreview, StatCard,
};

/// Number of master-feed entries visible at each phase, indexed by `Phase::index()`
pub const FEED_CUTOFFS: [usize; 8] = [0, 2, 3, 6, 7, 11, 14, 17];

pub const SAMPLE_VOICE_TRANSCRIPT: &str = "Create a product launch video for our new eco-friendly \
    water bottle. Target youth audience in Hindi, Tamil, Telugu, and Bengali. Post it to \
    WhatsApp, Instagram Reels, and ShareChat. Use a casual, energetic tone with regional \
    festival references.";

/// Immutable tables the player recombines at every phase boundary
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineScript {
    pub agents: BTreeMap<AgentName, AgentRecord>,
    pub feed: Vec<FeedTemplate>,
    pub voice_transcript: String,
    pub feed_cutoffs: [usize; 8],
    pub steps: Vec<PipelineStep>,
    pub previews: Vec<SocialPreview>,
    pub insights: Insights,
}

impl PipelineScript {
    /// The built-in eco-bottle launch scenario
    pub fn standard() -> Self {
        Self {
            agents: standard_agents(),
            feed: standard_feed(),
            voice_transcript: SAMPLE_VOICE_TRANSCRIPT.to_string(),
            feed_cutoffs: FEED_CUTOFFS,
            steps: standard_steps(),
            previews: standard_previews(),
            insights: standard_insights(),
        }
    }

    /// Visible feed length for `phase`, clamped to the master list
    pub fn feed_cutoff(&self, phase: Phase) -> usize {
        self.feed_cutoffs[phase.index()].min(self.feed.len())
    }

    pub fn step(&self, phase: Phase) -> Option<&PipelineStep> {
        self.steps.iter().find(|s| s.phase == phase)
    }

    pub fn preview(&self, platform: Platform) -> Option<&SocialPreview> {
        self.previews.iter().find(|p| p.platform == platform)
    }

    /// Sum of the estimated per-step costs in rupees
    pub fn estimated_cost_inr(&self) -> f64 {
        self.steps.iter().map(|s| s.cost_inr).sum()
    }
}

impl Default for PipelineScript {
    fn default() -> Self {
        Self::standard()
    }
}

fn agent(id: AgentName, label: &str, description: &str) -> (AgentName, AgentRecord) {
    (
        id,
        AgentRecord {
            id,
            label: label.to_string(),
            description: description.to_string(),
            status: AgentStatus::Idle,
            progress: 0,
        },
    )
}

fn standard_agents() -> BTreeMap<AgentName, AgentRecord> {
    BTreeMap::from([
        agent(
            AgentName::Supervisor,
            "Supervisor Agent",
            "Orchestration coordinator & quality gatekeeper",
        ),
        agent(
            AgentName::Transcreation,
            "Transcreation Agent",
            "Indic RAG-powered language adaptation",
        ),
        agent(
            AgentName::MediaFactory,
            "Media Factory Agent",
            "Multi-format video/image processing",
        ),
        agent(
            AgentName::PlatformStrategy,
            "Platform Strategy Agent",
            "Distribution optimization",
        ),
    ])
}

fn line(agent: AgentName, message: &str, category: FeedCategory) -> FeedTemplate {
    FeedTemplate {
        agent,
        message: message.to_string(),
        category,
    }
}

fn standard_feed() -> Vec<FeedTemplate> {
    use AgentName::*;
    use FeedCategory::*;

    vec![
        line(Supervisor, "Parsing voice command intent…", Thought),
        line(Supervisor, "Intent identified: product_launch for youth audience (18-35)", Result),
        line(Supervisor, "Assigning transcreation task → Hindi, Tamil, Telugu, Bengali", Action),
        line(
            Transcreation,
            "Loading Indic RAG knowledge base (cultural-references index)…",
            Thought,
        ),
        line(
            Transcreation,
            "Adapting idioms: 'break the ice' → 'बातचीत की शुरुआत करें' (Hindi)",
            Action,
        ),
        line(Transcreation, "Transcreation complete — BLEU: 0.87, Cultural Accuracy: 0.92", Result),
        line(Supervisor, "Quality validation passed ✓ — assigning media processing", Action),
        line(MediaFactory, "Initiating MediaConvert job for 3 aspect ratios…", Thought),
        line(MediaFactory, "Generating 9:16 (720×1280) variant for Stories/Reels…", Action),
        line(
            MediaFactory,
            "Subtitle generation: WebVTT for hi, ta, te, bn — Noto Sans Unicode",
            Action,
        ),
        line(MediaFactory, "Media processing complete — 3 variants, 4 subtitle tracks", Result),
        line(
            Supervisor,
            "Assigning platform distribution across WhatsApp, Instagram, ShareChat",
            Action,
        ),
        line(
            PlatformStrategy,
            "Scheduling optimal post times — 8:30 PM IST (WhatsApp), 8:00 PM (Instagram)",
            Thought,
        ),
        line(
            PlatformStrategy,
            "WhatsApp: Broadcasting to 1,250 recipients with 9:16 format",
            Action,
        ),
        line(PlatformStrategy, "Instagram: Publishing Reel with #नयाउत्पाद #TechForBharat", Action),
        line(
            PlatformStrategy,
            "ShareChat: Posted with regional hashtags — trending detection active",
            Action,
        ),
        line(Supervisor, "Pipeline complete — Total cost: ₹157 ($1.85) across 4 languages", Result),
    ]
}

fn step(
    phase: Phase,
    label: &str,
    description: &str,
    estimate: &str,
    cost_inr: f64,
) -> PipelineStep {
    PipelineStep {
        phase,
        label: label.to_string(),
        description: description.to_string(),
        estimate: estimate.to_string(),
        cost_inr,
    }
}

fn standard_steps() -> Vec<PipelineStep> {
    vec![
        step(Phase::Listening, "Voice Ingestion", "Capture and transcribe voice brief", "2s", 0.50),
        step(
            Phase::IntentParsing,
            "Intent Parsing",
            "Analyze intent, audience, and tone",
            "1.5s",
            3.00,
        ),
        step(
            Phase::Transcreation,
            "Transcreation",
            "Cultural adaptation to 4 languages",
            "6s",
            45.00,
        ),
        step(
            Phase::MediaProcessing,
            "Media Processing",
            "Generate 9:16, 1:1, 16:9 formats",
            "5s",
            62.00,
        ),
        step(
            Phase::QualityValidation,
            "Quality Gate",
            "BLEU scoring + semantic validation",
            "2s",
            12.00,
        ),
        step(
            Phase::Distribution,
            "Distribution",
            "Deploy to 3 platforms simultaneously",
            "2s",
            35.00,
        ),
    ]
}

fn standard_previews() -> Vec<SocialPreview> {
    vec![
        SocialPreview {
            platform: Platform::WhatsApp,
            caption: "🌿 पर्यावरण के लिए एक कदम! हमारी नई इको-फ्रेंडली बोतल के साथ \
                अपने ग्रह को बचाएं। अभी ऑर्डर करें! 💧"
                .to_string(),
            language: "Hindi".to_string(),
            hashtags: Vec::new(),
            media_aspect: MediaAspect::Portrait,
        },
        SocialPreview {
            platform: Platform::Instagram,
            caption: "🌍 Say hello to sustainability! Our eco-friendly bottle is here to make \
                every sip count."
                .to_string(),
            language: "English".to_string(),
            hashtags: [
                "#EcoFriendly",
                "#नयाउत्पाद",
                "#TechForBharat",
                "#SustainableLiving",
                "#GoGreen",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            media_aspect: MediaAspect::Portrait,
        },
        SocialPreview {
            platform: Platform::ShareChat,
            caption: "🔥 இயற்கையை காப்போம்! எங்கள் புதிய எகோ-ஃப்ரெண்ட்லி பாட்டில் \
                இப்போது கிடைக்கிறது 💚"
                .to_string(),
            language: "Tamil".to_string(),
            hashtags: ["#பசுமை", "#EcoBottle", "#ShareChat"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            media_aspect: MediaAspect::Portrait,
        },
    ]
}

fn card(label: &str, value: &str, note: &str) -> StatCard {
    StatCard {
        label: label.to_string(),
        value: value.to_string(),
        note: note.to_string(),
    }
}

fn measures(rows: &[(&str, f64)]) -> Vec<Measure> {
    rows.iter()
        .map(|(label, value)| Measure {
            label: label.to_string(),
            value: *value,
        })
        .collect()
}

fn event(at_secs: u32, event: &str, platform: Option<Platform>) -> DeliveryEvent {
    DeliveryEvent {
        at_secs,
        event: event.to_string(),
        platform,
    }
}

fn standard_insights() -> Insights {
    use Platform::*;

    Insights {
        quick_stats: vec![
            card("Pipeline Runs", "247", "+12%"),
            card("Languages", "4", "Active"),
            card("Avg. Cost", "₹157", "-8%"),
            card("Avg. Time", "18.5s", "-15%"),
        ],
        metric_cards: vec![
            card("Pipeline Runs", "247", "+12% this week"),
            card("Total Cost", "₹38,793", "₹157 avg per run"),
            card("Quality Score", "96%", "Above 95% threshold"),
            card("Languages", "4", "Hi, Ta, Te, Mr"),
        ],
        run_durations_secs: vec![
            18.5, 17.2, 19.1, 16.8, 18.0, 15.5, 17.0, 14.8, 16.2, 15.0, 14.5, 13.8,
        ],
        cost_split_inr: measures(&[
            ("Transcreation", 45.0),
            ("Media Processing", 62.0),
            ("Distribution", 35.0),
            ("Orchestration", 15.0),
        ]),
        agent_accuracy: measures(&[
            ("Supervisor", 99.1),
            ("Transcreation", 96.5),
            ("Media Factory", 98.2),
            ("Platform Strategy", 97.8),
        ]),
        quality_scores: measures(&[
            ("BLEU Score", 0.87),
            ("Semantic Similarity", 0.94),
            ("Cultural Accuracy", 0.91),
            ("Fluency", 0.96),
            ("Grammar", 0.98),
        ]),
        reach_stats: vec![
            card("Total Reach", "36.4K", ""),
            card("Impressions", "98.7K", ""),
            card("Shares", "4.2K", ""),
            card("Engagement", "8.3%", ""),
        ],
        platform_reach: vec![
            PlatformReach { platform: WhatsApp, reach: 12_500 },
            PlatformReach { platform: Instagram, reach: 8_700 },
            PlatformReach { platform: ShareChat, reach: 15_200 },
        ],
        delivery_events: vec![
            event(0, "Pipeline triggered", None),
            event(12, "Content ready for distribution", None),
            event(14, "WhatsApp broadcast initiated", Some(WhatsApp)),
            event(15, "Instagram Reel uploaded", Some(Instagram)),
            event(16, "ShareChat post published", Some(ShareChat)),
            event(18, "WhatsApp delivered (blue ticks)", Some(WhatsApp)),
            event(22, "ShareChat trending in regional feed", Some(ShareChat)),
        ],
    }
}
