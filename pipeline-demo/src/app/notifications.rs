//! Short-lived status messages shown over the dashboard

use std::time::{Duration, Instant};

const DEFAULT_TTL: Duration = Duration::from_secs(4);
const MAX_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub posted_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    fn is_live(&self, now: Instant) -> bool {
        now.duration_since(self.posted_at) < self.ttl
    }
}

#[derive(Debug, Default)]
pub struct NotificationManager {
    notifications: Vec<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Info, message.into());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Warning, message.into());
    }

    fn push(&mut self, level: NotificationLevel, message: String) {
        self.notifications.push(Notification {
            level,
            message,
            posted_at: Instant::now(),
            ttl: DEFAULT_TTL,
        });

        if self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Notifications that have not expired, oldest first
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        let now = Instant::now();
        self.notifications.iter().filter(move |n| n.is_live(now))
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.active().last()
    }

    pub fn cleanup_expired(&mut self) {
        let now = Instant::now();
        self.notifications.retain(|n| n.is_live(now));
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}
