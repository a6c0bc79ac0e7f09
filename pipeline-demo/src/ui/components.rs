//! Small shared rendering helpers (icons, colors, bars, overlays)

use pipeline_demo_sdk::{AgentName, AgentStatus, FeedCategory, Platform, StatCard, StepState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, NotificationLevel};

pub fn agent_color(agent: AgentName) -> Color {
    match agent {
        AgentName::Supervisor => Color::Magenta,
        AgentName::Transcreation => Color::Cyan,
        AgentName::MediaFactory => Color::Yellow,
        AgentName::PlatformStrategy => Color::Green,
    }
}

pub fn status_icon(status: AgentStatus) -> &'static str {
    match status {
        AgentStatus::Idle => "○",
        AgentStatus::Processing => "▶",
        AgentStatus::Complete => "✓",
        AgentStatus::Error => "✗",
    }
}

pub fn status_color(status: AgentStatus) -> Color {
    match status {
        AgentStatus::Idle => Color::Gray,
        AgentStatus::Processing => Color::Yellow,
        AgentStatus::Complete => Color::Green,
        AgentStatus::Error => Color::Red,
    }
}

pub fn step_icon(state: StepState) -> (&'static str, Color) {
    match state {
        StepState::Pending => ("○", Color::DarkGray),
        StepState::Active => ("▶", Color::Yellow),
        StepState::Complete => ("✓", Color::Green),
    }
}

pub fn category_tag(category: FeedCategory) -> (&'static str, Color) {
    match category {
        FeedCategory::Thought => ("think", Color::Blue),
        FeedCategory::Action => ("act", Color::Yellow),
        FeedCategory::Result => ("done", Color::Green),
        FeedCategory::Error => ("err", Color::Red),
    }
}

pub fn platform_color(platform: Platform) -> Color {
    match platform {
        Platform::WhatsApp => Color::Green,
        Platform::Instagram => Color::Magenta,
        Platform::ShareChat => Color::Red,
    }
}

/// Fixed-width text bar, e.g. `██████░░░░` for 60%
pub fn progress_bar(progress: u8, width: usize) -> String {
    let filled = (usize::from(progress.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate on a char boundary, appending `...` when shortened
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Row of equal-width bordered cards, one per stat
pub fn render_stat_cards(f: &mut Frame, area: Rect, cards: &[StatCard]) {
    if cards.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let mut spans = vec![Span::styled(
            card.value.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )];
        if !card.note.is_empty() {
            spans.push(Span::styled(
                format!("  {}", card.note),
                Style::default().fg(Color::Green),
            ));
        }

        let widget = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", card.label)),
        );
        f.render_widget(widget, *column);
    }
}

pub fn render_notifications(f: &mut Frame, area: Rect, app: &App) {
    let Some(notification) = app.notifications.latest() else {
        return;
    };

    let color = match notification.level {
        NotificationLevel::Info => Color::Cyan,
        NotificationLevel::Success => Color::Green,
        NotificationLevel::Warning => Color::Yellow,
    };

    let width = (notification.message.chars().count() as u16 + 4).min(area.width);
    let toast_area = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: 3.min(area.height),
    };

    let toast = Paragraph::new(Line::from(Span::styled(
        notification.message.as_str(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    f.render_widget(Clear, toast_area);
    f.render_widget(toast, toast_area);
}
