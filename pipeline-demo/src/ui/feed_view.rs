//! Live agent feed, newest entry at the bottom

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::components::{agent_color, category_tag, truncate};
use crate::app::App;

pub fn render_feed(f: &mut Frame, area: Rect, app: &App) {
    let feed = &app.state.feed;
    let title = if app.running {
        format!(" Agent Feed ({}) ● live ", feed.len())
    } else {
        format!(" Agent Feed ({}) ", feed.len())
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if feed.is_empty() {
        let hint = List::new(vec![ListItem::new(Span::styled(
            "Waiting for agents…",
            Style::default().fg(Color::DarkGray),
        ))]);
        f.render_widget(hint, inner);
        return;
    }

    // Keep the newest entries visible
    let visible = inner.height as usize;
    let skip = feed.len().saturating_sub(visible);
    let message_width = (inner.width as usize).saturating_sub(30);

    let items: Vec<ListItem> = feed
        .iter()
        .skip(skip)
        .map(|entry| {
            let (tag, tag_color) = category_tag(entry.category);
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<17} ", entry.agent.as_str()),
                    Style::default()
                        .fg(agent_color(entry.agent))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<5} ", tag), Style::default().fg(tag_color)),
                Span::raw(truncate(&entry.message, message_width)),
            ]))
        })
        .collect();

    f.render_widget(List::new(items), inner);
}
