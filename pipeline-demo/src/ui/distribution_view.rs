//! Distribution view: reach figures, delivery cards and delivery timeline

use pipeline_demo_sdk::compact_count;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{platform_color, progress_bar, render_stat_cards};
use super::social_view::render_social;
use crate::app::App;

const REACH_BAR_WIDTH: usize = 24;

pub fn render_distribution(f: &mut Frame, area: Rect, app: &App) {
    let insights = &app.script().insights;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(10),
            Constraint::Min(9),
        ])
        .split(area);

    render_stat_cards(f, rows[0], &insights.reach_stats);
    render_social(f, rows[1], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[2]);

    let max_reach = insights
        .platform_reach
        .iter()
        .map(|p| p.reach)
        .max()
        .unwrap_or(0);
    let reach_lines: Vec<Line> = insights
        .platform_reach
        .iter()
        .map(|p| {
            let percent = if max_reach == 0 {
                0
            } else {
                (p.reach * 100 / max_reach) as u8
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", p.platform.label()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    progress_bar(percent, REACH_BAR_WIDTH),
                    Style::default().fg(platform_color(p.platform)),
                ),
                Span::raw(format!(" {:>6}", compact_count(p.reach))),
            ])
        })
        .collect();
    let title = format!(" Platform Reach ({} total) ", compact_count(insights.total_reach()));
    f.render_widget(
        Paragraph::new(reach_lines).block(Block::default().borders(Borders::ALL).title(title)),
        bottom[0],
    );

    let event_lines: Vec<Line> = insights
        .delivery_events
        .iter()
        .map(|e| {
            let (tag, color) = match e.platform {
                Some(platform) => (platform.label(), platform_color(platform)),
                None => ("all", Color::Gray),
            };
            Line::from(vec![
                Span::styled(format!(" {:>3}s ", e.at_secs), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<10}", tag), Style::default().fg(color)),
                Span::raw(e.event.as_str()),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(event_lines)
            .block(Block::default().borders(Borders::ALL).title(" Delivery Timeline ")),
        bottom[1],
    );
}
