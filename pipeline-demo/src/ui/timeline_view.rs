//! Step-by-step pipeline timeline

use pipeline_demo_sdk::{step_state, StepState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::step_icon;
use crate::app::App;

pub fn render_timeline(f: &mut Frame, area: Rect, app: &App) {
    let current = app.state.phase;
    let script = app.script();

    let lines: Vec<Line> = script
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let state = step_state(step.phase, current);
            let (icon, color) = step_icon(state);
            let label_style = match state {
                StepState::Active => Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                StepState::Complete => Style::default().fg(Color::White),
                StepState::Pending => Style::default().fg(Color::Gray),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(color)),
                Span::styled(format!("{}. {:<17}", i + 1, step.label), label_style),
                Span::styled(
                    format!("{:<38}", step.description),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{:>5}", step.estimate), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("  ₹{:>6.2}", step.cost_inr),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let title = format!(
        " Pipeline Steps  (est. total ₹{:.2}) ",
        script.estimated_cost_inr()
    );
    let timeline = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(timeline, area);
}
