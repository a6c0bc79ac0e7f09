//! Agent tree with status and progress

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{agent_color, progress_bar, status_color, status_icon};
use crate::app::App;

const BAR_WIDTH: usize = 20;

pub fn render_agents(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    for (i, agent) in app.state.agents.values().enumerate() {
        // Supervisor is the root, the others hang off it
        let branch = match i {
            0 => "",
            _ if i + 1 == app.state.agents.len() => "└─ ",
            _ => "├─ ",
        };

        lines.push(Line::from(vec![
            Span::styled(branch, Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} ", status_icon(agent.status)),
                Style::default().fg(status_color(agent.status)),
            ),
            Span::styled(
                agent.label.as_str(),
                Style::default()
                    .fg(agent_color(agent.id))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        let indent = if i == 0 { "  " } else { "     " };
        lines.push(Line::from(vec![
            Span::raw(indent),
            Span::styled(
                progress_bar(agent.progress, BAR_WIDTH),
                Style::default().fg(status_color(agent.status)),
            ),
            Span::styled(
                format!(" {:>3}%", agent.progress),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw(indent),
            Span::styled(
                agent.description.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let agents =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Agents "));
    f.render_widget(agents, area);
}
