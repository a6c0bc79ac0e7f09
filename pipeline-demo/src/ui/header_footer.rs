//! Header and footer rendering functions

use pipeline_demo_sdk::Phase;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let (badge, badge_color) = if app.running {
        ("[RUNNING]", Color::Yellow)
    } else if app.state.phase == Phase::Complete {
        ("[COMPLETE]", Color::Green)
    } else {
        ("[IDLE]", Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(
            "Agent Pipeline Demo v0.1.0",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(
            app.state.phase.as_str(),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(step) = app.script().step(app.state.phase) {
        spans.push(Span::styled(
            format!(" ({}, est. {})", step.label, step.estimate),
            Style::default().fg(Color::Gray),
        ));
    }

    spans.extend([
        Span::raw("  "),
        Span::styled(
            badge,
            Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
        ),
    ]);

    if let Some(elapsed) = app.elapsed() {
        let total = app.player.timeline().total();
        spans.push(Span::styled(
            format!("  {:.1}s / {:.1}s", elapsed.as_secs_f64(), total.as_secs_f64()),
            Style::default().fg(Color::Gray),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().add_modifier(Modifier::BOLD));

    let mut spans = Vec::new();
    if !app.running {
        spans.push(key("[S/Enter]"));
        spans.push(Span::raw(" Run Pipeline  "));
    }
    if app.state.phase != Phase::Idle || app.running {
        spans.push(key("[R]"));
        spans.push(Span::raw(" Reset  "));
    }
    spans.push(key("[Tab/1-3]"));
    spans.push(Span::raw(" Views  "));
    spans.push(key("[Q/Esc]"));
    spans.push(Span::raw(" Quit"));

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
