//! Analytics view: run history, cost split and quality scores

use pipeline_demo_sdk::Measure;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

use super::components::{progress_bar, render_stat_cards};
use crate::app::App;

const BAR_WIDTH: usize = 16;

pub fn render_analytics(f: &mut Frame, area: Rect, app: &App) {
    let insights = &app.script().insights;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(9),
        ])
        .split(area);

    render_stat_cards(f, rows[0], &insights.metric_cards);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);
    render_run_history(f, charts[0], app);

    let total = insights.total_cost_inr();
    let cost_lines = measure_lines(&insights.cost_split_inr, |m| {
        let share = if total > 0.0 { m.value / total * 100.0 } else { 0.0 };
        (share, format!("₹{:.0}", m.value))
    });
    let title = format!(" Cost Breakdown (₹{:.0} per run) ", total);
    f.render_widget(
        Paragraph::new(cost_lines).block(Block::default().borders(Borders::ALL).title(title)),
        charts[1],
    );

    let scores = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let accuracy = measure_lines(&insights.agent_accuracy, |m| {
        (m.value, format!("{:.1}%", m.value))
    });
    f.render_widget(
        Paragraph::new(accuracy)
            .block(Block::default().borders(Borders::ALL).title(" Agent Accuracy ")),
        scores[0],
    );

    let quality = measure_lines(&insights.quality_scores, |m| {
        (m.value * 100.0, format!("{:.0}%", m.value * 100.0))
    });
    f.render_widget(
        Paragraph::new(quality)
            .block(Block::default().borders(Borders::ALL).title(" Quality Metrics ")),
        scores[1],
    );
}

fn render_run_history(f: &mut Frame, area: Rect, app: &App) {
    let insights = &app.script().insights;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Pipeline Performance: avg. execution time (s), last runs ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    // Sparkline takes integers; tenths of a second keep the shape
    let tenths: Vec<u64> = insights
        .run_durations_secs
        .iter()
        .map(|secs| (secs * 10.0).round() as u64)
        .collect();
    f.render_widget(
        Sparkline::default()
            .data(&tenths)
            .style(Style::default().fg(Color::Cyan)),
        parts[0],
    );

    let mut spans = Vec::new();
    if let (Some(first), Some(last)) = (
        insights.run_durations_secs.first(),
        insights.run_durations_secs.last(),
    ) {
        spans.push(Span::styled(
            format!("R1 {:.1}s → R{} {:.1}s  ", first, tenths.len(), last),
            Style::default().fg(Color::Gray),
        ));
    }
    spans.push(Span::styled(
        format!("{}% faster", insights.speedup_percent()),
        Style::default().fg(Color::Green),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), parts[1]);
}

/// One `label  ████░░  value` line per measure; `bar` maps a measure to
/// its fill percentage and printed value
fn measure_lines<F>(measures: &[Measure], bar: F) -> Vec<Line<'_>>
where
    F: Fn(&Measure) -> (f64, String),
{
    measures
        .iter()
        .map(|m| {
            let (percent, value) = bar(m);
            let filled = percent.clamp(0.0, 100.0).round() as u8;
            Line::from(vec![
                Span::styled(format!("{:<20}", m.label), Style::default().fg(Color::Gray)),
                Span::styled(progress_bar(filled, BAR_WIDTH), Style::default().fg(Color::Cyan)),
                Span::styled(format!(" {:>7}", value), Style::default().fg(Color::White)),
            ])
        })
        .collect()
}
