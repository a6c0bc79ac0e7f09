//! View bar shown under the header

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};

pub fn render_view_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    for (i, view) in View::ALL.iter().enumerate() {
        let style = if *view == app.view {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        spans.push(Span::styled(format!("[ {} {} ]", i + 1, view.title()), style));
        spans.push(Span::raw(" "));
    }

    let tabs_line = Line::from(spans);
    let separator = Line::from("━".repeat(area.width as usize));

    f.render_widget(Paragraph::new(vec![tabs_line, separator]), area);
}
