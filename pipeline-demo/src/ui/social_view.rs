//! Voice brief and social delivery hub

use pipeline_demo_sdk::{DeliveryRank, Phase, Platform};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

pub fn render_transcript(f: &mut Frame, area: Rect, app: &App) {
    let text = if !app.state.voice_transcript.is_empty() {
        Line::from(Span::styled(
            format!("“{}”", app.state.voice_transcript),
            Style::default().fg(Color::White),
        ))
    } else if app.state.phase == Phase::Listening {
        Line::from(Span::styled(
            "🎙 Listening to voice brief…",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "Press S to record a voice brief",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let transcript = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Voice Brief "));
    f.render_widget(transcript, area);
}

/// Pending is gray, intermediate yellow, delivered/live/trending green
fn delivery_color(rank: u8) -> Color {
    if rank == 0 {
        Color::DarkGray
    } else if rank >= 2 {
        Color::Green
    } else {
        Color::Yellow
    }
}

pub fn render_social(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let delivery = &app.state.social_delivery;
    let cards: [(Platform, &dyn DeliveryRank); 3] = [
        (Platform::WhatsApp, &delivery.whatsapp),
        (Platform::Instagram, &delivery.instagram),
        (Platform::ShareChat, &delivery.sharechat),
    ];

    for ((platform, status), column) in cards.into_iter().zip(columns.iter()) {
        render_platform_card(f, *column, app, platform, status);
    }
}

fn render_platform_card(
    f: &mut Frame,
    area: Rect,
    app: &App,
    platform: Platform,
    status: &dyn DeliveryRank,
) {
    let color = delivery_color(status.rank());
    let mut lines = vec![Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::Gray)),
        Span::styled(
            status.label().to_uppercase(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(preview) = app.script().preview(platform) {
        lines.push(Line::from(vec![
            Span::styled(preview.language.as_str(), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" · {}", preview.media_aspect.as_str()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        // Captions stay hidden until the post goes out
        if status.rank() > 0 {
            lines.push(Line::from(preview.caption.as_str()));
            if !preview.hashtags.is_empty() {
                lines.push(Line::from(Span::styled(
                    preview.hashtags.join(" "),
                    Style::default().fg(Color::Blue),
                )));
            }
        }
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", platform.label())),
    );
    f.render_widget(card, area);
}
