//! UI rendering for the pipeline dashboard
//!
//! Header and view bar on top, footer at the bottom, and the selected view
//! in between. The pipeline view stacks quick stats, the step timeline,
//! agents beside the live feed, and the voice brief beside the social hub.
//! Renderers only read `App`; all state changes go through the timeline
//! player.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::{App, View};

mod agents_view;
mod analytics_view;
mod components;
mod distribution_view;
mod feed_view;
mod header_footer;
mod social_view;
mod tab_views;
mod timeline_view;

pub use agents_view::render_agents;
pub use analytics_view::render_analytics;
pub use components::{progress_bar, render_notifications, render_stat_cards, truncate};
pub use distribution_view::render_distribution;
pub use feed_view::render_feed;
pub use header_footer::{render_footer, render_header};
pub use social_view::{render_social, render_transcript};
pub use tab_views::render_view_bar;
pub use timeline_view::render_timeline;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_view_bar(f, chunks[1], app);

    match app.view {
        View::Pipeline => render_pipeline(f, chunks[2], app),
        View::Analytics => render_analytics(f, chunks[2], app),
        View::Distribution => render_distribution(f, chunks[2], app),
    }

    render_footer(f, chunks[3], app);

    // Toast overlay
    render_notifications(f, chunks[2], app);
}

fn render_pipeline(f: &mut Frame, area: Rect, app: &App) {
    // Quick stats, steps, agents + feed, brief + social
    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Min(10),
            Constraint::Length(10),
        ])
        .split(area);

    render_stat_cards(f, body[0], &app.script().insights.quick_stats);
    render_timeline(f, body[1], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(body[2]);
    render_agents(f, middle[0], app);
    render_feed(f, middle[1], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(body[3]);
    render_transcript(f, bottom[0], app);
    render_social(f, bottom[1], app);
}
