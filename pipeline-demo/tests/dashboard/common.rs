//! Common helpers for dashboard tests

use std::time::{Duration, Instant};

use pipeline_demo::app::App;
use pipeline_demo_sdk::{Phase, Timeline};
use ratatui::{backend::TestBackend, Terminal};

/// App whose full run takes under 20ms of wall-clock time
pub fn fast_app() -> App {
    App::new(Timeline::default().with_speed(1000.0).unwrap()).unwrap()
}

/// Poll until the app shows `phase`, giving up after two seconds
pub fn wait_for_phase(app: &mut App, phase: Phase) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        app.poll();
        if app.state.phase == phase && app.running == !phase.is_terminal() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

/// Render the dashboard and flatten the buffer into one string
pub fn render_to_string(app: &App) -> String {
    let backend = TestBackend::new(140, 45);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| pipeline_demo::ui::ui(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}
