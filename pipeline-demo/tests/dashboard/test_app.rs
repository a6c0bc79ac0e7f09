//! Tests for App input handling

use super::common::*;
use crossterm::event::KeyCode;
use pipeline_demo::app::{App, NotificationLevel, View};
use pipeline_demo_sdk::{AgentStatus, Phase, PipelineState, Timeline};

#[test]
fn test_new_app_is_idle() {
    let app = fast_app();
    assert_eq!(app.state, PipelineState::initial(app.script()));
    assert!(!app.running);
    assert!(!app.should_quit);
    assert!(app.elapsed().is_none());
}

#[test]
fn test_start_key_runs_to_completion() {
    let mut app = fast_app();
    app.handle_key(KeyCode::Char('s'));
    assert!(app.running);
    assert!(app.elapsed().is_some());

    assert!(wait_for_phase(&mut app, Phase::Complete));
    assert!(app
        .state
        .agents
        .values()
        .all(|a| a.status == AgentStatus::Complete));
    assert_eq!(
        app.notifications.latest().unwrap().level,
        NotificationLevel::Success
    );
}

#[test]
fn test_second_start_warns() {
    let mut app = App::new(Timeline::default()).unwrap();
    app.handle_key(KeyCode::Enter);
    app.handle_key(KeyCode::Enter);

    let latest = app.notifications.latest().unwrap();
    assert_eq!(latest.level, NotificationLevel::Warning);
    assert!(app.running);
    app.handle_key(KeyCode::Char('r'));
    assert!(!app.running);
}

#[test]
fn test_reset_key_returns_to_idle() {
    let mut app = fast_app();
    app.handle_key(KeyCode::Char('s'));
    assert!(wait_for_phase(&mut app, Phase::Complete));

    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.state, PipelineState::initial(app.script()));
    assert!(app.elapsed().is_none());
}

#[test]
fn test_quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = fast_app();
        app.handle_key(code);
        assert!(app.should_quit);
    }
}

#[test]
fn test_unbound_key_is_ignored() {
    let mut app = fast_app();
    app.handle_key(KeyCode::Char('x'));
    assert!(!app.running);
    assert!(!app.should_quit);
    assert!(app.notifications.is_empty());
}

#[test]
fn test_view_keys_cycle_and_jump() {
    let mut app = fast_app();
    assert_eq!(app.view, View::Pipeline);

    app.handle_key(KeyCode::Tab);
    assert_eq!(app.view, View::Analytics);
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::Tab);
    assert_eq!(app.view, View::Pipeline);

    app.handle_key(KeyCode::BackTab);
    assert_eq!(app.view, View::Distribution);

    app.handle_key(KeyCode::Char('2'));
    assert_eq!(app.view, View::Analytics);
    app.handle_key(KeyCode::Char('9'));
    assert_eq!(app.view, View::Analytics);
}

#[test]
fn test_switching_views_keeps_the_run_going() {
    let mut app = fast_app();
    app.handle_key(KeyCode::Char('s'));
    app.handle_key(KeyCode::Char('3'));
    assert!(wait_for_phase(&mut app, Phase::Complete));
    assert_eq!(app.view, View::Distribution);
}
