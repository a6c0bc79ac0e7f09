use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pipeline_demo_sdk::{PipelineScript, Timeline, TimelinePlayer};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use pipeline_demo::app::App;
use pipeline_demo::cli::Args;
use pipeline_demo::{headless, logging, ui};

fn main() -> Result<()> {
    let args = Args::parse();
    let timeline = args.timeline()?;

    if args.headless {
        logging::init_stderr();
        return run_headless(timeline);
    }

    logging::init_for_dashboard(args.log_file.as_deref())?;
    run_dashboard(timeline, args.autostart)
}

fn run_headless(timeline: Timeline) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let player = TimelinePlayer::new(
            Arc::new(PipelineScript::standard()),
            timeline,
            tokio::runtime::Handle::current(),
        );
        let stdout = io::stdout();
        let mut out = stdout.lock();
        headless::replay(&player, &mut out).await?;
        Ok::<(), anyhow::Error>(())
    })
}

fn run_dashboard(timeline: Timeline, autostart: bool) -> Result<()> {
    let mut app = App::new(timeline)?;
    if autostart {
        app.start();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }
    info!("dashboard closed");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.poll();

        terminal.draw(|f| ui::ui(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            app.player.reset();
            return Ok(());
        }
    }
}
