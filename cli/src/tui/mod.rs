pub mod app;
pub mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lotwatch_core::DashboardController;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::tui::app::App;

pub async fn run(controller: DashboardController, interval_secs: u64) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(controller, interval_secs);
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Initial fetch right away; afterwards one fetch per elapsed interval.
    app.spawn_fetch(tx.clone());
    let mut next_refresh = Instant::now() + app.refresh_interval;

    loop {
        // Completed fetches, oldest first. Each one re-renders its charts, so
        // with several in flight the last completed result wins.
        while let Ok(result) = rx.try_recv() {
            app.apply(result);
        }

        terminal.draw(|f| ui::draw(f, app))?;

        // The schedule never waits for earlier fetches; slow cycles overlap.
        if Instant::now() >= next_refresh {
            app.spawn_fetch(tx.clone());
            next_refresh = Instant::now() + app.refresh_interval;
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('r') => app.spawn_fetch(tx.clone()),
                        _ => {}
                    }
                }
            }
        }
    }
}
