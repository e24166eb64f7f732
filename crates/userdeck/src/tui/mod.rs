//! Interactive single-screen user pager.

mod app;
mod terminal;
mod theme;
mod view;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use tracing::{error, info};
use userdeck_source::UserSource;
use userdeck_types::ThemeMode;

use app::{App, Hitboxes};

const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Runs the screen until the user quits.
///
/// The users are fetched exactly once, in a background task started before the
/// first draw. Quitting before the fetch resolves discards its result.
pub async fn run(source: Arc<dyn UserSource>, count: u32, theme: ThemeMode) -> Result<()> {
    let mut terminal = terminal::setup()?;
    let result = run_loop(&mut terminal, source, count, theme).await;
    terminal::restore();
    result
}

async fn run_loop(
    terminal: &mut terminal::Tui,
    source: Arc<dyn UserSource>,
    count: u32,
    theme: ThemeMode,
) -> Result<()> {
    let mut app = App::new(theme);
    app.pager.begin_loading();

    info!(count, "Starting user fetch");
    let mut fetch = tokio::spawn(async move { source.fetch_users(count).await });
    let mut fetch_done = false;

    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    loop {
        let mut hitboxes = Hitboxes::default();
        terminal.draw(|frame| hitboxes = view::render(frame, &app))?;
        app.hitboxes = hitboxes;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => app.handle_event(event),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            joined = &mut fetch, if !fetch_done => {
                fetch_done = true;
                match joined {
                    Ok(result) => app.pager.finish_loading(result),
                    Err(e) => {
                        error!("Fetch task failed: {}", e);
                        app.pager.set_errored();
                    }
                }
            }
            _ = ticker.tick(), if app.pager.is_loading() => app.tick(),
        }

        if app.should_quit() {
            break;
        }
    }

    info!("Exiting");
    Ok(())
}
