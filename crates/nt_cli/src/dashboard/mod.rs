//! Terminal dashboard. Paints the current view ten times a second and maps
//! keys onto reload, scroll and quit.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::Show;
use crossterm::event::{Event, EventStream};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use futures_util::StreamExt;
use nt_core::{render, SummaryProvider, ViewController, ViewState};
use tracing::info;
use tui::backend::{Backend, CrosstermBackend};
use tui::Terminal;

pub mod app;
pub mod ui;

use app::{columns_for, rows_for, translate_key, Action, App};

const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Raw mode is the first thing switched on, and once it is on the terminal is
/// restored on every exit path, including a failed setup.
pub async fn run(provider: Arc<dyn SummaryProvider>) -> anyhow::Result<()> {
    enable_raw_mode()?;

    let result = session(provider).await;

    let restored = restore(&mut io::stdout());
    disable_raw_mode()?;
    result.and(restored.map_err(Into::into))
}

async fn session(provider: Arc<dyn SummaryProvider>) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    event_loop(&mut terminal, provider).await
}

/// Leaves the alternate screen and shows the cursor again.
fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    provider: Arc<dyn SummaryProvider>,
) -> anyhow::Result<()> {
    let mut controller = ViewController::mount(provider);
    let mut app = App::default();
    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);

    loop {
        let state = controller.state();
        let screen = render(&state);
        terminal.draw(|f| ui::draw(f, &screen, &app))?;

        tokio::select! {
            _ = frames.tick() => app.tick(),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => match translate_key(key) {
                    Action::Quit => break,
                    Action::Reload => {
                        info!("reloading dashboard");
                        controller = controller.reload();
                        app.reset();
                    }
                    Action::ScrollUp => app.scroll_up(),
                    Action::ScrollDown => {
                        let width = terminal.size()?.width;
                        app.scroll_down(card_rows(&state, width));
                    }
                    Action::None => {}
                },
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            }
        }
    }

    Ok(())
}

fn card_rows(state: &ViewState, width: u16) -> usize {
    match state {
        ViewState::Ready { records } => rows_for(records.len(), columns_for(width)),
        _ => 0,
    }
}
