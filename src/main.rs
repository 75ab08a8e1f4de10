use oneline::adapters::ReqwestHttpClient;
use oneline::app::App;
use oneline::session::{CredentialsManager, SessionManager};
use oneline::store::StoreClient;
use oneline::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Set up file-based logging so the alternate screen stays clean.
///
/// Logs go to `~/.oneline/oneline.log`; `RUST_LOG` controls the filter.
fn init_logging() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    let dir = home.join(".oneline");
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::options()
        .create(true)
        .append(true)
        .open(dir.join("oneline.log"))
    else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(file)
        .with_ansi(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let http = Arc::new(ReqwestHttpClient::new());
    let store = StoreClient::from_env(http);
    let credentials =
        CredentialsManager::new().ok_or_else(|| eyre!("could not determine home directory"))?;
    let sessions = SessionManager::new(store.clone(), credentials);

    let (message_tx, mut message_rx) = mpsc::unbounded_channel();
    let mut app = App::new(store, sessions, message_tx);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Attempt session restore, then load the feed either way.
    app.start_session_restore();

    let mut event_stream = EventStream::new();
    let run_result = loop {
        if let Err(err) = terminal.draw(|frame| ui::render(frame, &app)) {
            break Err(err.into());
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(250));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => break Err(err.into()),
                    None => break Ok(()),
                }
            }

            message = message_rx.recv() => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Terminal teardown; always restore even if the loop errored.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
