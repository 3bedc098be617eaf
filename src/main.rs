use libris::api::LibraryClient;
use libris::app::App;
use libris::config::Config;
use libris::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook};
use libris::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("libris {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;
    init_logging();
    setup_panic_hook();

    let config = Config::load();
    tracing::info!(api_url = %config.api_url, "starting");

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(LibraryClient::new(&config.api_url));

    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = runtime.block_on(run_app(&mut terminal, &mut app, &config));

    leave_tui_mode(&mut io::stdout());
    result
}

/// Logs go to a file; stdout belongs to the TUI.
///
/// Filter via `RUST_LOG`, default `libris=info`. Logging is skipped
/// entirely when the log file cannot be created.
fn init_logging() {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join("libris")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("libris.log")) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("libris=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &Config,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut refresh = tokio::time::interval(Duration::from_secs(config.refresh_secs.max(1)));

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message channel already taken"))?;

    // Initial load before the first frame
    app.refresh_all();

    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        let tick = tokio::time::sleep(Duration::from_millis(120));

        tokio::select! {
            _ = tick => {
                app.tick();
            }

            // Periodic dashboard refresh keeps the stats current without
            // user interaction
            _ = refresh.tick() => {
                app.refresh_stats();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(%e, "input stream error");
                    }
                    None => break,
                }
            }

            message = message_rx.recv() => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
