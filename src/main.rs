//! Demo request form - terminal host
//!
//! Mounts the SeriousERP demo request form in the terminal and submits it
//! to the configured endpoint.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use demo_request_form::app::App;
use demo_request_form::config::{FormConfig, LOG_FILE_NAME};
use demo_request_form::host::{mount, MountOptions, MountSurface};
use demo_request_form::submit::HttpTransport;
use demo_request_form::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The terminal exposes a single mount target
struct TerminalSurface {
    target: String,
}

impl MountSurface for TerminalSurface {
    fn contains_target(&self, target_id: &str) -> bool {
        self.target == target_id
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to a file; stderr would draw over the alternate screen
    let log_dir = FormConfig::log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (log_writer, log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demo_request_form=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer),
        )
        .init();

    let config = FormConfig::load().context("failed to load configuration")?;
    let endpoint = config.endpoint();
    let transport = HttpTransport::new(&endpoint, config.timeout())?;
    tracing::info!(endpoint = %endpoint, "using submission endpoint");

    let surface = TerminalSurface {
        target: config.mount_target().to_string(),
    };
    let options = MountOptions::new(config.catalog(), Arc::new(transport));
    let Some(handle) = mount(&surface, config.mount_target(), &options) else {
        anyhow::bail!("could not mount the form on '{}'", config.mount_target());
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(handle);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.into_handle().teardown();

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = %err, "terminal host stopped");
        drop(log_guard);
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    drop(log_guard);
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key).await,
                Event::Resize(_width, _height) => {
                    // Redrawn on the next iteration
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
