use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::io::{self, Write};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use svn_timemachine::cli::Cli;
use svn_timemachine::config::{Config, RunMode};
use svn_timemachine::input::map_key_to_intent;
use svn_timemachine::repository::{SvnClient, SvnProcess};
use svn_timemachine::viewmodel::{Action, AppViewModel, Navigator, ViewMode};
use svn_timemachine::view::{detail_pane_height, render_recent, render_source};

/// Rows taken by header, footer and borders around the source list
const CHROME_ROWS: u16 = 8;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli, |key| std::env::var(key).ok())?;

    init_logging(&config)?;
    tracing::info!(target_url = %config.target, svn = %config.svn_program, mode = ?config.mode, "starting");

    let client = SvnClient::new(SvnProcess::new(config.svn_program.clone()), config.target.clone())
        .with_log_limit(config.log_limit);

    match config.mode {
        RunMode::PrintRecent => {
            let mut stdout = io::stdout().lock();
            for revision in client.list_recent_revisions()? {
                writeln!(stdout, "r{}", revision)?;
            }
            Ok(())
        }
        RunMode::PrintDetails(revision) => {
            print!("{}", client.verbose_log(revision)?);
            Ok(())
        }
        RunMode::PrintHtml => {
            let navigator = Navigator::open(client, config.start_revision)?;
            print!("{}", navigator.html());
            Ok(())
        }
        RunMode::Interactive => {
            eprintln!("Loading {} ...", config.target);
            let navigator = Navigator::open(client, config.start_revision)
                .with_context(|| format!("Could not open {}", config.target))?;
            run_tui(AppViewModel::new(navigator, config.export_dir()))
        }
    }
}

/// Interactive runs log to a file so output does not tear the terminal UI
fn init_logging(config: &Config) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.mode.is_interactive() {
        fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("Could not create {}", config.data_dir.display()))?;
        let log_file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_file())
            .with_context(|| format!("Could not open log file {}", config.log_file().display()))?;

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(log_file)))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
    Ok(())
}

fn run_tui(mut app: AppViewModel<SvnProcess>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppViewModel<SvnProcess>,
) -> Result<()> {
    loop {
        let height = terminal.size()?.height;
        let detail_rows = detail_pane_height(app.detail().is_some());
        app.set_page_size(height.saturating_sub(CHROME_ROWS + detail_rows) as usize);

        // Render
        let vm: &AppViewModel<SvnProcess> = app;
        terminal.draw(|f| {
            let area = f.area();
            match vm.view_mode() {
                ViewMode::Source => render_source(f, vm, area),
                ViewMode::Recent => render_recent(f, vm, area),
            }
        })?;

        // Handle input; svn calls block until they finish
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(intent) = map_key_to_intent(&key, app.input_view_mode()) {
                    match app.handle_intent(intent) {
                        Action::Quit => return Ok(()),
                        Action::Redraw => {}
                    }
                }
            }
        }
    }
}
