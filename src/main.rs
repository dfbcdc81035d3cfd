mod app;
mod config;
mod data;
mod event;
mod model;
mod ui;
mod watcher;

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self as ct_event, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::App;
use crate::config::TICK_RATE_MS;
use crate::data::store::FileStore;
use crate::event::AppEvent;

#[derive(Parser)]
#[command(
    name = "devdock",
    version,
    about = "devdock - dev folder browser and project launcher",
    override_help = HELP_TEXT,
)]
struct Cli {
    /// Development folder tree to browse (overrides ~/.devdock.toml)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Default port for projects whose manifest declares none
    #[arg(long)]
    port: Option<String>,
}

const HELP_TEXT: &str = "\
devdock - dev folder browser and project launcher

USAGE:
  devdock [OPTIONS]

Browses the configured development folder tree, ranks folders by how
recently you opened them, and launches the project workflow (editor,
dev server port, browser) when you select one.

OPTIONS:
  --root <DIR>      Folder tree to browse [default: root from
                    ~/.devdock.toml, else ~/dev]
  --port <PORT>     Default port when a project declares none [default: 3000]
  -h, --help        Print this help
  -V, --version     Print version

CONFIG (~/.devdock.toml):
  root = \"/home/me/dev\"
  default_port = \"3000\"
  editor = \"code\"
  browser = \"xdg-open\"

TUI KEYBINDINGS:
  j/k  Up/Down       Navigate list
  Enter              Open: descend into folder or launch project
  Backspace / h      Go to parent folder
  g / G              Jump to top / bottom
  /                  Filter by name or boost tag (hot/recent/opened)
  r                  Reload listing
  ?                  Toggle help overlay
  q / Ctrl+C         Quit

EXAMPLES:
  devdock
  devdock --root ~/work --port 8080";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut prefs = config::load_preferences();
    if let Some(root) = cli.root {
        prefs.root = Some(root.to_string_lossy().to_string());
    }
    if let Some(port) = cli.port {
        prefs.default_port = Some(port);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, prefs);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {}", e);
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    prefs: config::Preferences,
) -> Result<()> {
    let store = FileStore::new(config::app_home());
    let mut app = App::new(prefs, Box::new(store));

    let (tx, rx) = mpsc::channel::<AppEvent>();
    app.event_tx = Some(tx.clone());

    app.list_entries();

    // Watch the directory being listed; re-arm whenever navigation moves.
    let mut watched_dir = app.current_dir();
    let mut _debouncer = watcher::start_watcher(&watched_dir, tx.clone()).ok();

    let tick_rate = Duration::from_millis(TICK_RATE_MS);
    let mut last_tick = Instant::now();

    loop {
        if app.dirty {
            terminal.draw(|f| ui::draw(f, &app))?;
            app.dirty = false;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if ct_event::poll(timeout)? {
            if let Event::Key(key) = ct_event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                    app.mark_dirty();
                }
            }
        }

        while let Ok(evt) = rx.try_recv() {
            match evt {
                AppEvent::TreeChanged => app.list_entries(),
                AppEvent::LaunchComplete(err) => app.handle_launch_complete(err),
            }
            app.mark_dirty();
        }

        let current = app.current_dir();
        if current != watched_dir {
            _debouncer = watcher::start_watcher(&current, tx.clone()).ok();
            watched_dir = current;
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
            app.clear_stale_status();
            app.mark_dirty();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keybindings (always active)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Esc if app.show_help => {
            app.show_help = false;
            return;
        }
        _ => {}
    }

    if app.show_help {
        return;
    }

    // Filter mode - text input
    if app.filter_mode {
        match key.code {
            KeyCode::Esc => app.cancel_filter(),
            KeyCode::Enter => app.filter_mode = false,
            KeyCode::Backspace => app.pop_filter_char(),
            KeyCode::Char(c) => app.push_filter_char(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = !app.show_help,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.navigate_down(),
        KeyCode::Char('k') | KeyCode::Up => app.navigate_up(),
        KeyCode::Char('g') => app.jump_top(),
        KeyCode::Char('G') => app.jump_bottom(),

        // Open: descend or launch
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.activate(),

        // Parent folder
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => app.ascend(),

        // Filter
        KeyCode::Char('/') => app.start_filter(),

        // Refresh
        KeyCode::Char('r') => app.list_entries(),

        _ => {}
    }
}
