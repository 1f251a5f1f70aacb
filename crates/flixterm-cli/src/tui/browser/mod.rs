//! Movie and TV browsing TUI main loop.

/// Browser state types.
pub mod state;

mod fetch;
mod message;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use flixterm_api::tmdb::{CatalogApi, ListParams};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use self::fetch::spawn_list_fetch;
use self::message::FetchMsg;
use self::state::{BrowserState, InputMode, ListKey, Screen};
use crate::config::AppConfig;
use crate::nav::tmdb_web_url;
use crate::tui::carousel::Direction;

/// Runs the browsing TUI starting on the given screen.
///
/// Must run inside a Tokio runtime: list fetches are spawned as tasks and
/// report back over a channel the event loop drains between frames.
///
/// # Errors
///
/// Returns an error if terminal setup or event handling fails.
#[allow(clippy::module_name_repetitions)]
pub fn run_browser<C>(api: Arc<C>, config: &AppConfig, screen: Screen) -> Result<()>
where
    C: CatalogApi + Send + Sync + 'static,
{
    let params = ListParams::new()
        .language(config.api.language.as_str())
        .include_adult(config.api.include_adult);

    let mut state = BrowserState::new(
        screen,
        config.ui.window_size,
        Duration::from_millis(config.ui.slide_duration_ms),
    );

    let (tx, mut rx) = mpsc::channel(32);
    let mut fetcher = Fetcher::new(api, params, tx);
    fetcher.spawn_screen(&state);

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let result = run_event_loop(&mut terminal, &mut state, &mut rx, &mut fetcher, tick_rate);

    fetcher.abort_all();

    // Cleanup (always attempt even if event loop failed)
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;

    result
}

/// Spawns list fetches and tracks their handles so a screen switch can
/// abort requests for lists that are no longer mounted.
struct Fetcher<C> {
    api: Arc<C>,
    params: ListParams,
    tx: mpsc::Sender<FetchMsg>,
    handles: Vec<JoinHandle<()>>,
}

impl<C> Fetcher<C>
where
    C: CatalogApi + Send + Sync + 'static,
{
    fn new(api: Arc<C>, params: ListParams, tx: mpsc::Sender<FetchMsg>) -> Self {
        Self {
            api,
            params,
            tx,
            handles: Vec::new(),
        }
    }

    /// Spawns fetches for every list of the current screen.
    fn spawn_screen(&mut self, state: &BrowserState) {
        let keys: Vec<ListKey> = state.rows.iter().map(|row| row.key).collect();
        self.spawn_keys(state, &keys);
    }

    /// Spawns fetches for the given lists, tagged with the current generation.
    fn spawn_keys(&mut self, state: &BrowserState, keys: &[ListKey]) {
        let keyword = state.search_keyword().map(ToOwned::to_owned);
        for &key in keys {
            self.handles.push(spawn_list_fetch(
                Arc::clone(&self.api),
                key,
                keyword.clone(),
                self.params.clone(),
                state.generation(),
                self.tx.clone(),
            ));
        }
    }

    /// Aborts stale fetches, then spawns the new screen's lists.
    fn respawn_screen(&mut self, state: &BrowserState) {
        self.abort_all();
        self.spawn_screen(state);
    }

    fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

/// Main event loop.
fn run_event_loop<C>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut BrowserState,
    rx: &mut mpsc::Receiver<FetchMsg>,
    fetcher: &mut Fetcher<C>,
    tick_rate: Duration,
) -> Result<()>
where
    C: CatalogApi + Send + Sync + 'static,
{
    loop {
        while let Ok(msg) = rx.try_recv() {
            state.apply_fetch(msg);
        }

        terminal
            .draw(|frame| ui::draw(frame, state, Instant::now()))
            .context("failed to draw TUI")?;

        if event::poll(tick_rate).context("failed to poll events")?
            && let Event::Key(key) = event::read().context("failed to read event")?
            && key.kind == KeyEventKind::Press
        {
            if state.detail.is_some() {
                handle_detail_input(state, key.code);
            } else {
                match state.input_mode {
                    InputMode::Search => handle_search_input(state, fetcher, key.code),
                    InputMode::Normal => {
                        if handle_normal_input(state, fetcher, key.code, key.modifiers) {
                            return Ok(());
                        }
                    }
                }
            }
        }

        state.on_tick(Instant::now());
    }
}

/// Handles key input while the detail overlay is open.
fn handle_detail_input(state: &mut BrowserState, key: KeyCode) {
    match key {
        KeyCode::Esc => state.close_detail(),
        KeyCode::Char('o') => open_detail_url(state),
        _ => {}
    }
}

/// Handles key input in search mode.
fn handle_search_input<C>(state: &mut BrowserState, fetcher: &mut Fetcher<C>, key: KeyCode)
where
    C: CatalogApi + Send + Sync + 'static,
{
    match key {
        KeyCode::Esc => state.cancel_search(),
        KeyCode::Enter => {
            if state.commit_search() {
                fetcher.respawn_screen(state);
            }
        }
        KeyCode::Backspace => state.search_pop(),
        KeyCode::Char(c) => state.search_push(c),
        _ => {}
    }
}

/// Handles key input in normal mode. Returns `true` to exit.
fn handle_normal_input<C>(
    state: &mut BrowserState,
    fetcher: &mut Fetcher<C>,
    key: KeyCode,
    modifiers: KeyModifiers,
) -> bool
where
    C: CatalogApi + Send + Sync + 'static,
{
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('1') => {
            if state.screen != Screen::Movies {
                state.switch_screen(Screen::Movies);
                fetcher.respawn_screen(state);
            }
        }
        KeyCode::Char('2') => {
            if state.screen != Screen::Tv {
                state.switch_screen(Screen::Tv);
                fetcher.respawn_screen(state);
            }
        }
        KeyCode::Char('/') => state.begin_search(),
        KeyCode::Up | KeyCode::Char('k') => state.focus_prev_row(),
        KeyCode::Down | KeyCode::Char('j') => state.focus_next_row(),
        KeyCode::Left | KeyCode::Char('h') => {
            state.move_cursor(Direction::Backward, Instant::now());
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.move_cursor(Direction::Forward, Instant::now());
        }
        KeyCode::Enter => state.open_detail(),
        KeyCode::Char('r') => {
            let keys = state.retry_failed();
            if !keys.is_empty() {
                fetcher.spawn_keys(state, &keys);
            }
        }
        _ => {}
    }
    false
}

/// Opens the TMDB web page for the current detail selection.
fn open_detail_url(state: &BrowserState) {
    let Some(selection) = &state.detail else {
        return;
    };
    let url = tmdb_web_url(selection.item.kind, selection.item.id);
    let _ = open::that(&url);
}
