//! Browser state: screens, list rows, selection, and fetch bookkeeping.

use std::time::{Duration, Instant};

use flixterm_api::tmdb::{CatalogItem, MediaKind};

use super::message::FetchMsg;
use crate::nav::{Route, Section};
use crate::tui::carousel::{Advance, Carousel, Direction};

/// Identity of a named catalog list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKey {
    /// Movies now playing in theaters.
    MovieNowPlaying,
    /// Popular movies.
    MoviePopular,
    /// Top rated movies.
    MovieTopRated,
    /// Upcoming movie releases.
    MovieUpcoming,
    /// TV shows airing today.
    TvAiringToday,
    /// Popular TV shows.
    TvPopular,
    /// Top rated TV shows.
    TvTopRated,
    /// TV shows currently on the air.
    TvOnTheAir,
    /// Movie results for the active search keyword.
    SearchMovies,
    /// TV results for the active search keyword.
    SearchTv,
}

impl ListKey {
    /// Returns the row heading shown above the carousel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MovieNowPlaying => "Now Playing",
            Self::MoviePopular | Self::TvPopular => "Popular",
            Self::MovieTopRated | Self::TvTopRated => "Top Rated",
            Self::MovieUpcoming => "Upcoming",
            Self::TvAiringToday => "Airing Today",
            Self::TvOnTheAir => "On The Air",
            Self::SearchMovies => "Movies",
            Self::SearchTv => "TV Shows",
        }
    }

    /// Returns the media kind this list holds.
    #[must_use]
    pub const fn media_kind(self) -> MediaKind {
        match self {
            Self::MovieNowPlaying
            | Self::MoviePopular
            | Self::MovieTopRated
            | Self::MovieUpcoming
            | Self::SearchMovies => MediaKind::Movie,
            Self::TvAiringToday | Self::TvPopular | Self::TvTopRated | Self::TvOnTheAir
            | Self::SearchTv => MediaKind::Tv,
        }
    }

    /// Returns `true` when this list's first item feeds its screen's banner.
    #[must_use]
    pub const fn feeds_banner(self) -> bool {
        matches!(
            self,
            Self::MovieNowPlaying | Self::TvOnTheAir | Self::SearchMovies
        )
    }

    /// Items skipped at the head of the carousel slice (the banner item).
    #[must_use]
    pub const fn lead_exclusion(self) -> usize {
        if self.feeds_banner() { 1 } else { 0 }
    }
}

/// Top-level browser screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Movie lists.
    Movies,
    /// TV show lists.
    Tv,
    /// Keyword search results.
    Search {
        /// The committed search keyword.
        keyword: String,
    },
}

impl Screen {
    /// Returns the screen heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Movies => "Movies",
            Self::Tv => "TV Shows",
            Self::Search { .. } => "Search",
        }
    }

    /// Returns the carousel rows of this screen, in display order.
    #[must_use]
    pub const fn list_keys(&self) -> &'static [ListKey] {
        match self {
            Self::Movies => &[
                ListKey::MovieNowPlaying,
                ListKey::MoviePopular,
                ListKey::MovieTopRated,
                ListKey::MovieUpcoming,
            ],
            Self::Tv => &[
                ListKey::TvAiringToday,
                ListKey::TvPopular,
                ListKey::TvTopRated,
                ListKey::TvOnTheAir,
            ],
            Self::Search { .. } => &[ListKey::SearchMovies, ListKey::SearchTv],
        }
    }

    /// Returns the list whose first item feeds this screen's banner.
    #[must_use]
    pub const fn banner_key(&self) -> ListKey {
        match self {
            Self::Movies => ListKey::MovieNowPlaying,
            Self::Tv => ListKey::TvOnTheAir,
            Self::Search { .. } => ListKey::SearchMovies,
        }
    }
}

/// Loading lifecycle of one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    /// Fetch in flight.
    Loading,
    /// Items available.
    Ready,
    /// Fetch failed after automatic retries.
    Failed {
        /// Display summary of the error.
        message: String,
    },
}

/// An in-flight slide animation for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// Window index the slide started from.
    pub from_index: usize,
    /// Direction of travel.
    pub direction: Direction,
    /// When the slide started.
    pub started: Instant,
}

impl Slide {
    /// Returns the slide progress in `[0, 1]` for the given duration.
    #[must_use]
    pub fn progress(&self, now: Instant, duration: Duration) -> f64 {
        if duration.is_zero() {
            return 1.0;
        }
        (now.duration_since(self.started).as_secs_f64() / duration.as_secs_f64()).min(1.0)
    }
}

/// One carousel row on a screen.
#[derive(Debug)]
pub struct ListRow {
    /// Which named list this row shows.
    pub key: ListKey,
    /// Page-1 items in remote order. The banner item stays in the vector;
    /// the carousel's leading exclusion keeps it out of the window slice.
    pub items: Vec<CatalogItem>,
    /// Loading lifecycle.
    pub phase: ListPhase,
    /// Window position and transition guard.
    pub carousel: Carousel,
    /// Focused tile offset within the visible window.
    pub cursor: usize,
    /// In-flight slide animation, if any.
    pub slide: Option<Slide>,
}

impl ListRow {
    fn new(key: ListKey) -> Self {
        Self {
            key,
            items: Vec::new(),
            phase: ListPhase::Loading,
            carousel: Carousel::new(key.lead_exclusion()),
            cursor: 0,
            slide: None,
        }
    }
}

/// A tile activation passed to the detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The activated item.
    pub item: CatalogItem,
    /// The list the activation came from.
    pub origin: ListKey,
}

/// Input mode for the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode.
    Normal,
    /// Keyword input mode.
    Search,
}

/// State for the browser TUI.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug)]
pub struct BrowserState {
    /// Screen being browsed.
    pub screen: Screen,
    /// Carousel rows for the current screen, in display order.
    pub rows: Vec<ListRow>,
    /// Index of the focused row.
    pub focused_row: usize,
    /// Open detail overlay, if any.
    pub detail: Option<Selection>,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Keyword being typed in search input mode.
    pub search_input: String,
    /// Fetch generation of the mounted screen.
    generation: u64,
    /// Tiles per carousel window.
    window_size: usize,
    /// Slide animation duration.
    slide_duration: Duration,
}

impl BrowserState {
    /// Creates browser state mounted on the given screen.
    #[must_use]
    pub fn new(screen: Screen, window_size: usize, slide_duration: Duration) -> Self {
        let rows = screen.list_keys().iter().copied().map(ListRow::new).collect();
        Self {
            screen,
            rows,
            focused_row: 0,
            detail: None,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            generation: 1,
            window_size,
            slide_duration,
        }
    }

    /// Returns the fetch generation of the mounted screen.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the configured tiles per window.
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the configured slide duration.
    #[must_use]
    pub const fn slide_duration(&self) -> Duration {
        self.slide_duration
    }

    /// Returns the committed keyword when on the search screen.
    #[must_use]
    pub fn search_keyword(&self) -> Option<&str> {
        match &self.screen {
            Screen::Search { keyword } => Some(keyword),
            Screen::Movies | Screen::Tv => None,
        }
    }

    /// Mounts a new screen: bumps the fetch generation and rebuilds the
    /// row set. In-flight results for the old screen become stale.
    pub fn switch_screen(&mut self, screen: Screen) {
        self.generation = self.generation.wrapping_add(1);
        self.rows = screen.list_keys().iter().copied().map(ListRow::new).collect();
        self.screen = screen;
        self.focused_row = 0;
        self.detail = None;
    }

    /// Enters keyword input mode.
    pub fn begin_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.search_input.clear();
    }

    /// Leaves keyword input mode without committing.
    pub fn cancel_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search_input.clear();
    }

    /// Appends a character to the keyword being typed.
    pub fn search_push(&mut self, ch: char) {
        self.search_input.push(ch);
    }

    /// Removes the last character of the keyword being typed.
    pub fn search_pop(&mut self) {
        self.search_input.pop();
    }

    /// Commits the typed keyword, mounting the search screen.
    ///
    /// Returns `false` without changing screens when the keyword is empty.
    pub fn commit_search(&mut self) -> bool {
        let keyword = self.search_input.trim().to_owned();
        if keyword.is_empty() {
            return false;
        }
        self.input_mode = InputMode::Normal;
        self.search_input.clear();
        self.switch_screen(Screen::Search { keyword });
        true
    }

    /// Applies a fetch result. Results tagged with a stale generation are
    /// logged and dropped without touching any row.
    pub fn apply_fetch(&mut self, msg: FetchMsg) {
        if msg.generation() != self.generation {
            tracing::debug!(
                generation = msg.generation(),
                current = self.generation,
                list = msg.key().label(),
                "dropping stale fetch result"
            );
            return;
        }
        let key = msg.key();
        let Some(row) = self.rows.iter_mut().find(|row| row.key == key) else {
            return;
        };
        match msg {
            FetchMsg::Loaded { page, .. } => {
                row.items = page.items;
                row.phase = ListPhase::Ready;
                row.carousel = Carousel::new(key.lead_exclusion());
                row.cursor = 0;
                row.slide = None;
            }
            FetchMsg::Failed { error, .. } => {
                row.phase = ListPhase::Failed { message: error };
            }
        }
    }

    /// Resets every failed row on the current screen to Loading and
    /// returns their keys so the caller can refetch them.
    pub fn retry_failed(&mut self) -> Vec<ListKey> {
        let mut keys = Vec::new();
        for row in &mut self.rows {
            if matches!(row.phase, ListPhase::Failed { .. }) {
                row.phase = ListPhase::Loading;
                row.items.clear();
                keys.push(row.key);
            }
        }
        keys
    }

    /// Moves row focus up.
    pub fn focus_prev_row(&mut self) {
        self.focused_row = self.focused_row.saturating_sub(1);
    }

    /// Moves row focus down.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn focus_next_row(&mut self) {
        if self.focused_row + 1 < self.rows.len() {
            self.focused_row += 1;
        }
    }

    /// Moves the tile cursor within the focused row. Crossing a window
    /// edge requests a one-window advance in that direction.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn move_cursor(&mut self, direction: Direction, now: Instant) {
        let window = self.window_size;
        let Some(row) = self.rows.get_mut(self.focused_row) else {
            return;
        };
        if row.phase != ListPhase::Ready {
            return;
        }
        let visible = row.carousel.visible_slice(&row.items, window).len();
        if visible == 0 {
            return;
        }
        match direction {
            Direction::Forward => {
                if row.cursor + 1 < visible {
                    row.cursor += 1;
                } else {
                    Self::page_row(row, window, direction, now);
                }
            }
            Direction::Backward => {
                if row.cursor > 0 {
                    row.cursor -= 1;
                } else {
                    Self::page_row(row, window, direction, now);
                }
            }
        }
    }

    /// Requests a one-window advance on a row and, if the window moved,
    /// attaches the slide and repositions the cursor.
    fn page_row(row: &mut ListRow, window: usize, direction: Direction, now: Instant) {
        match row.carousel.advance(row.items.len(), window, direction) {
            Advance::Moved {
                from, direction, ..
            } => {
                row.slide = Some(Slide {
                    from_index: from,
                    direction,
                    started: now,
                });
                let visible = row.carousel.visible_slice(&row.items, window).len();
                row.cursor = match direction {
                    Direction::Forward => 0,
                    Direction::Backward => visible.saturating_sub(1),
                };
            }
            Advance::NoOp | Advance::Rejected => {}
        }
    }

    /// Advances slide animations and releases finished or stuck guards.
    ///
    /// A finished slide fires the animation-complete event exactly once. A
    /// row whose guard is held with no slide attached lost its completion
    /// signal and is released by the watchdog.
    pub fn on_tick(&mut self, now: Instant) {
        for row in &mut self.rows {
            if let Some(slide) = row.slide {
                if now.duration_since(slide.started) >= self.slide_duration {
                    row.slide = None;
                    row.carousel.finish_transition();
                }
            } else if row.carousel.is_transitioning() {
                tracing::warn!(list = row.key.label(), "releasing stuck transition guard");
                row.carousel.finish_transition();
            }
        }
    }

    /// Opens the detail overlay for the focused tile.
    pub fn open_detail(&mut self) {
        let Some(row) = self.rows.get(self.focused_row) else {
            return;
        };
        if row.phase != ListPhase::Ready {
            return;
        }
        let visible = row.carousel.visible_slice(&row.items, self.window_size);
        if let Some(item) = visible.get(row.cursor) {
            self.detail = Some(Selection {
                item: item.clone(),
                origin: row.key,
            });
        }
    }

    /// Closes the detail overlay, leaving the list view untouched.
    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Returns the route of the open detail overlay, carrying the search
    /// keyword as a query parameter when arriving from search.
    #[must_use]
    pub fn detail_route(&self) -> Option<Route> {
        let selection = self.detail.as_ref()?;
        let mut route = Route::detail(Section::from(selection.item.kind), selection.item.id);
        if let Screen::Search { keyword } = &self.screen {
            route = route.with_keyword(keyword.clone());
        }
        Some(route)
    }

    /// Returns the banner item once the banner-feeding list is ready.
    #[must_use]
    pub fn banner_item(&self) -> Option<&CatalogItem> {
        let key = self.screen.banner_key();
        self.rows
            .iter()
            .find(|row| row.key == key)
            .filter(|row| row.phase == ListPhase::Ready)
            .and_then(|row| row.items.first())
    }
}
