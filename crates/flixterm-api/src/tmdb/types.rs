//! TMDB API type definitions.
//!
//! Wire types mirror the JSON shapes of the v3 listing and search
//! endpoints; [`CatalogItem`] and [`MediaPage`] are the unified views the
//! rest of the program consumes.

use serde::{Deserialize, Serialize};

/// Movie listing categories (`GET /movie/<kind>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieListKind {
    /// Movies currently in theatres.
    NowPlaying,
    /// Movies ordered by popularity.
    Popular,
    /// Movies ordered by vote average.
    TopRated,
    /// Movies releasing soon.
    Upcoming,
}

impl MovieListKind {
    /// Endpoint path relative to the API base URL.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::NowPlaying => "movie/now_playing",
            Self::Popular => "movie/popular",
            Self::TopRated => "movie/top_rated",
            Self::Upcoming => "movie/upcoming",
        }
    }
}

/// TV listing categories (`GET /tv/<kind>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TvListKind {
    /// Series with an episode airing today.
    AiringToday,
    /// Series with an episode airing within the next week.
    OnTheAir,
    /// Series ordered by popularity.
    Popular,
    /// Series ordered by vote average.
    TopRated,
}

impl TvListKind {
    /// Endpoint path relative to the API base URL.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::AiringToday => "tv/airing_today",
            Self::OnTheAir => "tv/on_the_air",
            Self::Popular => "tv/popular",
            Self::TopRated => "tv/top_rated",
        }
    }
}

/// Common query parameters for listing and search endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Language tag for localized fields (default: `en-US`).
    pub language: String,
    /// Result page to fetch (default: 1).
    pub page: u32,
    /// Whether search results may include adult titles (default: false).
    pub include_adult: bool,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            language: String::from("en-US"),
            page: 1,
            include_adult: false,
        }
    }
}

impl ListParams {
    /// Creates parameters with the defaults above.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the language tag.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets adult-content inclusion for search endpoints.
    #[must_use]
    pub const fn include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = include_adult;
        self
    }
}

/// One movie record within a listing or search response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Title in the original language.
    pub original_title: String,
    /// ISO 639-1 code of the original language.
    pub original_language: String,
    /// Release date (`YYYY-MM-DD`), absent or empty when unannounced.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Synopsis, absent or empty for obscure titles.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Average vote, 0-10.
    pub vote_average: f64,
    /// Number of votes.
    pub vote_count: u32,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Adult title flag.
    pub adult: bool,
    /// Whether this entry is a video release rather than a theatrical one.
    pub video: bool,
    /// Poster image path fragment.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path fragment.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// One TV series record within a listing or search response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TvShowSummary {
    /// TMDB series ID.
    pub id: u64,
    /// Localized series name.
    pub name: String,
    /// Name in the original language.
    pub original_name: String,
    /// ISO 639-1 code of the original language.
    pub original_language: String,
    /// First air date (`YYYY-MM-DD`), absent or empty when unaired.
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Synopsis, absent or empty for obscure titles.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Average vote, 0-10.
    pub vote_average: f64,
    /// Number of votes.
    pub vote_count: u32,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Origin country codes.
    pub origin_country: Vec<String>,
    /// Poster image path fragment.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path fragment.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// Release-date window attached to `now_playing` / `upcoming` responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    /// Latest release date in the window.
    pub maximum: String,
    /// Earliest release date in the window.
    pub minimum: String,
}

/// Paged envelope for movie listing and search responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviePage {
    /// Release-date window (present on `now_playing` and `upcoming`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<DateWindow>,
    /// Page number of this response.
    pub page: u32,
    /// Movie records in remote order.
    pub results: Vec<MovieSummary>,
    /// Total pages available.
    pub total_pages: u32,
    /// Total results available.
    pub total_results: u32,
}

/// Paged envelope for TV listing and search responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TvPage {
    /// Page number of this response.
    pub page: u32,
    /// Series records in remote order.
    pub results: Vec<TvShowSummary>,
    /// Total pages available.
    pub total_pages: u32,
    /// Total results available.
    pub total_results: u32,
}

/// Error body returned by the API on non-success statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TmdbErrorResponse {
    /// TMDB status code (not the HTTP status).
    pub status_code: u32,
    /// Human-readable message.
    pub status_message: String,
    /// Always false on errors.
    pub success: bool,
}

/// Media classification of a unified catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Feature film.
    Movie,
    /// TV series.
    Tv,
}

impl MediaKind {
    /// Path segment used by TMDB web URLs (`movie` / `tv`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

/// A movie or show record, unified across the two wire shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    /// TMDB ID, unique within its media kind.
    pub id: u64,
    /// Movie or TV series.
    pub kind: MediaKind,
    /// Display title (movie title or series name).
    pub title: String,
    /// Synopsis; empty when the API has none.
    pub overview: String,
    /// Backdrop image path fragment, when one exists.
    pub backdrop_path: Option<String>,
    /// Poster image path fragment, when one exists.
    pub poster_path: Option<String>,
    /// Average vote, 0-10.
    pub vote_average: f64,
    /// Release date or first air date, when known.
    pub date: Option<String>,
}

/// Normalizes the API's "absent or empty string" date convention.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<MovieSummary> for CatalogItem {
    fn from(movie: MovieSummary) -> Self {
        Self {
            id: movie.id,
            kind: MediaKind::Movie,
            title: movie.title,
            overview: movie.overview.unwrap_or_default(),
            backdrop_path: non_empty(movie.backdrop_path),
            poster_path: non_empty(movie.poster_path),
            vote_average: movie.vote_average,
            date: non_empty(movie.release_date),
        }
    }
}

impl From<TvShowSummary> for CatalogItem {
    fn from(show: TvShowSummary) -> Self {
        Self {
            id: show.id,
            kind: MediaKind::Tv,
            title: show.name,
            overview: show.overview.unwrap_or_default(),
            backdrop_path: non_empty(show.backdrop_path),
            poster_path: non_empty(show.poster_path),
            vote_average: show.vote_average,
            date: non_empty(show.first_air_date),
        }
    }
}

/// A fetched page of catalog items, unified across movie and TV responses.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPage {
    /// Items in remote order.
    pub items: Vec<CatalogItem>,
    /// Page number of this response.
    pub page: u32,
    /// Total pages available.
    pub total_pages: u32,
    /// Total results available.
    pub total_results: u32,
    /// Release-date window, when the endpoint provides one.
    pub dates: Option<DateWindow>,
}

impl From<MoviePage> for MediaPage {
    fn from(page: MoviePage) -> Self {
        Self {
            items: page.results.into_iter().map(CatalogItem::from).collect(),
            page: page.page,
            total_pages: page.total_pages,
            total_results: page.total_results,
            dates: page.dates,
        }
    }
}

impl From<TvPage> for MediaPage {
    fn from(page: TvPage) -> Self {
        Self {
            items: page.results.into_iter().map(CatalogItem::from).collect(),
            page: page.page,
            total_pages: page.total_pages,
            total_results: page.total_results,
            dates: None,
        }
    }
}
