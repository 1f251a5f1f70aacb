//! TMDB API v3 client.
//!
//! Covers the listing endpoints the browser renders (now playing, popular,
//! top rated, upcoming, airing today, on the air), keyword search for
//! movies and TV, request pacing, and bounded retry on HTTP 429.

mod api;
mod client;
mod error;
mod images;
mod throttle;
mod types;

pub use api::{CatalogApi, LocalCatalogApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::TmdbError;
pub use images::{ImageSize, PLACEHOLDER_IMAGE_URL, image_url};
pub use types::{
    CatalogItem, DateWindow, ListParams, MediaKind, MediaPage, MovieListKind, MoviePage,
    MovieSummary, TmdbErrorResponse, TvListKind, TvPage, TvShowSummary,
};
