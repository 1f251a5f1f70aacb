//! `CatalogApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::TmdbError;
use super::types::{ListParams, MediaPage, MovieListKind, TvListKind};

/// Catalog operations the browser UI consumes.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(CatalogApi: Send)]
pub trait LocalCatalogApi {
    /// Fetches one page of a movie listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn movie_list(
        &self,
        kind: MovieListKind,
        params: &ListParams,
    ) -> Result<MediaPage, TmdbError>;

    /// Fetches one page of a TV listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn tv_list(&self, kind: TvListKind, params: &ListParams)
    -> Result<MediaPage, TmdbError>;

    /// Searches movies by keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn search_movies(
        &self,
        keyword: &str,
        params: &ListParams,
    ) -> Result<MediaPage, TmdbError>;

    /// Searches TV series by keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn search_tv(&self, keyword: &str, params: &ListParams)
    -> Result<MediaPage, TmdbError>;
}
