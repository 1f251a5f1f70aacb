//! Route formatting and external URL building.

use std::fmt;

use flixterm_api::tmdb::MediaKind;

/// TMDB public website base URL.
pub const TMDB_WEB_BASE_URL: &str = "https://www.themoviedb.org";

/// Browseable catalog section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Movie lists.
    Movies,
    /// TV show lists.
    Tv,
}

impl Section {
    /// Returns the route path segment for this section.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Movies => "movies",
            Self::Tv => "tv",
        }
    }
}

impl From<MediaKind> for Section {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Movie => Self::Movies,
            MediaKind::Tv => Self::Tv,
        }
    }
}

/// A detail route such as `/movies/603` or `/tv/1396?keyword=dune`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Catalog section the item belongs to.
    pub section: Section,
    /// TMDB item ID.
    pub item_id: u64,
    /// Search keyword carried over from the search screen.
    pub keyword: Option<String>,
}

impl Route {
    /// Builds a detail route for an item.
    #[must_use]
    pub const fn detail(section: Section, item_id: u64) -> Self {
        Self {
            section,
            item_id,
            keyword: None,
        }
    }

    /// Attaches a search keyword as a query parameter.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.section.as_path(), self.item_id)?;
        if let Some(keyword) = &self.keyword {
            write!(f, "?keyword={keyword}")?;
        }
        Ok(())
    }
}

/// Builds the TMDB website URL for an item, e.g. `https://www.themoviedb.org/movie/603`.
#[must_use]
pub fn tmdb_web_url(kind: MediaKind, id: u64) -> String {
    format!("{TMDB_WEB_BASE_URL}/{}/{id}", kind.as_str())
}
