//! Messages sent from fetch tasks back to the UI event loop.

use flixterm_api::tmdb::MediaPage;

use super::state::ListKey;

/// Result of one list fetch, tagged with the generation it was spawned under.
#[derive(Debug)]
pub enum FetchMsg {
    /// The fetch succeeded.
    Loaded {
        /// Generation of the screen that requested the fetch.
        generation: u64,
        /// List the page belongs to.
        key: ListKey,
        /// First result page.
        page: MediaPage,
    },
    /// The fetch failed after automatic retries.
    Failed {
        /// Generation of the screen that requested the fetch.
        generation: u64,
        /// List that failed.
        key: ListKey,
        /// Display summary of the error.
        error: String,
    },
}

impl FetchMsg {
    /// Returns the generation tag.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        match self {
            Self::Loaded { generation, .. } | Self::Failed { generation, .. } => *generation,
        }
    }

    /// Returns the list the message belongs to.
    #[must_use]
    pub const fn key(&self) -> ListKey {
        match self {
            Self::Loaded { key, .. } | Self::Failed { key, .. } => *key,
        }
    }
}
