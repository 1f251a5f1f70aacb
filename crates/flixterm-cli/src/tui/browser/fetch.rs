//! Fetch orchestration: one task per list fetch with bounded retry.

use std::sync::Arc;
use std::time::Duration;

use flixterm_api::tmdb::{
    CatalogApi, ListParams, MediaPage, MovieListKind, TmdbError, TvListKind,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::message::FetchMsg;
use super::state::ListKey;

/// Maximum automatic retries for a transient fetch failure.
const FETCH_MAX_RETRIES: u32 = 3;

/// Initial retry backoff, doubled after each failed attempt.
const FETCH_INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Spawns one fetch task for a list. The result arrives on `tx` as a
/// [`FetchMsg`] tagged with `generation`; the returned handle lets the
/// caller abort the task when its screen unmounts.
pub fn spawn_list_fetch<C>(
    api: Arc<C>,
    key: ListKey,
    keyword: Option<String>,
    params: ListParams,
    generation: u64,
    tx: mpsc::Sender<FetchMsg>,
) -> JoinHandle<()>
where
    C: CatalogApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let result = fetch_with_retry(
            api.as_ref(),
            key,
            keyword.as_deref(),
            &params,
            FETCH_INITIAL_BACKOFF,
        )
        .await;
        let msg = match result {
            Ok(page) => FetchMsg::Loaded {
                generation,
                key,
                page,
            },
            Err(err) => FetchMsg::Failed {
                generation,
                key,
                error: err.to_string(),
            },
        };
        if tx.send(msg).await.is_err() {
            tracing::debug!(list = key.label(), "fetch result dropped, receiver closed");
        }
    })
}

/// Fetches one list, retrying transient failures with exponential backoff.
/// Non-transient failures fail fast.
#[allow(clippy::arithmetic_side_effects)]
async fn fetch_with_retry<C: CatalogApi>(
    api: &C,
    key: ListKey,
    keyword: Option<&str>,
    params: &ListParams,
    initial_backoff: Duration,
) -> Result<MediaPage, TmdbError> {
    let mut retry: u32 = 0;
    loop {
        match fetch_list(api, key, keyword, params).await {
            Ok(page) => {
                tracing::debug!(list = key.label(), items = page.items.len(), "list fetched");
                return Ok(page);
            }
            Err(err) if err.is_transient() && retry < FETCH_MAX_RETRIES => {
                let backoff = initial_backoff * 2u32.pow(retry);
                retry += 1;
                tracing::warn!(
                    list = key.label(),
                    retry,
                    max_retries = FETCH_MAX_RETRIES,
                    backoff = ?backoff,
                    error = %err,
                    "transient fetch failure, retrying after backoff"
                );
                tokio::time::sleep(backoff).await;
            }
            Err(err) => {
                tracing::warn!(list = key.label(), error = %err, "list fetch failed");
                return Err(err);
            }
        }
    }
}

/// Dispatches a list key to its catalog endpoint.
async fn fetch_list<C: CatalogApi>(
    api: &C,
    key: ListKey,
    keyword: Option<&str>,
    params: &ListParams,
) -> Result<MediaPage, TmdbError> {
    match key {
        ListKey::MovieNowPlaying => api.movie_list(MovieListKind::NowPlaying, params).await,
        ListKey::MoviePopular => api.movie_list(MovieListKind::Popular, params).await,
        ListKey::MovieTopRated => api.movie_list(MovieListKind::TopRated, params).await,
        ListKey::MovieUpcoming => api.movie_list(MovieListKind::Upcoming, params).await,
        ListKey::TvAiringToday => api.tv_list(TvListKind::AiringToday, params).await,
        ListKey::TvPopular => api.tv_list(TvListKind::Popular, params).await,
        ListKey::TvTopRated => api.tv_list(TvListKind::TopRated, params).await,
        ListKey::TvOnTheAir => api.tv_list(TvListKind::OnTheAir, params).await,
        ListKey::SearchMovies => api.search_movies(keyword.unwrap_or_default(), params).await,
        ListKey::SearchTv => api.search_tv(keyword.unwrap_or_default(), params).await,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::arithmetic_side_effects)]

    use std::sync::Mutex;

    use flixterm_api::tmdb::{CatalogItem, MediaKind};

    use super::*;

    fn make_page() -> MediaPage {
        MediaPage {
            items: vec![CatalogItem {
                id: 42,
                kind: MediaKind::Movie,
                title: String::from("The Answer"),
                overview: String::new(),
                backdrop_path: None,
                poster_path: None,
                vote_average: 8.0,
                date: None,
            }],
            page: 1,
            total_pages: 1,
            total_results: 1,
            dates: None,
        }
    }

    /// Stub API that fails a scripted number of times before succeeding.
    struct ScriptedApi {
        failures: Mutex<u32>,
        transient: bool,
        calls: Mutex<u32>,
        seen_keyword: Mutex<Option<String>>,
    }

    impl ScriptedApi {
        fn new(failures: u32, transient: bool) -> Self {
            Self {
                failures: Mutex::new(failures),
                transient,
                calls: Mutex::new(0),
                seen_keyword: Mutex::new(None),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }

        fn respond(&self) -> Result<MediaPage, TmdbError> {
            *self.calls.lock().unwrap() += 1;
            let mut failures = self.failures.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                let status = if self.transient { 503 } else { 404 };
                return Err(TmdbError::Http {
                    status,
                    body: String::from("scripted failure"),
                });
            }
            Ok(make_page())
        }
    }

    impl CatalogApi for ScriptedApi {
        async fn movie_list(
            &self,
            _kind: MovieListKind,
            _params: &ListParams,
        ) -> Result<MediaPage, TmdbError> {
            self.respond()
        }

        async fn tv_list(
            &self,
            _kind: TvListKind,
            _params: &ListParams,
        ) -> Result<MediaPage, TmdbError> {
            self.respond()
        }

        async fn search_movies(
            &self,
            keyword: &str,
            _params: &ListParams,
        ) -> Result<MediaPage, TmdbError> {
            *self.seen_keyword.lock().unwrap() = Some(String::from(keyword));
            self.respond()
        }

        async fn search_tv(
            &self,
            keyword: &str,
            _params: &ListParams,
        ) -> Result<MediaPage, TmdbError> {
            *self.seen_keyword.lock().unwrap() = Some(String::from(keyword));
            self.respond()
        }
    }

    #[tokio::test]
    async fn test_fetch_succeeds_first_try() {
        // Arrange
        let api = ScriptedApi::new(0, true);
        let params = ListParams::new();

        // Act
        let page = fetch_with_retry(
            &api,
            ListKey::MoviePopular,
            None,
            &params,
            Duration::from_millis(1),
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(page.items.len(), 1);
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_retries_transient_until_success() {
        // Arrange: two transient failures, then success
        let api = ScriptedApi::new(2, true);
        let params = ListParams::new();

        // Act
        let result = fetch_with_retry(
            &api,
            ListKey::TvAiringToday,
            None,
            &params,
            Duration::from_millis(1),
        )
        .await;

        // Assert
        assert!(result.is_ok());
        assert_eq!(api.calls(), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        // Arrange: more failures than the retry budget
        let api = ScriptedApi::new(10, true);
        let params = ListParams::new();

        // Act
        let result = fetch_with_retry(
            &api,
            ListKey::MovieUpcoming,
            None,
            &params,
            Duration::from_millis(1),
        )
        .await;

        // Assert: initial attempt + FETCH_MAX_RETRIES retries
        assert!(matches!(
            result.unwrap_err(),
            TmdbError::Http { status: 503, .. }
        ));
        assert_eq!(api.calls(), FETCH_MAX_RETRIES + 1);
    }

    #[tokio::test]
    async fn test_non_transient_fails_fast() {
        // Arrange
        let api = ScriptedApi::new(10, false);
        let params = ListParams::new();

        // Act
        let result = fetch_with_retry(
            &api,
            ListKey::MovieTopRated,
            None,
            &params,
            Duration::from_millis(1),
        )
        .await;

        // Assert: no retries for a non-transient error
        assert!(result.is_err());
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_search_keyword_reaches_api() {
        // Arrange
        let api = ScriptedApi::new(0, true);
        let params = ListParams::new();

        // Act
        fetch_with_retry(
            &api,
            ListKey::SearchTv,
            Some("dune"),
            &params,
            Duration::from_millis(1),
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(api.seen_keyword.lock().unwrap().as_deref(), Some("dune"));
    }

    #[tokio::test]
    async fn test_spawn_sends_tagged_message() {
        // Arrange
        let api = Arc::new(ScriptedApi::new(0, true));
        let (tx, mut rx) = mpsc::channel(8);

        // Act
        let handle = spawn_list_fetch(api, ListKey::MoviePopular, None, ListParams::new(), 7, tx);
        let msg = rx.recv().await.unwrap();
        handle.await.unwrap();

        // Assert
        assert_eq!(msg.generation(), 7);
        assert_eq!(msg.key(), ListKey::MoviePopular);
        assert!(matches!(msg, FetchMsg::Loaded { .. }));
    }
}
