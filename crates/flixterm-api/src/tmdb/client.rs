//! `TmdbClient` - TMDB API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use super::api::CatalogApi;
use super::error::TmdbError;
use super::throttle::RequestThrottle;
use super::types::{
    ListParams, MediaPage, MovieListKind, MoviePage, TmdbErrorResponse, TvListKind, TvPage,
};

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Maximum number of retries for HTTP 429 responses.
const MAX_RETRIES: u32 = 3;

/// Backoff duration between retries.
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// TMDB API client.
#[derive(Clone, Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Bearer API token.
    api_token: String,
    /// Request pacing shared across concurrent callers.
    throttle: Arc<Mutex<RequestThrottle>>,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_token: Option<String>,
    user_agent: Option<String>,
    min_interval: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            user_agent: None,
            min_interval: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API bearer token (required).
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the minimum request interval (default: 25ms).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_token` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient, TmdbError> {
        let api_token = self
            .api_token
            .ok_or_else(|| TmdbError::Config(String::from("api_token is required")))?;
        let user_agent = self
            .user_agent
            .ok_or_else(|| TmdbError::Config(String::from("user_agent is required")))?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            Url::parse(DEFAULT_BASE_URL)
                .map_err(|err| TmdbError::Config(format!("invalid default base URL: {err}")))?
        };

        let throttle = self
            .min_interval
            .map_or_else(RequestThrottle::default_interval, RequestThrottle::new);

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .map_err(|err| TmdbError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_token,
            throttle: Arc::new(Mutex::new(throttle)),
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Sends a GET request with Bearer auth, query params, and request
    /// pacing. Retries up to `MAX_RETRIES` times on HTTP 429.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        self.throttle.lock().await.acquire().await;

        let url = self
            .base_url
            .join(path)
            .map_err(|err| TmdbError::Config(format!("failed to join URL path {path}: {err}")))?;

        let mut retries = 0u32;
        loop {
            let request = self
                .http_client
                .get(url.clone())
                .bearer_auth(&self.api_token)
                .query(query)
                .build()?;

            tracing::debug!(url = %request.url(), "TMDB API request");

            let response = self.http_client.execute(request).await?;

            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                retries = retries.saturating_add(1);
                if retries > MAX_RETRIES {
                    return Err(TmdbError::RateLimited {
                        retries: MAX_RETRIES,
                    });
                }
                tracing::warn!(
                    retry = retries,
                    max_retries = MAX_RETRIES,
                    "TMDB API rate limited (429). Retrying..."
                );
                tokio::time::sleep(RETRY_BACKOFF.saturating_mul(retries)).await;
                self.throttle.lock().await.acquire().await;
                continue;
            }

            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| String::from("<failed to read body>"));
                if let Ok(error_response) = serde_json::from_str::<TmdbErrorResponse>(&body) {
                    return Err(TmdbError::Remote {
                        status: status.as_u16(),
                        code: error_response.status_code,
                        message: error_response.status_message,
                    });
                }
                return Err(TmdbError::Http {
                    status: status.as_u16(),
                    body,
                });
            }

            let body = response.text().await?;
            return serde_json::from_str(&body).map_err(|source| TmdbError::Decode {
                path: String::from(path),
                source,
            });
        }
    }

    /// Query pairs shared by every listing and search endpoint.
    fn base_query(params: &ListParams) -> Vec<(&'static str, String)> {
        vec![
            ("language", params.language.clone()),
            ("page", params.page.to_string()),
        ]
    }
}

impl CatalogApi for TmdbClient {
    #[instrument(skip_all, fields(path = kind.as_path()))]
    async fn movie_list(
        &self,
        kind: MovieListKind,
        params: &ListParams,
    ) -> Result<MediaPage, TmdbError> {
        let query = Self::base_query(params);
        let page: MoviePage = self.get_json(kind.as_path(), &query).await?;
        Ok(page.into())
    }

    #[instrument(skip_all, fields(path = kind.as_path()))]
    async fn tv_list(
        &self,
        kind: TvListKind,
        params: &ListParams,
    ) -> Result<MediaPage, TmdbError> {
        let query = Self::base_query(params);
        let page: TvPage = self.get_json(kind.as_path(), &query).await?;
        Ok(page.into())
    }

    #[instrument(skip_all)]
    async fn search_movies(
        &self,
        keyword: &str,
        params: &ListParams,
    ) -> Result<MediaPage, TmdbError> {
        let mut query = Self::base_query(params);
        query.push(("query", String::from(keyword)));
        query.push(("include_adult", params.include_adult.to_string()));
        let page: MoviePage = self.get_json("search/movie", &query).await?;
        Ok(page.into())
    }

    #[instrument(skip_all)]
    async fn search_tv(
        &self,
        keyword: &str,
        params: &ListParams,
    ) -> Result<MediaPage, TmdbError> {
        let mut query = Self::base_query(params);
        query.push(("query", String::from(keyword)));
        query.push(("include_adult", params.include_adult.to_string()));
        let page: TvPage = self.get_json("search/tv", &query).await?;
        Ok(page.into())
    }
}
