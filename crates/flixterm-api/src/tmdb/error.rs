//! Typed errors for the TMDB client.

/// Errors produced by [`super::TmdbClient`] operations.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbError {
    /// Client construction or request assembly failed (missing token,
    /// unparseable URL).
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Remote rejection whose body decoded as a TMDB error payload.
    #[error("TMDB API error (HTTP {status}): code={code}, message={message}")]
    Remote {
        /// HTTP status of the response.
        status: u16,
        /// TMDB's own status code.
        code: u32,
        /// TMDB's status message.
        message: String,
    },

    /// Remote rejection whose body was not a TMDB error payload.
    #[error("TMDB API error (HTTP {status}): {body}")]
    Http {
        /// HTTP status of the response.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// HTTP 429 persisted beyond the retry budget.
    #[error("TMDB API rate limit exceeded after {retries} retries")]
    RateLimited {
        /// Number of retries attempted.
        retries: u32,
    },

    /// Response body did not decode as the expected JSON shape.
    #[error("failed to decode JSON response: {path}")]
    Decode {
        /// Request path that produced the body.
        path: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

impl TmdbError {
    /// Whether a retry has any chance of succeeding.
    ///
    /// Transport failures, throttling, and server-side errors are
    /// transient; configuration, client-side rejections (4xx), and decode
    /// failures are not.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimited { .. } => true,
            Self::Remote { status, .. } | Self::Http { status, .. } => *status >= 500,
            Self::Config(_) | Self::Decode { .. } => false,
        }
    }
}
