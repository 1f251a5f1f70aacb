//! Request pacing for the TMDB API.

use std::time::Duration;

use tokio::time::Instant;

/// Default minimum interval between requests (~40 req/s).
const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(25);

/// Spacing guard for consecutive API requests.
///
/// TMDB enforces roughly 40 requests per second. Callers acquire the
/// throttle before each request; it sleeps away whatever remains of the
/// configured interval since the previous acquisition.
#[derive(Debug)]
pub(crate) struct RequestThrottle {
    /// Minimum spacing between consecutive requests.
    min_interval: Duration,
    /// Earliest instant the next request may start.
    next_allowed: Option<Instant>,
}

impl RequestThrottle {
    /// Creates a throttle with the given minimum interval.
    pub(crate) const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_allowed: None,
        }
    }

    /// Creates a throttle with the default interval (25ms).
    pub(crate) const fn default_interval() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }

    /// Waits for the next request slot and reserves the one after it.
    #[allow(clippy::arithmetic_side_effects)]
    pub(crate) async fn acquire(&mut self) {
        if let Some(at) = self.next_allowed {
            tokio::time::sleep_until(at).await;
        }
        self.next_allowed = Some(Instant::now() + self.min_interval);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn test_first_acquire_does_not_wait() {
        // Arrange
        let mut throttle = RequestThrottle::new(Duration::from_secs(1));

        // Act
        let start = Instant::now();
        throttle.acquire().await;
        let elapsed = start.elapsed();

        // Assert
        assert!(elapsed < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_consecutive_acquires_are_spaced() {
        // Arrange
        let mut throttle = RequestThrottle::new(Duration::from_millis(50));

        // Act
        let start = Instant::now();
        throttle.acquire().await;
        throttle.acquire().await;
        let elapsed = start.elapsed();

        // Assert
        assert!(elapsed >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_zero_interval_never_sleeps() {
        // Arrange
        let mut throttle = RequestThrottle::new(Duration::from_millis(0));

        // Act
        let start = Instant::now();
        throttle.acquire().await;
        throttle.acquire().await;
        throttle.acquire().await;
        let elapsed = start.elapsed();

        // Assert
        assert!(elapsed < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_acquire_reserves_next_slot() {
        // Arrange
        let mut throttle = RequestThrottle::new(Duration::from_millis(10));

        // Act
        throttle.acquire().await;

        // Assert
        assert!(throttle.next_allowed.is_some());
    }

    #[test]
    fn test_default_interval() {
        // Arrange & Act
        let throttle = RequestThrottle::default_interval();

        // Assert
        assert_eq!(throttle.min_interval, Duration::from_millis(25));
    }
}
