// src/crawl/delay.rs
// =============================================================================
// Courtesy delay policies.
//
// The engine decides WHEN to pause (every N processed pages); a CourtesyDelay
// decides HOW. Production uses a real sleep, tests use NoDelay or a recorder.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;

/// Called by the engine whenever the courtesy rule triggers.
#[async_trait]
pub trait CourtesyDelay: Send + Sync {
    /// `pages_crawled` is the processed-page count that triggered the pause.
    async fn pause(&self, pages_crawled: usize);
}

#[async_trait]
impl<T: CourtesyDelay + ?Sized> CourtesyDelay for Box<T> {
    async fn pause(&self, pages_crawled: usize) {
        (**self).pause(pages_crawled).await;
    }
}

/// Suspends the crawl for a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct SleepDelay {
    pub interval: Duration,
}

impl SleepDelay {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

#[async_trait]
impl CourtesyDelay for SleepDelay {
    async fn pause(&self, _pages_crawled: usize) {
        // The crawl has a single worker, so this stalls all outbound requests
        tokio::time::sleep(self.interval).await;
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl CourtesyDelay for NoDelay {
    async fn pause(&self, _pages_crawled: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_delay_waits_for_interval() {
        let delay = SleepDelay::new(Duration::from_secs(3));
        let before = tokio::time::Instant::now();
        delay.pause(100).await;
        assert!(before.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_no_delay_returns_immediately() {
        let before = Instant::now();
        NoDelay.pause(100).await;
        assert!(before.elapsed() < Duration::from_secs(1));
    }
}
