// src/crawl/engine.rs
// =============================================================================
// This module implements the breadth-first crawl.
//
// How it works:
// 1. Start with the seed in the queue (and in the visited set)
// 2. Take the next page off the queue and count it
// 3. Stop once the count goes past the page budget; that page is not fetched
// 4. Every `pause_every` pages, take a courtesy pause before fetching
// 5. Fetch the page, extract its wiki links in document order
// 6. Each link not seen before is queued and recorded as an edge
// 7. Repeat until the queue is empty or the budget is used up
//
// Only one fetch is ever in flight. Edge order is therefore BFS order combined
// with each page's link order, which makes the output reproducible.
// =============================================================================

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::delay::CourtesyDelay;
use super::session::{CrawlSession, Edge, SessionState};
use crate::config::{Config, DEFAULT_PAUSE_EVERY};
use crate::error::Result;
use crate::extract::extract_links;
use crate::fetch::Fetcher;

/// What to do when a single page can't be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// End the crawl with the error. No edge list is produced.
    #[default]
    Abort,
    /// Log it, count the page against the budget, and move on.
    Skip,
}

/// Which number is reported as the graph's vertex count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VertexCount {
    /// The page budget the crawl was started with.
    #[default]
    Budget,
    /// The number of distinct pages discovered (seed included).
    Discovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Pause after every N processed pages; 0 disables pausing.
    pub pause_every: usize,
    pub on_fetch_error: FailurePolicy,
    pub vertex_count: VertexCount,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            pause_every: DEFAULT_PAUSE_EVERY,
            on_fetch_error: FailurePolicy::default(),
            vertex_count: VertexCount::default(),
        }
    }
}

impl From<&Config> for CrawlOptions {
    fn from(config: &Config) -> Self {
        Self {
            pause_every: config.pause_every,
            on_fetch_error: config.on_fetch_error,
            vertex_count: config.vertex_count,
        }
    }
}

/// Result of one finished crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlReport {
    /// Written as the first line of the edge list.
    pub vertex_count: usize,
    /// Discovery edges in discovery order.
    pub edges: Vec<Edge>,
    /// Pages a fetch was attempted for.
    pub pages_crawled: usize,
    /// Distinct pages discovered, seed included.
    pub pages_discovered: usize,
    pub pauses: usize,
    /// Pages skipped under FailurePolicy::Skip.
    pub failed: Vec<String>,
}

// Counters that only matter for the report, kept next to the session
#[derive(Debug, Default)]
struct RunStats {
    pages_crawled: usize,
    pauses: usize,
    failed: Vec<String>,
}

pub struct Crawler<F, D> {
    fetcher: F,
    delay: D,
    options: CrawlOptions,
}

impl<F: Fetcher, D: CourtesyDelay> Crawler<F, D> {
    pub fn new(fetcher: F, delay: D, options: CrawlOptions) -> Self {
        Self {
            fetcher,
            delay,
            options,
        }
    }

    // Crawls breadth-first from `seed`, processing at most `max_pages` pages
    //
    // Returns: the report with the discovered edges, or the first page failure
    // when the failure policy is Abort
    pub async fn crawl(&self, seed: &str, max_pages: usize) -> Result<CrawlReport> {
        let mut session = CrawlSession::new(seed);
        info!(seed, max_pages, "starting crawl");

        let stats = self.run(&mut session, max_pages).await?;
        debug_assert_eq!(session.state(), SessionState::Done);

        let vertex_count = match self.options.vertex_count {
            VertexCount::Budget => max_pages,
            VertexCount::Discovered => session.visited_count(),
        };
        let pages_discovered = session.visited_count();

        let report = CrawlReport {
            vertex_count,
            edges: session.into_edges(),
            pages_crawled: stats.pages_crawled,
            pages_discovered,
            pauses: stats.pauses,
            failed: stats.failed,
        };

        info!(
            edges = report.edges.len(),
            pages_crawled = report.pages_crawled,
            pages_discovered = report.pages_discovered,
            failed = report.failed.len(),
            "crawl finished"
        );

        Ok(report)
    }

    async fn run(&self, session: &mut CrawlSession, max_pages: usize) -> Result<RunStats> {
        let mut stats = RunStats::default();
        session.start();

        while let Some(current) = session.next_page() {
            let processed = session.processed();
            if processed > max_pages {
                debug!(page = %current, "page budget reached");
                break;
            }

            if self.pause_due(processed) {
                stats.pauses += 1;
                info!(pauses = stats.pauses, pages_crawled = processed, "courtesy pause");
                self.delay.pause(processed).await;
            }

            stats.pages_crawled += 1;
            let markup = match self.fetcher.fetch(&current).await {
                Ok(markup) => markup,
                Err(e) if e.is_page_failure() && self.options.on_fetch_error == FailurePolicy::Skip => {
                    warn!(page = %current, error = %e, "skipping page");
                    stats.failed.push(current);
                    continue;
                }
                Err(e) => {
                    session.finish();
                    return Err(e);
                }
            };

            let mut new_links = 0;
            for link in extract_links(&markup) {
                if session.discover(&current, &link) {
                    new_links += 1;
                }
            }

            debug!(
                page = %current,
                new_links,
                edges = session.edges().len(),
                queued = session.queued(),
                "page processed"
            );
        }

        session.finish();
        Ok(stats)
    }

    fn pause_due(&self, processed: usize) -> bool {
        self.options.pause_every > 0 && processed % self.options.pause_every == 0
    }
}
