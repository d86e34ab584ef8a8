// src/crawl/mod.rs
// =============================================================================
// This module handles the breadth-first crawl of the wiki.
//
// Features:
// - Breadth-first traversal from a seed page, bounded by a page budget
// - Visited-set bookkeeping so each page is queued and fetched once
// - Polite crawling: a courtesy pause every N pages
// - Configurable handling of pages that fail to fetch
//
// Submodules:
// - session: per-run state (visited set, queue, edges, counter)
// - engine: the BFS loop and its options
// - delay: courtesy pause policies
// =============================================================================

mod delay;
mod engine;
mod session;

pub use delay::{CourtesyDelay, NoDelay, SleepDelay};
pub use engine::{CrawlOptions, CrawlReport, Crawler, FailurePolicy, VertexCount};
pub use session::Edge;
