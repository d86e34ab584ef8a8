// src/config.rs
// =============================================================================
// Runtime configuration for a crawl.
//
// Defaults are the classic crawler constants: the English Wikipedia origin, a
// 3 second courtesy pause every 100 pages, and abort on the first failed fetch.
// The CLI (src/cli.rs) overrides any of them.
// =============================================================================

use std::time::Duration;

use crate::crawl::{FailurePolicy, VertexCount};

pub const DEFAULT_ORIGIN: &str = "https://en.wikipedia.org";
pub const DEFAULT_PAUSE_EVERY: usize = 100;
pub const DEFAULT_PAUSE_SECS: u64 = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Wikimedia asks automated clients to identify themselves
pub const DEFAULT_USER_AGENT: &str = concat!(
    "wiki-crawler/",
    env!("CARGO_PKG_VERSION"),
    " (breadth-first link graph crawler)"
);

#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme + host that page identifiers are appended to
    pub origin: String,
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Pause after every N processed pages
    pub pause_every: usize,
    /// Length of each courtesy pause
    pub pause_interval: Duration,
    pub on_fetch_error: FailurePolicy,
    pub vertex_count: VertexCount,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            pause_every: DEFAULT_PAUSE_EVERY,
            pause_interval: Duration::from_secs(DEFAULT_PAUSE_SECS),
            on_fetch_error: FailurePolicy::default(),
            vertex_count: VertexCount::default(),
        }
    }
}
