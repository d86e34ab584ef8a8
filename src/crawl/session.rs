// src/crawl/session.rs
// =============================================================================
// State owned by a single crawl run.
//
// A CrawlSession holds the visited set, the BFS work queue, the discovered
// edges and the processed-page counter. One is created per crawl and dropped
// when the crawl returns, so two crawls never share bookkeeping.
//
// Invariants:
// - a page is inserted into `visited` at most once, when first discovered
// - every queued page is in `visited`, and is queued at most once
// - an edge is recorded only for the discovery of its target
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

/// "`target` was first discovered through a link on `source`".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

// Edge-list line format: source, two spaces, target
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.source, self.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Done,
}

#[derive(Debug)]
pub struct CrawlSession {
    visited: HashSet<String>,
    queue: VecDeque<String>,
    edges: Vec<Edge>,
    processed: usize,
    state: SessionState,
}

impl CrawlSession {
    /// Starts a session with only the seed discovered and queued.
    pub fn new(seed: &str) -> Self {
        let mut visited = HashSet::new();
        visited.insert(seed.to_string());

        let mut queue = VecDeque::new();
        queue.push_back(seed.to_string());

        Self {
            visited,
            queue,
            edges: Vec::new(),
            processed: 0,
            state: SessionState::Idle,
        }
    }

    pub fn start(&mut self) {
        self.state = SessionState::Running;
    }

    pub fn finish(&mut self) {
        self.state = SessionState::Done;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Pops the next page and counts it as processed.
    pub fn next_page(&mut self) -> Option<String> {
        let page = self.queue.pop_front()?;
        self.processed += 1;
        Some(page)
    }

    /// Records `target` as discovered from `source` unless it was seen before.
    /// Returns true if it was new.
    pub fn discover(&mut self, source: &str, target: &str) -> bool {
        if self.visited.contains(target) {
            return false;
        }
        self.visited.insert(target.to_string());
        self.queue.push_back(target.to_string());
        self.edges.push(Edge::new(source, target));
        true
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}
