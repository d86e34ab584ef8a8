// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - crawl:   BFS from a seed page and write the edge list to a file
// - inspect: read an edge-list file back and summarize it
//
// Every crawl option has a default that reproduces the classic behavior, so
// `wiki-crawler crawl /wiki/Computer_science 500 graph.txt` is all you need.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::{
    Config, DEFAULT_ORIGIN, DEFAULT_PAUSE_EVERY, DEFAULT_PAUSE_SECS, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
use crate::crawl::{FailurePolicy, VertexCount};

#[derive(Parser, Debug)]
#[command(
    name = "wiki-crawler",
    version,
    about = "Breadth-first Wikipedia crawler that writes the link graph as an edge list",
    long_about = "wiki-crawler walks wiki article links breadth-first from a seed page, \
                  up to a page budget, and writes every newly discovered link as a \
                  '<source>  <target>' line. It pauses periodically to go easy on the server."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl from a seed page and write the discovered edges to a file
    ///
    /// Example: wiki-crawler crawl /wiki/Complexity_theory 200 graph.txt
    Crawl(CrawlArgs),

    /// Read an edge-list file and print a summary of it
    ///
    /// Example: wiki-crawler inspect graph.txt --json
    Inspect {
        /// Edge-list file written by `crawl`
        file: PathBuf,

        /// Output the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct CrawlArgs {
    /// Seed page identifier, relative to the origin (e.g. /wiki/Rust)
    pub seed: String,

    /// Maximum number of pages to crawl (positive integer)
    #[arg(value_parser = parse_page_budget)]
    pub max_pages: usize,

    /// File the edge list is written to
    pub output: PathBuf,

    /// Origin that page identifiers are appended to
    #[arg(long, env = "WIKI_CRAWLER_ORIGIN", default_value = DEFAULT_ORIGIN)]
    pub origin: String,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Take a courtesy pause after every N pages (0 = never)
    #[arg(long, default_value_t = DEFAULT_PAUSE_EVERY)]
    pub pause_every: usize,

    /// Length of each courtesy pause in seconds
    #[arg(long, default_value_t = DEFAULT_PAUSE_SECS)]
    pub pause_secs: u64,

    /// What to do when a page can't be fetched
    #[arg(long, value_enum, default_value_t = FailurePolicy::Abort)]
    pub on_fetch_error: FailurePolicy,

    /// Number written on the first line of the edge list
    #[arg(long, value_enum, default_value_t = VertexCount::Budget)]
    pub vertex_count: VertexCount,

    /// Output the crawl summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl CrawlArgs {
    pub fn to_config(&self) -> Config {
        Config {
            origin: self.origin.clone(),
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            pause_every: self.pause_every,
            pause_interval: Duration::from_secs(self.pause_secs),
            on_fetch_error: self.on_fetch_error,
            vertex_count: self.vertex_count,
        }
    }
}

fn parse_page_budget(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
