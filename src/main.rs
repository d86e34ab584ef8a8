// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr) and parse command-line arguments
// 2. Dispatch to the subcommand handler
// 3. Print a summary
// 4. Exit with proper code (0 = success, 1 = some pages skipped, 2 = error)
// =============================================================================

mod cli;
mod config;
mod crawl;
mod error;
mod extract;
mod fetch;
mod output;
mod telemetry;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use cli::{Cli, Commands, CrawlArgs};
use crawl::{CourtesyDelay, CrawlOptions, CrawlReport, Crawler, NoDelay, SleepDelay};
use fetch::HttpFetcher;

#[tokio::main]
async fn main() {
    telemetry::init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl(args) => handle_crawl(args).await,
        Commands::Inspect { file, json } => handle_inspect(&file, json),
    }
}

#[derive(Debug, Serialize)]
struct CrawlSummary<'a> {
    seed: &'a str,
    output: &'a Path,
    max_pages: usize,
    vertex_count: usize,
    edges: usize,
    pages_crawled: usize,
    pages_discovered: usize,
    pauses: usize,
    failed: &'a [String],
}

// Handles the 'crawl' subcommand
//
// The edge list is only written after the crawl succeeds, so an aborted crawl
// leaves no output file behind.
async fn handle_crawl(args: CrawlArgs) -> Result<i32> {
    let config = args.to_config();

    let fetcher = HttpFetcher::new(&config).context("could not set up the page fetcher")?;
    let delay: Box<dyn CourtesyDelay> = if config.pause_interval.is_zero() {
        Box::new(NoDelay)
    } else {
        Box::new(SleepDelay::new(config.pause_interval))
    };
    let crawler = Crawler::new(fetcher, delay, CrawlOptions::from(&config));

    let report = crawler
        .crawl(&args.seed, args.max_pages)
        .await
        .with_context(|| format!("crawl from {} failed", args.seed))?;

    output::save_edge_list(&args.output, report.vertex_count, &report.edges)
        .with_context(|| format!("could not write {}", args.output.display()))?;
    info!(path = %args.output.display(), "edge list written");

    print_crawl_summary(&args, &report)?;

    if report.failed.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn print_crawl_summary(args: &CrawlArgs, report: &CrawlReport) -> Result<()> {
    let summary = CrawlSummary {
        seed: &args.seed,
        output: &args.output,
        max_pages: args.max_pages,
        vertex_count: report.vertex_count,
        edges: report.edges.len(),
        pages_crawled: report.pages_crawled,
        pages_discovered: report.pages_discovered,
        pauses: report.pauses,
        failed: &report.failed,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Crawled {} page(s) from {}", summary.pages_crawled, summary.seed);
    println!("   Edges:            {}", summary.edges);
    println!("   Pages discovered: {}", summary.pages_discovered);
    println!("   Vertex count:     {}", summary.vertex_count);
    println!("   Courtesy pauses:  {}", summary.pauses);
    if !summary.failed.is_empty() {
        println!("   Skipped pages:    {}", summary.failed.len());
        for page in summary.failed {
            println!("      {}", page);
        }
    }
    println!("Edge list written to {}", summary.output.display());
    Ok(())
}

#[derive(Debug, Serialize)]
struct InspectSummary<'a> {
    file: &'a Path,
    vertex_count: usize,
    edges: usize,
    distinct_pages: usize,
}

// Handles the 'inspect' subcommand
fn handle_inspect(file: &Path, json: bool) -> Result<i32> {
    let (vertex_count, edges) =
        output::load_edge_list(file).with_context(|| format!("could not read {}", file.display()))?;

    let distinct_pages = edges
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect::<HashSet<_>>()
        .len();

    let summary = InspectSummary {
        file,
        vertex_count,
        edges: edges.len(),
        distinct_pages,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.file.display());
        println!("   Vertex count:   {}", summary.vertex_count);
        println!("   Edges:          {}", summary.edges);
        println!("   Distinct pages: {}", summary.distinct_pages);
    }

    Ok(0)
}
