use anyhow::Result;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use crate::{analyze, fetch, report::CrawlResult, source, url, Args};

/// Everything the pipeline needs, materialized once at the boundary.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub file: PathBuf,
    pub start: Option<usize>,
    pub count: Option<usize>,
    pub letter: char,
    pub scheme: String,
}

impl From<&Args> for CrawlConfig {
    fn from(args: &Args) -> Self {
        CrawlConfig {
            file: args.file.clone(),
            start: args.start,
            count: args.count,
            letter: args.letter,
            scheme: "https".to_string(),
        }
    }
}

pub fn run_crawl(config: &CrawlConfig) -> Result<CrawlResult> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "crawl",
        file = ?config.file,
        start = config.start,
        count = config.count,
        "Starting crawl"
    );

    let reader = source::open_source(&config.file)?;
    let rows = source::select_rows(reader.into_records(), config.start, config.count);
    let domains = source::extract_domains(rows)?;

    let urls: Vec<String> = domains
        .iter()
        .map(|domain| url::add_scheme(domain, &config.scheme))
        .collect();

    let client = fetch::build_client()?;
    let titles = fetch::fetch_titles(&client, &urls);
    let counts = analyze::count_occurrences(&titles, config.letter);

    info!(
        action = "complete",
        component = "crawl",
        domain_count = domains.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Crawl completed"
    );

    Ok(CrawlResult { domains, counts })
}
