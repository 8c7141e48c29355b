use anyhow::{Context, Result};
use csv::StringRecord;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Positional CSV field holding the domain name.
const DOMAIN_FIELD: usize = 2;

pub fn open_source(path: &Path) -> Result<csv::Reader<File>> {
    if !path.exists() {
        anyhow::bail!("Source file not found at {:?}", path);
    }

    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open source file {:?}", path))?;

    info!(action = "open", component = "source", path = ?path, "Source file opened");
    Ok(reader)
}

/// Bounded window over the data rows. `start` is a 1-based rank; a `start`
/// past the end of the source yields an empty sequence rather than an error.
pub fn select_rows<I>(
    rows: I,
    start: Option<usize>,
    count: Option<usize>,
) -> impl Iterator<Item = I::Item>
where
    I: Iterator,
{
    let skip = start.map_or(0, |s| s.saturating_sub(1));
    let take = count.unwrap_or(usize::MAX);
    rows.skip(skip).take(take)
}

pub fn extract_domains<I>(rows: I) -> Result<Vec<String>>
where
    I: Iterator<Item = csv::Result<StringRecord>>,
{
    let mut domains = Vec::new();

    for (index, row) in rows.enumerate() {
        let row = row.context("Failed to read row from source file")?;
        match row.get(DOMAIN_FIELD) {
            Some(domain) => domains.push(domain.to_string()),
            None => anyhow::bail!(
                "Malformed row {}: has {} fields, expected at least {}",
                index + 1,
                row.len(),
                DOMAIN_FIELD + 1
            ),
        }
    }

    info!(
        action = "extract",
        component = "source",
        domain_count = domains.len(),
        "Domains extracted from source rows"
    );
    Ok(domains)
}
