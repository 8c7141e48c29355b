use anyhow::Result;
use scraper::{Html, Selector};
use std::time::Instant;
use tracing::{info, warn};

pub fn build_client() -> Result<reqwest::blocking::Client> {
    // Default timeout and redirect policy; callers needing bounded latency
    // configure this explicitly.
    let client = reqwest::blocking::Client::builder().build()?;
    Ok(client)
}

/// Fetch every URL in order, one at a time. A failed fetch never aborts the
/// batch: the slot for that URL is `None` and processing continues.
pub fn fetch_titles(client: &reqwest::blocking::Client, urls: &[String]) -> Vec<Option<String>> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "title_fetch",
        url_count = urls.len(),
        "Starting title fetch"
    );

    let mut titles = Vec::with_capacity(urls.len());
    for url in urls {
        titles.push(fetch_title(client, url));
    }

    let fetched = titles.iter().filter(|title| title.is_some()).count();
    info!(
        action = "complete",
        component = "title_fetch",
        fetched,
        failed = titles.len() - fetched,
        duration_ms = start_time.elapsed().as_millis(),
        "Title fetch completed"
    );
    titles
}

pub fn fetch_title(client: &reqwest::blocking::Client, url: &str) -> Option<String> {
    let response = match client.get(url).send() {
        Ok(response) => response,
        Err(e) => {
            warn!(action = "fetch", component = "title_fetch", url, error = %e, "Request failed");
            return None;
        }
    };

    // The status code is deliberately not inspected: a title parsed out of
    // an error page still counts as a title.
    let body = match response.text() {
        Ok(body) => body,
        Err(e) => {
            warn!(action = "read", component = "title_fetch", url, error = %e, "Failed to read response body");
            return None;
        }
    };

    extract_title(&body)
}

/// Text content of the first `<title>` element in the document, trimmed.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}
