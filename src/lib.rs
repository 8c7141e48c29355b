pub mod analyze;
pub mod args;
pub mod crawl;
pub mod fetch;
pub mod report;
pub mod source;
pub mod url;
pub mod utils;

pub use args::Args;
pub use crawl::{run_crawl, CrawlConfig};
pub use report::CrawlResult;
