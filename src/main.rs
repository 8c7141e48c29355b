use anyhow::Result;
use clap::Parser;
use tracing::error;

use titletally::{crawl, report, utils, Args, CrawlConfig};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    let config = CrawlConfig::from(&args);

    match crawl::run_crawl(&config) {
        Ok(result) => {
            report::print_results(&result, config.letter);
            Ok(())
        }
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
