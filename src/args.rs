use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "titletally",
    about = "Fetch the web page title of each domain in a ranked list and count a letter's occurrences",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the ranked domain list (CSV)
    #[arg(short, long)]
    pub file: PathBuf,

    /// 1-based rank to start from
    #[arg(short, long)]
    pub start: Option<usize>,

    /// Number of domains to process
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Letter to count in each title
    #[arg(short, long, default_value_t = 'c')]
    pub letter: char,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
