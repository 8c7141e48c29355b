use tracing_subscriber::EnvFilter;

pub fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if let Some(start) = args.start {
        if start == 0 {
            anyhow::bail!("--start must be greater than 0");
        }
    }

    Ok(())
}
