use clap::Parser;
use std::error::Error;
use std::process;
use tracing_subscriber::EnvFilter;

use rusty_tally::{run, run_async, Config};

fn main() {
    let config = Config::parse();
    init_logging(&config.log_level);

    if let Err(err) = run_app(&config) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

/// Logs go to stderr so the report on stdout stays machine-readable.
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_app(config: &Config) -> Result<(), Box<dyn Error>> {
    let options = config.report_options()?;

    if config.use_async {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime
            .block_on(run_async(&config.input, &options, std::io::stdout()))
            .map_err(|err| err as Box<dyn Error>)
    } else {
        run(&config.input, &options, std::io::stdout())
    }
}
