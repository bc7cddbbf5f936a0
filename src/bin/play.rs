use std::io;

use pawns_chess::config::{AppConfig, DEFAULT_LOG_FILTER};
use pawns_chess::driver;

fn main() -> io::Result<()> {
    let config = AppConfig::from_env();

    // Logs go to stderr; stdout carries the board and prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    driver::run(stdin.lock(), stdout.lock())?;
    Ok(())
}
