use std::{fs::File, io, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// With a log file, everything down to `debug` is written to that file
/// without ANSI colors. Otherwise logs go to stderr at `warn` level. Either
/// default can be overridden with the `RUST_LOG` environment variable.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("debug"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
