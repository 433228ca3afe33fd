use crate::types::LogLevel;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level`.
/// Safe to call more than once; only the first call takes effect.
pub fn init(level: LogLevel, ansi: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .finish()
        .try_init();
}

fn default_directive(level: LogLevel) -> String {
    // Dependencies stay at warn unless asked for through RUST_LOG.
    format!(
        "warn,scrapediag={lvl},scrapediag_runtime={lvl},scrapediag_engine={lvl}",
        lvl = level
    )
}
