use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::logging;
use crate::presentation::Palette;
use anyhow::Result;
use is_terminal::IsTerminal;
use scrapediag_runtime::{Config, ConfigOverrides};
use std::fmt;
use tracing::debug;

/// Marks a failure whose explanation was already written to stderr;
/// `main` exits non-zero without printing it again.
#[derive(Debug)]
pub struct Reported;

impl fmt::Display for Reported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failure already reported")
    }
}

impl std::error::Error for Reported {}

pub fn run(cli: Cli) -> Result<()> {
    let overrides = ConfigOverrides {
        config_path: cli.config,
        base_url: cli.base_url,
        out_dir: cli.out_dir,
        timeout_secs: cli.timeout,
        summarizer: cli.summarizer.map(Into::into),
        color: cli.color.map(Into::into),
    };
    let config = Config::resolve(&overrides)?;

    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let palette = Palette::new(config.color.enabled(std::io::stdout().is_terminal(), no_color));
    let err_palette =
        Palette::new(config.color.enabled(std::io::stderr().is_terminal(), no_color));

    logging::init(cli.log_level, err_palette.enabled());
    debug!(?config, "configuration resolved");

    let ctx = HandlerContext {
        config,
        format: cli.format,
        palette,
        err_palette,
    };

    match cli.command.unwrap_or_else(|| Commands::Collect(Default::default())) {
        Commands::Collect(args) => handlers::collect::handle(&ctx, args),
        Commands::Ping => handlers::ping::handle(&ctx),
        Commands::Summarize { file } => handlers::summarize::handle(&ctx, file),
        Commands::Probe { file, selectors } => handlers::probe::handle(&ctx, &file, &selectors),
    }
}
