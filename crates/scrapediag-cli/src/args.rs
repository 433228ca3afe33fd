use crate::types::{ColorChoice, LogLevel, OutputFormat, SummarizerChoice};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrapediag")]
#[command(about = "Collect evidence for why a scraping service's selectors stopped matching", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the scraping service
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory the artifacts are written to
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(long, global = true)]
    pub summarizer: Option<SummarizerChoice>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full diagnostic sequence (the default)
    Collect(CollectArgs),

    /// Check whether the service is up
    Ping,

    /// Summarize a saved debug payload
    Summarize {
        /// Defaults to detailed_debug.json in the output directory
        file: Option<PathBuf>,
    },

    /// Probe a saved markup file with CSS selectors and scan it for challenge pages
    Probe {
        file: PathBuf,

        /// Replaces the default selector list; repeatable
        #[arg(long = "selector")]
        selectors: Vec<String>,
    },
}

/// Query options forwarded to `/debug` and `/trades`.
#[derive(Args, Debug, Clone, Default)]
pub struct CollectArgs {
    #[arg(long)]
    pub use_playwright: bool,

    #[arg(long)]
    pub test_date_range: Option<String>,

    #[arg(long)]
    pub test_trade_type: Option<String>,

    #[arg(long)]
    pub test_asset_type: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    pub start_date: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    pub end_date: Option<String>,

    /// buy, sell or both
    #[arg(long)]
    pub trade_type: Option<String>,

    #[arg(long)]
    pub include_stock: Option<bool>,

    #[arg(long)]
    pub include_option: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_parses() {
        let cli = Cli::try_parse_from(["scrapediag"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Plain);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "scrapediag",
            "collect",
            "--base-url",
            "http://127.0.0.1:9000",
            "--include-option",
            "false",
            "--summarizer",
            "approx",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(cli.summarizer, Some(SummarizerChoice::Approximate));
        match cli.command {
            Some(Commands::Collect(args)) => assert_eq!(args.include_option, Some(false)),
            _ => panic!("expected collect"),
        }
    }

    #[test]
    fn test_probe_selectors_repeat() {
        let cli = Cli::try_parse_from([
            "scrapediag",
            "probe",
            "page.html",
            "--selector",
            "tr.q-tr",
            "--selector",
            "tbody tr",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Probe { file, selectors }) => {
                assert_eq!(file, PathBuf::from("page.html"));
                assert_eq!(selectors, vec!["tr.q-tr", "tbody tr"]);
            }
            _ => panic!("expected probe"),
        }
    }
}
