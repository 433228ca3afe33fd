use crate::artifacts::{ArtifactWriter, Transform, pretty_json, split_soup};
use crate::config::Config;
use crate::http::{Endpoint, ServiceClient};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use scrapediag_engine::{
    DEFAULT_PROBE_SELECTORS, SelectorHit, Summarizer, create_summarizer, probe_selectors,
    scan_antibot,
};
use scrapediag_types::{ArtifactKind, ArtifactRecord, SummarizerKind, Summary};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// Query parameters forwarded to `/debug`.
#[derive(Debug, Clone, Default)]
pub struct DebugQuery {
    pub use_playwright: bool,
    pub test_date_range: Option<String>,
    pub test_trade_type: Option<String>,
    pub test_asset_type: Option<String>,
}

impl DebugQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.use_playwright {
            pairs.push(("use_playwright", "true".to_string()));
        }
        push_opt(&mut pairs, "test_date_range", &self.test_date_range);
        push_opt(&mut pairs, "test_trade_type", &self.test_trade_type);
        push_opt(&mut pairs, "test_asset_type", &self.test_asset_type);
        pairs
    }
}

/// Query parameters forwarded to `/trades`.
#[derive(Debug, Clone, Default)]
pub struct TradesQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub trade_type: Option<String>,
    pub include_stock: Option<bool>,
    pub include_option: Option<bool>,
}

impl TradesQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "start_date", &self.start_date);
        push_opt(&mut pairs, "end_date", &self.end_date);
        push_opt(&mut pairs, "trade_type", &self.trade_type);
        push_opt(&mut pairs, "include_stock", &self.include_stock.map(|b| b.to_string()));
        push_opt(&mut pairs, "include_option", &self.include_option.map(|b| b.to_string()));
        pairs
    }
}

fn push_opt(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        pairs.push((key, v.clone()));
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    pub debug: DebugQuery,
    pub trades: TradesQuery,
}

/// Everything one completed run produced.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionReport {
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub artifacts: Vec<ArtifactRecord>,
    pub summary: Summary,
    /// Local selector probe over the raw markup; `None` when there was no markup to probe.
    pub probe: Option<Vec<SelectorHit>>,
    pub antibot_markers: Vec<String>,
    pub warnings: Vec<String>,
}

/// Runs the fixed diagnostic sequence against one service.
///
/// Only the liveness probe can stop a run. Every later step is best-effort:
/// its failure becomes a warning and a marker file, and the next step runs.
pub struct Collector {
    client: ServiceClient,
    writer: ArtifactWriter,
    summarizer: Box<dyn Summarizer>,
    start_hint: String,
    options: CollectOptions,
}

impl Collector {
    pub fn new(config: &Config, options: CollectOptions) -> Result<Self> {
        Ok(Self {
            client: ServiceClient::new(&config.base_url, config.timeout())?,
            writer: ArtifactWriter::new(&config.out_dir),
            summarizer: create_summarizer(config.summarizer),
            start_hint: config.start_hint.clone(),
            options,
        })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn check_liveness(&self) -> bool {
        self.client.is_alive()
    }

    /// Fetch one endpoint and write it to the artifact for `kind`.
    /// Never fails the run: a fetch error is written as a marker instead.
    pub fn fetch_and_persist(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
        kind: ArtifactKind,
        transform: Transform,
        warnings: &mut Vec<String>,
    ) -> Option<ArtifactRecord> {
        let written = match self.client.get_text(endpoint, query) {
            Ok(body) => {
                let transformed = transform(&body);
                if let Some(note) = transformed.note {
                    warnings.push(format!("{}: {}", endpoint, note));
                }
                self.writer.write(kind, &transformed.text)
            }
            Err(e) => {
                warn!(%endpoint, error = %e, "fetch failed");
                warnings.push(format!("{}: fetch failed: {}", endpoint, e));
                self.writer.write_failure(kind, &e.to_string(), e.response_body())
            }
        };
        self.keep_record(kind, written, warnings)
    }

    /// `/soup-content` feeds two artifacts from one response.
    fn fetch_soup(&self, warnings: &mut Vec<String>) -> Vec<ArtifactRecord> {
        let endpoint = Endpoint::SoupContent;
        let raw_kind = ArtifactKind::RawMarkup;
        let pretty_kind = ArtifactKind::PrettifiedMarkup;

        let written = match self.client.get_text(endpoint, &[]) {
            Ok(body) => {
                let parts = split_soup(&body);
                if let Some(note) = parts.note {
                    warnings.push(format!("{}: {}", endpoint, note));
                }
                vec![
                    (raw_kind, self.writer.write(raw_kind, &parts.raw)),
                    (pretty_kind, self.writer.write(pretty_kind, &parts.prettified)),
                ]
            }
            Err(e) => {
                warn!(%endpoint, error = %e, "fetch failed");
                warnings.push(format!("{}: fetch failed: {}", endpoint, e));
                let reason = e.to_string();
                let response = e.response_body();
                vec![
                    (raw_kind, self.writer.write_failure(raw_kind, &reason, response)),
                    (pretty_kind, self.writer.write_failure(pretty_kind, &reason, response)),
                ]
            }
        };

        written
            .into_iter()
            .filter_map(|(kind, result)| self.keep_record(kind, result, warnings))
            .collect()
    }

    fn keep_record(
        &self,
        kind: ArtifactKind,
        written: Result<ArtifactRecord>,
        warnings: &mut Vec<String>,
    ) -> Option<ArtifactRecord> {
        match written {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(artifact = kind.file_name(), error = %e, "could not write artifact");
                warnings.push(format!("could not write {}: {}", kind.file_name(), e));
                None
            }
        }
    }

    /// Read the persisted debug payload back and summarize it.
    pub fn summarize_file(&self, path: &Path) -> Result<Summary> {
        summarize_file(self.summarizer.as_ref(), path)
    }

    pub fn run(&self) -> Result<CollectionReport> {
        let started_at = Utc::now();

        info!(base_url = self.base_url(), "checking liveness");
        if !self.check_liveness() {
            return Err(Error::Unreachable {
                base_url: self.base_url().to_string(),
                start_hint: self.start_hint.clone(),
            });
        }

        let mut warnings = Vec::new();
        let mut artifacts = Vec::new();

        info!("fetching debug payload");
        artifacts.extend(self.fetch_and_persist(
            Endpoint::Debug,
            &self.options.debug.to_pairs(),
            ArtifactKind::DebugPayload,
            pretty_json,
            &mut warnings,
        ));

        info!("fetching soup content");
        artifacts.extend(self.fetch_soup(&mut warnings));

        info!("fetching trades");
        artifacts.extend(self.fetch_and_persist(
            Endpoint::Trades,
            &self.options.trades.to_pairs(),
            ArtifactKind::TradesPayload,
            pretty_json,
            &mut warnings,
        ));

        info!("summarizing debug payload");
        let debug_path = self.writer.path_for(ArtifactKind::DebugPayload);
        let summary = match self.summarize_file(&debug_path) {
            Ok(summary) => summary,
            Err(e) => {
                warnings.push(format!("could not read debug payload back: {}", e));
                Summary {
                    approximate: self.summarizer.kind() == SummarizerKind::Approximate,
                    ..Summary::default()
                }
            }
        };

        let raw_ok = artifacts
            .iter()
            .any(|a| a.kind == ArtifactKind::RawMarkup && a.is_ok());
        let (probe, antibot_markers) = if raw_ok {
            match std::fs::read_to_string(self.writer.path_for(ArtifactKind::RawMarkup)) {
                Ok(html) => (
                    Some(probe_selectors(&html, DEFAULT_PROBE_SELECTORS)),
                    scan_antibot(&html),
                ),
                Err(e) => {
                    warnings.push(format!("could not read raw markup back: {}", e));
                    (None, Vec::new())
                }
            }
        } else {
            (None, Vec::new())
        };

        info!(artifacts = artifacts.len(), warnings = warnings.len(), "collection finished");

        Ok(CollectionReport {
            base_url: self.base_url().to_string(),
            started_at,
            artifacts,
            summary,
            probe,
            antibot_markers,
            warnings,
        })
    }
}

/// Summarize a debug payload file with the given strategy.
pub fn summarize_file(summarizer: &dyn Summarizer, path: &Path) -> Result<Summary> {
    let raw = std::fs::read_to_string(path)?;
    Ok(summarizer.summarize(&raw))
}
