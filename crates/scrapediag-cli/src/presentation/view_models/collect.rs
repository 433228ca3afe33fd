use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::CreateView;
use super::probe::SelectorHitViewModel;
use super::summary::SummaryViewModel;
use crate::presentation::formatters::Palette;
use crate::presentation::views::{CollectReportView, PingView};

#[derive(Debug, Clone, Serialize)]
pub struct ArtifactViewModel {
    pub name: String,
    pub path: String,
    pub bytes: usize,
    pub sha256: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Output of `scrapediag collect`.
#[derive(Debug, Clone, Serialize)]
pub struct CollectReportViewModel {
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub server_running: bool,
    pub artifacts: Vec<ArtifactViewModel>,
    pub summary: SummaryViewModel,
    /// `None` when no raw markup was fetched.
    pub probe: Option<Vec<SelectorHitViewModel>>,
    pub antibot_markers: Vec<String>,
    pub warnings: Vec<String>,
}

impl CreateView for CollectReportViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(CollectReportView::new(self, palette))
    }
}

/// Output of `scrapediag ping`.
#[derive(Debug, Clone, Serialize)]
pub struct PingViewModel {
    pub base_url: String,
    pub running: bool,
    /// How to start the service; only set when it is down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_hint: Option<String>,
}

impl CreateView for PingViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(PingView::new(self, palette))
    }
}
