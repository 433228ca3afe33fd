use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::formatters::Palette;
use crate::presentation::views::ProbeReportView;

#[derive(Debug, Clone, Serialize)]
pub struct SelectorHitViewModel {
    pub selector: String,
    /// `None` when the selector failed to parse.
    pub count: Option<usize>,
    pub samples: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReportViewModel {
    pub file: String,
    pub hits: Vec<SelectorHitViewModel>,
    pub antibot_markers: Vec<String>,
}

impl CreateView for ProbeReportViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProbeReportView::new(self, palette))
    }
}
