use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::formatters::Palette;
use crate::presentation::views::{SummaryFileView, SummaryView};

#[derive(Debug, Clone, Serialize)]
pub struct SummaryViewModel {
    pub strategy: String,
    pub approximate: bool,
    pub trade_class_count: usize,
    pub dollar_count: usize,
    pub politician_count: usize,
    pub table_count: usize,
    pub tables: Vec<TableViewModel>,
    pub container_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_error: Option<String>,
    pub selector_counts: Vec<SelectorCountViewModel>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableViewModel {
    pub index: u64,
    pub row_count: u64,
    pub classes: Vec<String>,
    /// The `Table <i>: <n> rows, classes: [...]` line.
    pub line: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectorCountViewModel {
    pub selector: String,
    pub count: u64,
}

impl CreateView for SummaryViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(SummaryView::new(self, palette))
    }
}

/// Output of `scrapediag summarize`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryFileViewModel {
    pub file: String,
    pub summary: SummaryViewModel,
}

impl CreateView for SummaryFileViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(SummaryFileView::new(self, palette))
    }
}
