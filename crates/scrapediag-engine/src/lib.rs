// Engine module - turns collected artifacts into counts and findings.
// Pure functions over strings: no network, no filesystem.

pub mod markup;
pub mod summarize;

pub use markup::{
    DEFAULT_PROBE_SELECTORS, SelectorHit, prettify_markup, probe_selectors, scan_antibot,
};
pub use summarize::{ApproximateSummarizer, ExactSummarizer, Summarizer, create_summarizer};

use scrapediag_types::{SummarizerKind, Summary};

// Façade API - stable entry points for the runtime and CLI layers

/// Summarize a serialized debug payload with the given strategy.
pub fn summarize_payload(kind: SummarizerKind, raw: &str) -> Summary {
    create_summarizer(kind).summarize(raw)
}
