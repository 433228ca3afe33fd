use scraper::{Html, Selector};
use serde::Serialize;
use tracing::debug;

use super::clean_text;

/// Selectors the scraping service itself tries when hunting for trade rows.
pub const DEFAULT_PROBE_SELECTORS: &[&str] = &[
    "tr.q-tr",
    "tr.trade-row",
    "tr[class*='trade']",
    "tbody tr",
    ".q-tr",
    ".trade-item",
    "[data-trade]",
];

const SAMPLE_LIMIT: usize = 2;
const SAMPLE_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorHit {
    pub selector: String,
    /// `None` when the selector itself did not parse.
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Count how many elements of `html` each CSS selector matches.
pub fn probe_selectors<S: AsRef<str>>(html: &str, selectors: &[S]) -> Vec<SelectorHit> {
    let document = Html::parse_document(html);

    selectors
        .iter()
        .map(|selector| {
            let selector = selector.as_ref();
            match Selector::parse(selector) {
                Ok(parsed) => {
                    let mut count = 0;
                    let mut samples = Vec::new();
                    for element in document.select(&parsed) {
                        count += 1;
                        if samples.len() < SAMPLE_LIMIT {
                            let text = element.text().collect::<Vec<_>>().join(" ");
                            samples.push(clean_text(&text, SAMPLE_CHARS));
                        }
                    }
                    debug!(selector, count, "selector probe");
                    SelectorHit {
                        selector: selector.to_string(),
                        count: Some(count),
                        samples,
                        error: None,
                    }
                }
                Err(e) => SelectorHit {
                    selector: selector.to_string(),
                    count: None,
                    samples: Vec::new(),
                    error: Some(format!("invalid selector: {}", e)),
                },
            }
        })
        .collect()
}
