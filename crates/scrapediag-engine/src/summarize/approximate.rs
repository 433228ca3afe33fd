use regex::Regex;
use scrapediag_types::{SelectorCount, SummarizerKind, Summary, TableLine};
use std::sync::LazyLock;
use tracing::debug;

use super::Summarizer;

// Counts here are proxies. Dollar amounts are counted across the whole text,
// not just inside `elements_with_dollar_signs`, and list contents are cut at
// the first `]`. Callers must present the result as approximate.

static QUOTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)""#).unwrap());
static TRADE_CLASS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""elements_with_trade_class"\s*:\s*\[([^\]]*)\]"#).unwrap());
static POLITICIAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""politician_mentions"\s*:\s*\[([^\]]*)\]"#).unwrap());
static DOLLAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s?\d[\d,]*(?:\.\d+)?").unwrap());
static TABLES_FOUND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""tables_found"\s*:\s*(\d+)"#).unwrap());
static TABLE_OBJECT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\{[^{}]*"table_index"[^{}]*\}"#).unwrap());
static TABLE_INDEX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""table_index"\s*:\s*(\d+)"#).unwrap());
static ROW_COUNT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""row_count"\s*:\s*(\d+)"#).unwrap());
static TABLE_CLASSES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""table_classes"\s*:\s*\[([^\]]*)\]"#).unwrap());
static CONTAINER_INDEX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""container_index"\s*:"#).unwrap());
static SELECTOR_COUNT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""((?:[^"\\]|\\.)*)"\s*:\s*\{\s*"count"\s*:\s*(\d+)"#).unwrap()
});

/// Pattern matching over the serialized payload, for when structured access
/// is not wanted or the payload is too damaged to parse.
pub struct ApproximateSummarizer;

impl Summarizer for ApproximateSummarizer {
    fn kind(&self) -> SummarizerKind {
        SummarizerKind::Approximate
    }

    fn summarize(&self, raw: &str) -> Summary {
        let tables: Vec<TableLine> = TABLE_OBJECT_REGEX
            .find_iter(raw)
            .enumerate()
            .map(|(position, m)| {
                let obj = m.as_str();
                TableLine {
                    index: capture_number(&TABLE_INDEX_REGEX, obj).unwrap_or(position as u64),
                    row_count: capture_number(&ROW_COUNT_REGEX, obj).unwrap_or(0),
                    classes: quoted_items(&TABLE_CLASSES_REGEX, obj),
                }
            })
            .collect();

        let table_count = capture_number(&TABLES_FOUND_REGEX, raw)
            .map(|n| n as usize)
            .unwrap_or(tables.len());

        let summary = Summary {
            trade_class_count: quoted_items(&TRADE_CLASS_REGEX, raw).len(),
            dollar_count: DOLLAR_REGEX.find_iter(raw).count(),
            politician_count: quoted_items(&POLITICIAN_REGEX, raw).len(),
            table_count,
            tables,
            container_count: CONTAINER_INDEX_REGEX.find_iter(raw).count(),
            page_title: string_value(raw, "page_title"),
            source: string_value(raw, "source"),
            service_error: string_value(raw, "error"),
            selector_counts: SELECTOR_COUNT_REGEX
                .captures_iter(raw)
                .filter_map(|caps| {
                    Some(SelectorCount {
                        selector: unescape(caps.get(1)?.as_str()),
                        count: caps.get(2)?.as_str().parse().ok()?,
                    })
                })
                .collect(),
            approximate: true,
            warnings: Vec::new(),
        };

        debug!(
            trade_class = summary.trade_class_count,
            dollar = summary.dollar_count,
            politician = summary.politician_count,
            tables = summary.table_count,
            containers = summary.container_count,
            "approximate summary"
        );

        summary
    }
}

fn capture_number(regex: &Regex, text: &str) -> Option<u64> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Quoted strings inside the first list the regex captures.
fn quoted_items(regex: &Regex, text: &str) -> Vec<String> {
    let Some(list) = regex.captures(text).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };
    QUOTED_REGEX
        .captures_iter(list.as_str())
        .filter_map(|caps| caps.get(1).map(|m| unescape(m.as_str())))
        .collect()
}

fn string_value(text: &str, key: &str) -> Option<String> {
    let pattern = format!(r#""{}"\s*:\s*"((?:[^"\\]|\\.)*)""#, regex::escape(key));
    let regex = Regex::new(&pattern).ok()?;
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| unescape(m.as_str()))
}

fn unescape(inner: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{}\"", inner)).unwrap_or_else(|_| inner.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarize(raw: &str) -> Summary {
        ApproximateSummarizer.summarize(raw)
    }

    #[test]
    fn test_garbage_still_yields_counts() {
        let summary = summarize("not json at all { [ ] } $");
        assert_eq!(summary.trade_class_count, 0);
        assert_eq!(summary.dollar_count, 0);
        assert_eq!(summary.politician_count, 0);
        assert_eq!(summary.table_count, 0);
        assert!(summary.approximate);
    }

    #[test]
    fn test_dollar_amounts_counted_file_wide() {
        let raw = r#"{
  "page_title": "Trades $5",
  "trade_indicators": {
    "elements_with_dollar_signs": ["$1,000", "$15,001.50"]
  },
  "raw_html_snippet": "<td>$80.00</td>"
}"#;
        let summary = summarize(raw);
        // Two in the indicator list plus the title and the snippet.
        assert_eq!(summary.dollar_count, 4);
    }

    #[test]
    fn test_pretty_printed_tables() {
        let raw = r#"{
  "tables_found": 2,
  "table_analysis": [
    {
      "table_index": 0,
      "row_count": 10,
      "table_classes": [
        "q-table",
        "trades"
      ]
    },
    {
      "table_index": 1,
      "row_count": 0,
      "table_classes": []
    }
  ]
}"#;
        let summary = summarize(raw);
        assert_eq!(summary.table_count, 2);
        assert_eq!(
            summary.tables[0].to_string(),
            "Table 0: 10 rows, classes: ['q-table', 'trades']"
        );
        assert_eq!(summary.tables[1].to_string(), "Table 1: 0 rows, classes: []");
    }

    #[test]
    fn test_escaped_strings_are_unescaped() {
        let summary =
            summarize(r#"{"page_title": "Nancy \"Speaker\" Pelosi", "politician_mentions": ["O\"Neil"]}"#);
        assert_eq!(summary.page_title.as_deref(), Some(r#"Nancy "Speaker" Pelosi"#));
        assert_eq!(summary.politician_count, 1);
    }

    #[test]
    fn test_selector_counts_from_service() {
        let summary = summarize(
            r#"{"selector_results": {"tbody tr": {"count": 12, "sample": ["a"]}, "[data-trade]": {"count": 0, "sample": []}}}"#,
        );
        assert_eq!(summary.selector_counts.len(), 2);
        assert_eq!(summary.selector_counts[0].selector, "tbody tr");
        assert_eq!(summary.selector_counts[0].count, 12);
    }

    #[test]
    fn test_div_containers_are_counted() {
        let summary = summarize(
            r#"{"tables_found": 0, "other_containers": [{"container_index": 0, "class": ["trade-list"]}, {"container_index": 1, "class": ["trades"]}]}"#,
        );
        assert_eq!(summary.container_count, 2);
        assert!(summary.tables.is_empty());
    }
}
