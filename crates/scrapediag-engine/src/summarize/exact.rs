use scrapediag_types::{
    INDICATOR_DOLLAR_SIGNS, INDICATOR_POLITICIAN_MENTIONS, INDICATOR_TRADE_CLASS, SelectorCount,
    SummarizerKind, Summary, TableLine,
};
use serde_json::Value;
use tracing::{debug, warn};

use super::Summarizer;

/// Field-by-field access on the parsed payload.
///
/// Each field is read on its own so that one field of the wrong shape only
/// zeroes that field instead of discarding the whole payload.
pub struct ExactSummarizer;

impl Summarizer for ExactSummarizer {
    fn kind(&self) -> SummarizerKind {
        SummarizerKind::Exact
    }

    fn summarize(&self, raw: &str) -> Summary {
        let mut summary = Summary::default();

        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "debug payload is not valid JSON");
                summary
                    .warnings
                    .push(format!("debug payload is not valid JSON: {}", e));
                return summary;
            }
        };

        if !value.is_object() {
            summary
                .warnings
                .push("debug payload is not a JSON object".to_string());
            return summary;
        }

        let warnings = &mut summary.warnings;
        let indicator = |key: &str, warnings: &mut Vec<String>| {
            list_len(&value, &format!("/trade_indicators/{}", key), warnings)
        };
        summary.trade_class_count = indicator(INDICATOR_TRADE_CLASS, warnings);
        summary.dollar_count = indicator(INDICATOR_DOLLAR_SIGNS, warnings);
        summary.politician_count = indicator(INDICATOR_POLITICIAN_MENTIONS, warnings);

        summary.tables = table_lines(&value, warnings);
        summary.container_count = list_len(&value, "/other_containers", warnings);
        summary.table_count = match value.get("tables_found") {
            None | Some(Value::Null) => summary.tables.len(),
            Some(v) => match v.as_u64() {
                Some(n) => n as usize,
                None => {
                    warnings.push(format!("tables_found is not a count: {}", v));
                    0
                }
            },
        };

        summary.page_title = string_field(&value, "page_title");
        summary.source = string_field(&value, "source");
        summary.service_error = string_field(&value, "error");
        summary.selector_counts = selector_counts(&value);

        debug!(
            trade_class = summary.trade_class_count,
            dollar = summary.dollar_count,
            politician = summary.politician_count,
            tables = summary.table_count,
            containers = summary.container_count,
            "exact summary"
        );

        summary
    }
}

fn list_len(value: &Value, pointer: &str, warnings: &mut Vec<String>) -> usize {
    match value.pointer(pointer) {
        None | Some(Value::Null) => 0,
        Some(Value::Array(items)) => items.len(),
        Some(other) => {
            warnings.push(format!(
                "{} is not a list (found {})",
                pointer.trim_start_matches('/').replace('/', "."),
                type_name(other)
            ));
            0
        }
    }
}

/// Prefer `table_analysis`; fall back to the older `table_details` records,
/// which carry no classes.
fn table_lines(value: &Value, warnings: &mut Vec<String>) -> Vec<TableLine> {
    let (key, entries) = match (value.get("table_analysis"), value.get("table_details")) {
        (Some(Value::Array(entries)), _) => ("table_analysis", entries),
        (_, Some(Value::Array(entries))) => ("table_details", entries),
        (Some(other), _) if !other.is_null() => {
            warnings.push(format!(
                "table_analysis is not a list (found {})",
                type_name(other)
            ));
            return Vec::new();
        }
        _ => return Vec::new(),
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let Some(obj) = entry.as_object() else {
                warnings.push(format!("{}[{}] is not an object", key, position));
                return None;
            };
            let classes = obj
                .get("table_classes")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(class_name).collect())
                .unwrap_or_default();
            Some(TableLine {
                index: obj
                    .get("table_index")
                    .and_then(Value::as_u64)
                    .unwrap_or(position as u64),
                row_count: obj.get("row_count").and_then(Value::as_u64).unwrap_or(0),
                classes,
            })
        })
        .collect()
}

fn class_name(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn selector_counts(value: &Value) -> Vec<SelectorCount> {
    let Some(results) = value.get("selector_results").and_then(Value::as_object) else {
        return Vec::new();
    };
    results
        .iter()
        .map(|(selector, result)| SelectorCount {
            selector: selector.clone(),
            count: result.get("count").and_then(Value::as_u64).unwrap_or(0),
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarize(raw: &str) -> Summary {
        ExactSummarizer.summarize(raw)
    }

    #[test]
    fn test_empty_trade_class_list_counts_zero() {
        let summary = summarize(
            r#"{"trade_indicators": {"elements_with_trade_class": []}, "tables_found": 0}"#,
        );
        assert_eq!(summary.trade_class_count, 0);
        assert!(summary.warnings.is_empty());
    }

    #[test]
    fn test_missing_fields_are_zero() {
        let summary = summarize("{}");
        assert_eq!(summary.trade_class_count, 0);
        assert_eq!(summary.dollar_count, 0);
        assert_eq!(summary.politician_count, 0);
        assert_eq!(summary.table_count, 0);
        assert!(summary.tables.is_empty());
        assert!(summary.warnings.is_empty());
    }

    #[test]
    fn test_invalid_json_degrades_with_warning() {
        let summary = summarize("<html>502 Bad Gateway</html>");
        assert_eq!(summary, Summary {
            warnings: summary.warnings.clone(),
            ..Summary::default()
        });
        assert_eq!(summary.warnings.len(), 1);
        assert!(summary.warnings[0].starts_with("debug payload is not valid JSON"));
    }

    #[test]
    fn test_wrong_shape_zeroes_only_that_field() {
        let summary = summarize(
            r#"{"tables_found": "two", "trade_indicators": {"elements_with_trade_class": "many", "politician_mentions": ["Pelosi"]}}"#,
        );
        assert_eq!(summary.trade_class_count, 0);
        assert_eq!(summary.politician_count, 1);
        assert_eq!(summary.table_count, 0);
        assert_eq!(summary.warnings.len(), 2);
    }

    #[test]
    fn test_table_details_fallback() {
        let summary = summarize(
            r#"{"tables_found": 1, "table_details": [{"table_index": 0, "row_count": 13, "sample_rows": [{"row_index": 0}]}]}"#,
        );
        assert_eq!(summary.tables.len(), 1);
        assert_eq!(summary.tables[0].to_string(), "Table 0: 13 rows, classes: []");
    }

    #[test]
    fn test_service_metadata_is_surfaced() {
        let summary = summarize(
            r#"{"page_title": "Trades | Capitol Trades", "source": "requests", "selector_results": {"tbody tr": {"count": 12, "sample": []}, ".q-tr": {"count": 0, "sample": []}}}"#,
        );
        assert_eq!(summary.page_title.as_deref(), Some("Trades | Capitol Trades"));
        assert_eq!(summary.source.as_deref(), Some("requests"));
        assert_eq!(summary.selector_counts.len(), 2);
        let tbody = summary
            .selector_counts
            .iter()
            .find(|c| c.selector == "tbody tr")
            .unwrap();
        assert_eq!(tbody.count, 12);
    }

    #[test]
    fn test_service_error_is_surfaced() {
        let summary = summarize(r#"{"error": "HTTPSConnectionPool: Read timed out."}"#);
        assert_eq!(
            summary.service_error.as_deref(),
            Some("HTTPSConnectionPool: Read timed out.")
        );
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let raw = r#"{"tables_found": 3, "trade_indicators": {"elements_with_dollar_signs": ["$1,000", "$15,001"]}}"#;
        assert_eq!(summarize(raw), summarize(raw));
    }

    #[test]
    fn test_div_containers_are_counted() {
        let summary = summarize(
            r#"{"other_containers": [{"container_index": 0, "class": ["trade-list"], "item_count": 12, "sample_content": "Pelosi"}, {"container_index": 1, "class": ["q-tr"], "item_count": 0, "sample_content": ""}]}"#,
        );
        assert_eq!(summary.container_count, 2);
        assert!(summary.warnings.is_empty());

        let odd = summarize(r#"{"other_containers": {"container_index": 0}}"#);
        assert_eq!(odd.container_count, 0);
        assert_eq!(odd.warnings, vec!["other_containers is not a list (found object)"]);
    }
}
