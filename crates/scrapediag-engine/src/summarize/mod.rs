mod approximate;
mod exact;

pub use approximate::ApproximateSummarizer;
pub use exact::ExactSummarizer;

use scrapediag_types::{SummarizerKind, Summary};

/// Debug payload summarization
///
/// Responsibilities:
/// - Count trade indicators, dollar amounts, politician mentions and tables
/// - Produce per-table lines
/// - Never fail: malformed or partial payloads degrade to zero counts
pub trait Summarizer: Send + Sync {
    fn kind(&self) -> SummarizerKind;

    /// Summarize the serialized payload text. Must be deterministic.
    fn summarize(&self, raw: &str) -> Summary;
}

/// Build the summarizer chosen at startup.
pub fn create_summarizer(kind: SummarizerKind) -> Box<dyn Summarizer> {
    match kind {
        SummarizerKind::Exact => Box::new(ExactSummarizer),
        SummarizerKind::Approximate => Box::new(ApproximateSummarizer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{"tables_found": 2, "trade_indicators": {"elements_with_trade_class": ["a","b"], "elements_with_dollar_signs": [], "politician_mentions": ["Smith"]}, "table_analysis": [{"table_index":0,"row_count":10,"table_classes":["trades"]},{"table_index":1,"row_count":0,"table_classes":[]}]}"#;

    #[test]
    fn test_create_summarizer_honours_kind() {
        assert_eq!(
            create_summarizer(SummarizerKind::Exact).kind(),
            SummarizerKind::Exact
        );
        assert_eq!(
            create_summarizer(SummarizerKind::Approximate).kind(),
            SummarizerKind::Approximate
        );
    }

    #[test]
    fn test_both_strategies_agree_on_simple_payload() {
        let exact = create_summarizer(SummarizerKind::Exact).summarize(SCENARIO);
        let approx = create_summarizer(SummarizerKind::Approximate).summarize(SCENARIO);

        assert_eq!(exact.trade_class_count, approx.trade_class_count);
        assert_eq!(exact.dollar_count, approx.dollar_count);
        assert_eq!(exact.politician_count, approx.politician_count);
        assert_eq!(exact.table_count, approx.table_count);
        assert_eq!(exact.tables, approx.tables);
        assert!(!exact.approximate);
        assert!(approx.approximate);
    }
}
