use scrapediag_types::Summary;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, SelectorCountViewModel, StatusBadge, SummaryFileViewModel,
    SummaryViewModel, TableViewModel,
};

pub fn present_summary(summary: &Summary) -> SummaryViewModel {
    SummaryViewModel {
        strategy: summary.strategy().to_string(),
        approximate: summary.approximate,
        trade_class_count: summary.trade_class_count,
        dollar_count: summary.dollar_count,
        politician_count: summary.politician_count,
        table_count: summary.table_count,
        tables: summary
            .tables
            .iter()
            .map(|t| TableViewModel {
                index: t.index,
                row_count: t.row_count,
                classes: t.classes.clone(),
                line: t.to_string(),
            })
            .collect(),
        container_count: summary.container_count,
        page_title: summary.page_title.clone(),
        source: summary.source.clone(),
        service_error: summary.service_error.clone(),
        selector_counts: summary
            .selector_counts
            .iter()
            .map(|sc| SelectorCountViewModel {
                selector: sc.selector.clone(),
                count: sc.count,
            })
            .collect(),
        warnings: summary.warnings.clone(),
    }
}

pub fn present_summary_file(
    path: &Path,
    summary: &Summary,
) -> CommandResultViewModel<SummaryFileViewModel> {
    let content = SummaryFileViewModel {
        file: path.display().to_string(),
        summary: present_summary(summary),
    };

    let badge = if !summary.warnings.is_empty() {
        StatusBadge::warning(format!(
            "Summarized with {} warning(s)",
            summary.warnings.len()
        ))
    } else if summary.approximate {
        StatusBadge::info("Approximate summary: counts come from pattern matching")
    } else {
        StatusBadge::success(format!("{} table(s) described", summary.table_count))
    };

    let mut suggestions = Vec::new();
    if summary.approximate {
        suggestions.push(
            Guidance::new("Re-run with structured parsing for exact counts")
                .with_command(format!("scrapediag --summarizer exact summarize {}", path.display())),
        );
    }

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestions(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrapediag_engine::summarize_payload;
    use scrapediag_types::SummarizerKind;

    const PAYLOAD: &str = r#"{"tables_found": 2, "trade_indicators": {"elements_with_trade_class": ["a","b"], "elements_with_dollar_signs": [], "politician_mentions": ["Smith"]}, "table_analysis": [{"table_index":0,"row_count":10,"table_classes":["trades"]},{"table_index":1,"row_count":0,"table_classes":[]}]}"#;

    #[test]
    fn test_table_lines_carried_into_view_model() {
        let vm = present_summary(&summarize_payload(SummarizerKind::Exact, PAYLOAD));
        let lines: Vec<&str> = vm.tables.iter().map(|t| t.line.as_str()).collect();
        assert_eq!(
            lines,
            vec![
                "Table 0: 10 rows, classes: ['trades']",
                "Table 1: 0 rows, classes: []"
            ]
        );
        assert_eq!(vm.strategy, "exact");
    }

    #[test]
    fn test_approximate_summary_gets_info_badge_and_tip() {
        let summary = summarize_payload(SummarizerKind::Approximate, PAYLOAD);
        let result = present_summary_file(Path::new("detailed_debug.json"), &summary);

        let badge = result.badge.unwrap();
        insta::assert_snapshot!(badge.label, @"Approximate summary: counts come from pattern matching");
        assert_eq!(result.suggestions.len(), 1);
    }
}
