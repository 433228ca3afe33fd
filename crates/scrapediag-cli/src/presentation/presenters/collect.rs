use scrapediag_runtime::CollectionReport;
use scrapediag_types::ArtifactKind;

use super::probe::present_hits;
use super::summary::present_summary;
use crate::presentation::view_models::{
    ArtifactViewModel, CollectReportViewModel, CommandResultViewModel, Guidance, PingViewModel,
    StatusBadge,
};

pub fn present_collection(
    report: &CollectionReport,
) -> CommandResultViewModel<CollectReportViewModel> {
    let artifacts: Vec<ArtifactViewModel> = report
        .artifacts
        .iter()
        .map(|a| ArtifactViewModel {
            name: a.kind.file_name().to_string(),
            path: a.path.display().to_string(),
            bytes: a.bytes,
            sha256: a.sha256.clone(),
            failure: a.failure.clone(),
        })
        .collect();

    let failed = artifacts.iter().filter(|a| a.failure.is_some()).count();
    let warning_count = report.warnings.len() + report.summary.warnings.len();

    let badge = if failed > 0 {
        StatusBadge::warning(format!(
            "{} of {} fetches failed; markers were written in their place",
            failed,
            artifacts.len()
        ))
    } else if !report.antibot_markers.is_empty() {
        StatusBadge::warning("Collected, but the page looks like an anti-bot challenge")
    } else if warning_count > 0 {
        StatusBadge::warning(format!(
            "Collected {} artifacts with {} warning(s)",
            artifacts.len(),
            warning_count
        ))
    } else {
        StatusBadge::success(format!("Collected {} artifacts", artifacts.len()))
    };

    let path_of = |kind: ArtifactKind| {
        report
            .artifacts
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.path.display().to_string())
            .unwrap_or_else(|| kind.file_name().to_string())
    };

    let suggestions = vec![
        Guidance::new("Open the prettified HTML in a browser to see what the scraper saw")
            .with_command(path_of(ArtifactKind::PrettifiedMarkup)),
        Guidance::new("Inspect the debug JSON for table structure and selector hits")
            .with_command(format!(
                "scrapediag summarize {}",
                path_of(ArtifactKind::DebugPayload)
            )),
        Guidance::new("Check for anti-bot measures (captcha, Cloudflare challenge pages)")
            .with_command(format!(
                "scrapediag probe {}",
                path_of(ArtifactKind::RawMarkup)
            )),
        Guidance::new("Verify the target URL and query parameters are still correct"),
    ];

    let content = CollectReportViewModel {
        base_url: report.base_url.clone(),
        started_at: report.started_at,
        server_running: true,
        artifacts,
        summary: present_summary(&report.summary),
        probe: report.probe.as_deref().map(present_hits),
        antibot_markers: report.antibot_markers.clone(),
        warnings: report.warnings.clone(),
    };

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestions(suggestions)
}

pub fn present_ping(
    base_url: &str,
    running: bool,
    start_hint: &str,
) -> CommandResultViewModel<PingViewModel> {
    let content = PingViewModel {
        base_url: base_url.to_string(),
        running,
        start_hint: (!running).then(|| start_hint.to_string()),
    };

    if running {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success("Server is up"))
            .with_suggestions(vec![
                Guidance::new("Collect diagnostics").with_command("scrapediag collect"),
            ])
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::error("Server is not running"))
            .with_suggestions(vec![
                Guidance::new("Start the scraping service first").with_command(start_hint),
            ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::formatters::Palette;
    use crate::presentation::renderers::ConsoleRenderer;
    use crate::presentation::view_models::StatusLevel;
    use chrono::TimeZone;
    use scrapediag_engine::summarize_payload;
    use scrapediag_types::{ArtifactRecord, SummarizerKind};
    use std::path::PathBuf;

    fn report(failure: Option<&str>) -> CollectionReport {
        let artifacts = ArtifactKind::ALL
            .iter()
            .map(|&kind| {
                let record =
                    ArtifactRecord::new(kind, PathBuf::from(kind.file_name()), b"{}");
                match (kind, failure) {
                    (ArtifactKind::TradesPayload, Some(reason)) => record.with_failure(reason),
                    _ => record,
                }
            })
            .collect();

        CollectionReport {
            base_url: "http://localhost:8000".to_string(),
            started_at: chrono::Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            artifacts,
            summary: summarize_payload(
                SummarizerKind::Exact,
                r#"{"tables_found": 1, "table_analysis": [{"table_index": 0, "row_count": 3, "table_classes": ["q-table"]}]}"#,
            ),
            probe: None,
            antibot_markers: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_clean_run_has_success_badge_and_four_tips() {
        let result = present_collection(&report(None));

        let badge = result.badge.as_ref().unwrap();
        assert_eq!(badge.level, StatusLevel::Success);
        insta::assert_snapshot!(badge.label, @"Collected 4 artifacts");
        assert_eq!(result.suggestions.len(), 4);
        assert_eq!(
            result.suggestions[1].command.as_deref(),
            Some("scrapediag summarize detailed_debug.json")
        );
    }

    #[test]
    fn test_failed_fetch_downgrades_badge() {
        let result = present_collection(&report(Some("timed out")));
        assert_eq!(result.badge.as_ref().unwrap().level, StatusLevel::Warning);
    }

    #[test]
    fn test_report_sections_in_order() -> anyhow::Result<()> {
        let text = ConsoleRenderer::new(false, Palette::plain())
            .format(&present_collection(&report(Some("timed out"))))?;

        let order = [
            "Scraper diagnostics for http://localhost:8000",
            "Started 2025-06-01 12:00:00 UTC",
            "Server status",
            "Files written",
            "fetch failed: timed out",
            "Extracted counts",
            "Table 0: 3 rows, classes: ['q-table']",
            "Local selector probe",
            "skipped: no raw markup was fetched",
            "Anti-bot markers",
            "💡 Tips:",
            "Verify the target URL",
        ];
        let mut from = 0;
        for needle in order {
            let at = text[from..]
                .find(needle)
                .unwrap_or_else(|| panic!("{needle:?} missing or out of order in:\n{text}"));
            from += at + needle.len();
        }
        Ok(())
    }

    #[test]
    fn test_ping_down_carries_start_hint() {
        let result = present_ping("http://localhost:8000", false, "python senator-scraper.py");
        assert_eq!(
            result.content.start_hint.as_deref(),
            Some("python senator-scraper.py")
        );
        assert_eq!(result.badge.unwrap().level, StatusLevel::Error);
    }
}
