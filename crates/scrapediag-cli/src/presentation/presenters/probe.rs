use scrapediag_engine::SelectorHit;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ProbeReportViewModel, SelectorHitViewModel, StatusBadge,
};

pub(crate) fn present_hits(hits: &[SelectorHit]) -> Vec<SelectorHitViewModel> {
    hits.iter()
        .map(|h| SelectorHitViewModel {
            selector: h.selector.clone(),
            count: h.count,
            samples: h.samples.clone(),
            error: h.error.clone(),
        })
        .collect()
}

pub fn present_probe(
    path: &Path,
    hits: &[SelectorHit],
    antibot_markers: Vec<String>,
) -> CommandResultViewModel<ProbeReportViewModel> {
    let matched = hits.iter().filter(|h| h.count.unwrap_or(0) > 0).count();

    let badge = if !antibot_markers.is_empty() {
        StatusBadge::warning("Page looks like an anti-bot challenge, not the real content")
    } else if matched == 0 {
        StatusBadge::warning(format!("None of {} selectors matched", hits.len()))
    } else {
        StatusBadge::success(format!("{} of {} selectors matched", matched, hits.len()))
    };

    let mut suggestions = Vec::new();
    if matched == 0 {
        suggestions.push(
            Guidance::new("Compare the markup with the selectors the scraper uses")
                .with_command(format!("less {}", path.display())),
        );
    }

    CommandResultViewModel::new(ProbeReportViewModel {
        file: path.display().to_string(),
        hits: present_hits(hits),
        antibot_markers,
    })
    .with_badge(badge)
    .with_suggestions(suggestions)
}
