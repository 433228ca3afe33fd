use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use scrapediag_engine::{DEFAULT_PROBE_SELECTORS, probe_selectors, scan_antibot};
use std::path::Path;

pub fn handle(ctx: &HandlerContext, file: &Path, selectors: &[String]) -> Result<()> {
    let html = std::fs::read_to_string(file)
        .with_context(|| format!("could not read {}", file.display()))?;

    let hits = if selectors.is_empty() {
        probe_selectors(&html, DEFAULT_PROBE_SELECTORS)
    } else {
        probe_selectors(&html, selectors)
    };

    ctx.render(presenters::present_probe(file, &hits, scan_antibot(&html)))
}
