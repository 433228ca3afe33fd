use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use scrapediag_engine::create_summarizer;
use scrapediag_types::ArtifactKind;
use std::path::PathBuf;

pub fn handle(ctx: &HandlerContext, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(|| {
        ctx.config
            .out_dir
            .join(ArtifactKind::DebugPayload.file_name())
    });

    let summarizer = create_summarizer(ctx.config.summarizer);
    let summary = scrapediag_runtime::summarize_file(summarizer.as_ref(), &path)
        .with_context(|| format!("could not read {}", path.display()))?;

    ctx.render(presenters::present_summary_file(&path, &summary))
}
