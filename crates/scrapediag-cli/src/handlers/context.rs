use crate::commands::Reported;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::views::UnreachableView;
use crate::presentation::{ConsoleRenderer, Palette, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use scrapediag_runtime::Config;
use serde::Serialize;

/// Everything a handler needs: the resolved config and how to present.
pub struct HandlerContext {
    pub config: Config,
    pub format: OutputFormat,
    /// Styling for stdout.
    pub palette: Palette,
    /// Styling for stderr; resolved separately since either stream may be piped.
    pub err_palette: Palette,
}

impl HandlerContext {
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json, self.palette);
        renderer.render(view_model)
    }

    /// Print the "start the service" remediation to stderr. The returned
    /// error only carries the exit status.
    pub fn unreachable(&self, base_url: &str, start_hint: &str) -> anyhow::Error {
        eprint!(
            "{}",
            UnreachableView::new(base_url, start_hint, self.err_palette)
        );
        Reported.into()
    }
}
