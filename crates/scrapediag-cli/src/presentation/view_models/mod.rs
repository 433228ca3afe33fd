pub mod collect;
pub mod common;
pub mod probe;
pub mod result;
pub mod summary;

use std::fmt;

use crate::presentation::formatters::Palette;

pub use collect::{ArtifactViewModel, CollectReportViewModel, PingViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use probe::{ProbeReportViewModel, SelectorHitViewModel};
pub use result::CommandResultViewModel;
pub use summary::{SelectorCountViewModel, SummaryFileViewModel, SummaryViewModel, TableViewModel};

/// Bridges a view model to its text rendering.
pub trait CreateView {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a>;
}
