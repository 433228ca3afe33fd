mod probe;
mod report;
mod summary;

pub use probe::ProbeReportView;
pub use report::{CollectReportView, PingView, UnreachableView};
pub use summary::{SummaryFileView, SummaryView};

use std::fmt;

use crate::presentation::formatters::Palette;

fn write_section(f: &mut fmt::Formatter, palette: Palette, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", palette.heading(title))
}

fn write_warnings(f: &mut fmt::Formatter, palette: Palette, warnings: &[String]) -> fmt::Result {
    if warnings.is_empty() {
        return Ok(());
    }
    write_section(f, palette, "Warnings")?;
    for warning in warnings {
        writeln!(f, "  {} {}", palette.warn("•"), warning)?;
    }
    Ok(())
}
