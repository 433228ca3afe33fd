use std::fmt;

use super::write_section;
use crate::presentation::formatters::{Palette, truncate};
use crate::presentation::view_models::{ProbeReportViewModel, SelectorHitViewModel};

const SAMPLE_WIDTH: usize = 72;

pub(super) fn write_hits(
    f: &mut fmt::Formatter,
    palette: Palette,
    hits: &[SelectorHitViewModel],
) -> fmt::Result {
    for hit in hits {
        match (hit.count, &hit.error) {
            (Some(0), _) => writeln!(f, "  {:<24} {}", hit.selector, palette.dim("0"))?,
            (Some(count), _) => writeln!(f, "  {:<24} {}", hit.selector, palette.ok(count))?,
            (None, error) => writeln!(
                f,
                "  {:<24} {}",
                hit.selector,
                palette.error(error.as_deref().unwrap_or("invalid selector"))
            )?,
        }
        for sample in &hit.samples {
            writeln!(f, "      {}", palette.dim(truncate(sample, SAMPLE_WIDTH)))?;
        }
    }
    Ok(())
}

pub(super) fn write_antibot(
    f: &mut fmt::Formatter,
    palette: Palette,
    markers: &[String],
) -> fmt::Result {
    write_section(f, palette, "Anti-bot markers")?;
    if markers.is_empty() {
        return writeln!(f, "  none found");
    }
    for marker in markers {
        writeln!(f, "  {} {}", palette.warn("⚠"), marker)?;
    }
    Ok(())
}

pub struct ProbeReportView<'a> {
    data: &'a ProbeReportViewModel,
    palette: Palette,
}

impl<'a> ProbeReportView<'a> {
    pub fn new(data: &'a ProbeReportViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl<'a> fmt::Display for ProbeReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "File: {}", self.data.file)?;
        write_section(f, self.palette, "Selector probe")?;
        write_hits(f, self.palette, &self.data.hits)?;
        write_antibot(f, self.palette, &self.data.antibot_markers)
    }
}
