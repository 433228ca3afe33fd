use std::fmt;

use super::{write_section, write_warnings};
use crate::presentation::formatters::Palette;
use crate::presentation::view_models::{SummaryFileViewModel, SummaryViewModel};

// --------------------------------------------------------
// Extracted counts
// --------------------------------------------------------

pub struct SummaryView<'a> {
    data: &'a SummaryViewModel,
    palette: Palette,
}

impl<'a> SummaryView<'a> {
    pub fn new(data: &'a SummaryViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl<'a> fmt::Display for SummaryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self.data;
        let p = self.palette;

        let title = if s.approximate {
            format!("Extracted counts {}", p.warn("(approximate)"))
        } else {
            "Extracted counts".to_string()
        };
        write_section(f, p, &title)?;

        writeln!(f, "  Elements with trade class:  {}", s.trade_class_count)?;
        writeln!(f, "  Elements with dollar signs: {}", s.dollar_count)?;
        writeln!(f, "  Politician mentions:        {}", s.politician_count)?;
        writeln!(f, "  Tables found:               {}", s.table_count)?;
        for table in &s.tables {
            writeln!(f, "    {}", table.line)?;
        }
        writeln!(f, "  Div trade containers:       {}", s.container_count)?;

        if let Some(title) = &s.page_title {
            writeln!(f, "  Page title:    {}", title)?;
        }
        if let Some(source) = &s.source {
            writeln!(f, "  Fetched via:   {}", source)?;
        }
        if let Some(err) = &s.service_error {
            writeln!(f, "  Service error: {}", p.error(err))?;
        }

        if !s.selector_counts.is_empty() {
            writeln!(f, "  Service selector results:")?;
            for sc in &s.selector_counts {
                writeln!(f, "    {:<24} {}", sc.selector, sc.count)?;
            }
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Summarize command
// --------------------------------------------------------

pub struct SummaryFileView<'a> {
    data: &'a SummaryFileViewModel,
    palette: Palette,
}

impl<'a> SummaryFileView<'a> {
    pub fn new(data: &'a SummaryFileViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl<'a> fmt::Display for SummaryFileView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "File: {}", self.data.file)?;
        writeln!(f, "Strategy: {}", self.data.summary.strategy)?;
        write!(f, "{}", SummaryView::new(&self.data.summary, self.palette))?;
        write_warnings(f, self.palette, &self.data.summary.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_summary;
    use scrapediag_types::Summary;

    #[test]
    fn test_div_containers_follow_tables() {
        let summary = Summary {
            table_count: 0,
            container_count: 3,
            ..Summary::default()
        };
        let vm = present_summary(&summary);
        let text = SummaryView::new(&vm, Palette::plain()).to_string();

        let tables = text.find("Tables found:               0").unwrap();
        let containers = text.find("Div trade containers:       3").unwrap();
        assert!(tables < containers, "{text}");
    }
}
