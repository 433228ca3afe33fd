use std::fmt;

use super::probe::{write_antibot, write_hits};
use super::summary::SummaryView;
use super::{write_section, write_warnings};
use crate::presentation::formatters::{Palette, humanize_bytes, rule, short_hash};
use crate::presentation::view_models::{CollectReportViewModel, PingViewModel};

// --------------------------------------------------------
// Collection Report View
// --------------------------------------------------------

pub struct CollectReportView<'a> {
    data: &'a CollectReportViewModel,
    palette: Palette,
}

impl<'a> CollectReportView<'a> {
    pub fn new(data: &'a CollectReportViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl<'a> fmt::Display for CollectReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        let p = self.palette;

        writeln!(f, "{} {}", p.heading("Scraper diagnostics for"), d.base_url)?;
        writeln!(f, "Started {}", d.started_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(f, "{}", p.dim(rule()))?;

        write_section(f, p, "Server status")?;
        if d.server_running {
            writeln!(f, "  {} Running at {}", p.ok("✓"), d.base_url)?;
        } else {
            writeln!(f, "  {} Not reachable at {}", p.error("✗"), d.base_url)?;
        }

        write_section(f, p, "Files written")?;
        for artifact in &d.artifacts {
            write!(
                f,
                "  {:<22} {:>9}  sha256:{}",
                artifact.name,
                humanize_bytes(artifact.bytes),
                short_hash(&artifact.sha256)
            )?;
            match &artifact.failure {
                Some(reason) => writeln!(f, "  {}", p.warn(format!("fetch failed: {}", reason)))?,
                None => writeln!(f)?,
            }
        }

        write!(f, "{}", SummaryView::new(&d.summary, p))?;

        write_section(f, p, "Local selector probe (soup_raw.html)")?;
        match &d.probe {
            Some(hits) => write_hits(f, p, hits)?,
            None => writeln!(f, "  {}", p.dim("skipped: no raw markup was fetched"))?,
        }

        write_antibot(f, p, &d.antibot_markers)?;

        let warnings: Vec<String> = d
            .warnings
            .iter()
            .chain(&d.summary.warnings)
            .cloned()
            .collect();
        write_warnings(f, p, &warnings)
    }
}

// --------------------------------------------------------
// Ping View
// --------------------------------------------------------

pub struct PingView<'a> {
    data: &'a PingViewModel,
    palette: Palette,
}

impl<'a> PingView<'a> {
    pub fn new(data: &'a PingViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl<'a> fmt::Display for PingView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.running {
            writeln!(f, "{} Running at {}", self.palette.ok("✓"), self.data.base_url)
        } else {
            writeln!(
                f,
                "{} Not reachable at {}",
                self.palette.error("✗"),
                self.data.base_url
            )
        }
    }
}

// --------------------------------------------------------
// Unreachable Service Message (stderr)
// --------------------------------------------------------

pub struct UnreachableView<'a> {
    base_url: &'a str,
    start_hint: &'a str,
    palette: Palette,
}

impl<'a> UnreachableView<'a> {
    pub fn new(base_url: &'a str, start_hint: &'a str, palette: Palette) -> Self {
        Self {
            base_url,
            start_hint,
            palette,
        }
    }
}

impl<'a> fmt::Display for UnreachableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} Server is not running at {}",
            self.palette.error("❌"),
            self.base_url
        )?;
        writeln!(f, "   Start it first with: {}", self.start_hint)
    }
}
