mod antibot;
mod prettify;
mod probe;

pub use antibot::{ANTIBOT_MARKERS, scan_antibot};
pub use prettify::prettify_markup;
pub use probe::{DEFAULT_PROBE_SELECTORS, SelectorHit, probe_selectors};

/// Collapse runs of whitespace and cut to `max_chars`.
pub(crate) fn clean_text(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        collapsed.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_and_truncates() {
        assert_eq!(clean_text("  Nancy\n   Pelosi\tDemocrat ", 100), "Nancy Pelosi Democrat");
        assert_eq!(clean_text("abcdef", 3), "abc");
    }
}
