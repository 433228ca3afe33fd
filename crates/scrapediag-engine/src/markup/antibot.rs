/// Strings that show up on challenge or block pages instead of real content.
pub const ANTIBOT_MARKERS: &[&str] = &[
    "captcha",
    "cf-challenge",
    "challenge-platform",
    "Just a moment",
    "Access denied",
    "Attention Required",
    "bot detection",
    "/cdn-cgi/",
];

/// Markers found in `html`, case-insensitively, in [`ANTIBOT_MARKERS`] order.
pub fn scan_antibot(html: &str) -> Vec<String> {
    let haystack = html.to_lowercase();
    ANTIBOT_MARKERS
        .iter()
        .filter(|marker| haystack.contains(&marker.to_lowercase()))
        .map(|marker| marker.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloudflare_interstitial() {
        let page = r#"<title>Just a moment...</title><script src="/cdn-cgi/challenge-platform/h/b/orchestrate"></script>"#;
        assert_eq!(
            scan_antibot(page),
            vec!["challenge-platform", "Just a moment", "/cdn-cgi/"]
        );
    }

    #[test]
    fn test_clean_page_has_no_markers() {
        assert!(scan_antibot("<table><tr><td>AVGO:US</td></tr></table>").is_empty());
    }
}
