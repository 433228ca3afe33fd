use regex::Regex;
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b.*?</script\s*>|<style\b.*?</style\s*>|<[^>]*>|[^<]+")
        .unwrap()
});
static TAG_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</?\s*([A-Za-z][A-Za-z0-9:-]*)").unwrap());

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const INDENT: &str = "  ";

/// Re-indent markup with one tag or text run per line.
///
/// This is a reading aid for a human opening the snapshot, not a parser:
/// unbalanced markup is indented as best it can be and never rejected.
/// Script and style blocks are kept whole on their own line.
pub fn prettify_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 4);
    let mut depth: usize = 0;

    for token in TOKEN_REGEX.find_iter(raw) {
        let token = token.as_str();

        if !token.starts_with('<') {
            let text = token.split_whitespace().collect::<Vec<_>>().join(" ");
            if !text.is_empty() {
                push_line(&mut out, depth, &text);
            }
            continue;
        }

        if token.starts_with("</") {
            depth = depth.saturating_sub(1);
            push_line(&mut out, depth, token);
            continue;
        }

        push_line(&mut out, depth, token.trim());

        if opens_scope(token) {
            depth += 1;
        }
    }

    out
}

fn opens_scope(tag: &str) -> bool {
    if tag.starts_with("<!") || tag.starts_with("<?") || tag.ends_with("/>") {
        return false;
    }
    let Some(name) = TAG_NAME_REGEX.captures(tag).and_then(|c| c.get(1)) else {
        return false;
    };
    let name = name.as_str().to_ascii_lowercase();
    // Whole script/style blocks arrive as a single token.
    if (name == "script" || name == "style") && tag.to_ascii_lowercase().contains("</") {
        return false;
    }
    !VOID_ELEMENTS.contains(&name.as_str())
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}
