use serde::{Deserialize, Serialize};
use std::fmt;

/// Which summarization strategy produced (or should produce) a [`Summary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerKind {
    /// Structured field access on the parsed payload.
    #[default]
    Exact,
    /// Pattern matching over the serialized payload text.
    Approximate,
}

impl fmt::Display for SummarizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummarizerKind::Exact => write!(f, "exact"),
            SummarizerKind::Approximate => write!(f, "approximate"),
        }
    }
}

/// Counts extracted from one debug payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub trade_class_count: usize,
    pub dollar_count: usize,
    pub politician_count: usize,
    pub table_count: usize,
    pub tables: Vec<TableLine>,
    /// Div-based trade lists (`other_containers`), for pages that dropped tables.
    pub container_count: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Error string reported by the service itself (`{"error": ...}`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selector_counts: Vec<SelectorCount>,

    pub approximate: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Summary {
    pub fn strategy(&self) -> SummarizerKind {
        if self.approximate {
            SummarizerKind::Approximate
        } else {
            SummarizerKind::Exact
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableLine {
    pub index: u64,
    pub row_count: u64,
    pub classes: Vec<String>,
}

impl fmt::Display for TableLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table {}: {} rows, classes: {}",
            self.index,
            self.row_count,
            python_list(&self.classes)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorCount {
    pub selector: String,
    pub count: u64,
}

/// Render strings the way Python's `repr` prints a list of str: `['a', "it's"]`.
pub fn python_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| python_repr(s)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Single quotes unless the text holds a `'` and no `"`.
fn python_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
