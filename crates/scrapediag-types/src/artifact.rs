use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::PathBuf;

/// The four files a collection run leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    RawMarkup,
    PrettifiedMarkup,
    DebugPayload,
    TradesPayload,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::RawMarkup,
        ArtifactKind::PrettifiedMarkup,
        ArtifactKind::DebugPayload,
        ArtifactKind::TradesPayload,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::RawMarkup => "soup_raw.html",
            ArtifactKind::PrettifiedMarkup => "soup_prettified.html",
            ArtifactKind::DebugPayload => "detailed_debug.json",
            ArtifactKind::TradesPayload => "trades_debug.json",
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, ArtifactKind::DebugPayload | ArtifactKind::TradesPayload)
    }

    /// Written in place of the payload when the fetch failed, so a reader of
    /// the file can tell "empty page" from "no page". Whatever the service
    /// sent with its error status is kept after the marker.
    pub fn failure_marker(&self, reason: &str, response: Option<&str>) -> String {
        if self.is_json() {
            let mut marker = serde_json::json!({ "scrapediag_error": reason });
            if let Some(body) = response {
                marker["response"] = serde_json::from_str(body)
                    .unwrap_or_else(|_| serde_json::Value::String(body.to_string()));
            }
            // An object of strings and parsed JSON never fails to serialize.
            serde_json::to_string_pretty(&marker).unwrap_or_default() + "\n"
        } else {
            let mut marker = format!(
                "<!-- scrapediag: fetch failed: {} -->\n",
                reason.replace("--", "- -")
            );
            if let Some(body) = response {
                marker.push_str(body);
            }
            marker
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::RawMarkup => write!(f, "raw markup"),
            ArtifactKind::PrettifiedMarkup => write!(f, "prettified markup"),
            ArtifactKind::DebugPayload => write!(f, "debug payload"),
            ArtifactKind::TradesPayload => write!(f, "trades payload"),
        }
    }
}

/// One file written during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRecord {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub bytes: usize,
    pub sha256: String,
    /// Set when the file holds a failure marker instead of the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl ArtifactRecord {
    pub fn new(kind: ArtifactKind, path: PathBuf, contents: &[u8]) -> Self {
        Self {
            kind,
            path,
            bytes: contents.len(),
            sha256: sha256_hex(contents),
            failure: None,
        }
    }

    pub fn with_failure(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}

/// Lowercase hex SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_distinct() {
        let mut names: Vec<&str> = ArtifactKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_json_failure_marker_is_valid_json() {
        let marker = ArtifactKind::TradesPayload.failure_marker("connection reset", None);
        let value: serde_json::Value = serde_json::from_str(&marker).unwrap();
        assert_eq!(value["scrapediag_error"], "connection reset");
        assert!(value.get("response").is_none());
    }

    #[test]
    fn test_json_failure_marker_keeps_error_response() {
        let marker = ArtifactKind::TradesPayload.failure_marker(
            "/trades returned HTTP 400",
            Some(r#"{"detail": "Invalid start_date format. Use YYYY-MM-DD"}"#),
        );
        let value: serde_json::Value = serde_json::from_str(&marker).unwrap();
        assert_eq!(value["scrapediag_error"], "/trades returned HTTP 400");
        assert_eq!(
            value["response"]["detail"],
            "Invalid start_date format. Use YYYY-MM-DD"
        );

        let text = ArtifactKind::DebugPayload.failure_marker("/debug returned HTTP 502", Some("Bad Gateway"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["response"], "Bad Gateway");
    }

    #[test]
    fn test_markup_failure_marker_keeps_error_page() {
        let marker = ArtifactKind::RawMarkup
            .failure_marker("/soup-content returned HTTP 503", Some("<h1>Service Unavailable</h1>"));
        assert_eq!(
            marker,
            "<!-- scrapediag: fetch failed: /soup-content returned HTTP 503 -->\n<h1>Service Unavailable</h1>"
        );
    }

    #[test]
    fn test_markup_failure_marker_is_comment() {
        let marker = ArtifactKind::RawMarkup.failure_marker("timed out -- giving up", None);
        assert!(marker.starts_with("<!--"));
        assert!(!marker["<!--".len()..marker.len() - 4].contains("--"));
    }

    #[test]
    fn test_sha256_hex_known_value() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
