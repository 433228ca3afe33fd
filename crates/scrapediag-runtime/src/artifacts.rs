use crate::Result;
use scrapediag_engine::prettify_markup;
use scrapediag_types::{ArtifactKind, ArtifactRecord};
use serde_json::Value;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

const RAW_MARKUP_KEYS: &[&str] = &["raw_html", "raw", "html", "content"];
const PRETTIFIED_MARKUP_KEYS: &[&str] = &["prettified_html", "prettified"];

/// How a fetched body is turned into file contents.
pub type Transform = fn(&str) -> Transformed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,
    /// Why the transform could not be applied, if it could not.
    pub note: Option<String>,
}

/// Re-indent a JSON body, keeping the service's key order. A body that is
/// not JSON is kept as received, with a note saying so.
pub fn pretty_json(body: &str) -> Transformed {
    if body.trim().is_empty() {
        return Transformed {
            text: String::new(),
            note: None,
        };
    }
    match serde_json::from_str::<Value>(body).and_then(|v| serde_json::to_string_pretty(&v)) {
        Ok(pretty) => Transformed {
            text: pretty + "\n",
            note: None,
        },
        Err(e) => Transformed {
            text: body.to_string(),
            note: Some(format!("response is not valid JSON ({}); saved as received", e)),
        },
    }
}

/// The two markup artifacts carved out of one `/soup-content` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoupParts {
    pub raw: String,
    pub prettified: String,
    pub note: Option<String>,
}

/// Pull raw and prettified markup out of a `/soup-content` body.
///
/// The service may answer with a JSON object carrying both forms, a JSON
/// string, or plain markup. Whatever form is missing is produced locally.
pub fn split_soup(body: &str) -> SoupParts {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(obj)) => {
            let pick = |keys: &[&str]| {
                keys.iter()
                    .find_map(|k| obj.get(*k).and_then(Value::as_str))
                    .map(str::to_string)
            };
            match (pick(RAW_MARKUP_KEYS), pick(PRETTIFIED_MARKUP_KEYS)) {
                (Some(raw), Some(prettified)) => SoupParts {
                    raw,
                    prettified,
                    note: None,
                },
                (Some(raw), None) => SoupParts {
                    prettified: prettify_markup(&raw),
                    raw,
                    note: None,
                },
                (None, Some(prettified)) => SoupParts {
                    raw: prettified.clone(),
                    prettified,
                    note: Some("soup-content has no raw markup; saved prettified form twice".to_string()),
                },
                (None, None) => SoupParts {
                    raw: body.to_string(),
                    prettified: pretty_json(body).text,
                    note: Some("soup-content JSON has no markup fields; saved the JSON itself".to_string()),
                },
            }
        }
        Ok(Value::String(markup)) => SoupParts {
            prettified: prettify_markup(&markup),
            raw: markup,
            note: None,
        },
        _ => SoupParts {
            raw: body.to_string(),
            prettified: prettify_markup(body),
            note: None,
        },
    }
}

/// Writes artifacts with their fixed names into one directory, replacing
/// whatever a previous run left there.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    pub fn write(&self, kind: ArtifactKind, contents: &str) -> Result<ArtifactRecord> {
        let path = self.path_for(kind);
        if !self.dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.dir)?;
        }

        // Flushed and closed before returning; later steps read it back.
        let mut file = File::create(&path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;

        debug!(path = %path.display(), bytes = contents.len(), "artifact written");
        Ok(ArtifactRecord::new(kind, path, contents.as_bytes()))
    }

    /// Write the failure marker for `kind`, so the file exists either way.
    /// `response` is the body of an error status, kept as evidence.
    pub fn write_failure(
        &self,
        kind: ArtifactKind,
        reason: &str,
        response: Option<&str>,
    ) -> Result<ArtifactRecord> {
        let record = self.write(kind, &kind.failure_marker(reason, response))?;
        Ok(record.with_failure(reason))
    }
}
