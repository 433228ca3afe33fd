use std::fmt;

/// Result type for scrapediag-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Transport-level HTTP failure (connect, timeout, body read)
    Http(reqwest::Error),

    /// The service answered with a non-success status; `body` is what it sent
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// IO operation failed
    Io(std::io::Error),

    /// Payload could not be (de)serialized
    Json(serde_json::Error),

    /// Configuration error
    Config(String),

    /// Liveness probe failed; nothing was collected
    Unreachable { base_url: String, start_hint: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status { endpoint, status, .. } => {
                write!(f, "{} returned HTTP {}", endpoint, status)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Unreachable { base_url, .. } => {
                write!(f, "Server is not running at {}", base_url)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Status { .. } | Error::Config(_) | Error::Unreachable { .. } => None,
        }
    }
}

impl Error {
    /// Body of an error response, when the service sent one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Error::Status { body, .. } if !body.trim().is_empty() => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
