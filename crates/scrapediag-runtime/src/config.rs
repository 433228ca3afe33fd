use crate::{Error, Result};
use scrapediag_types::SummarizerKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Upper bound on the per-request timeout; larger deadlines overflow `Instant`.
pub const MAX_TIMEOUT_SECS: u64 = 3600;
pub const DEFAULT_START_HINT: &str = "python senator-scraper.py";

pub const ENV_CONFIG: &str = "SCRAPEDIAG_CONFIG";
pub const ENV_BASE_URL: &str = "SCRAPEDIAG_BASE_URL";
pub const ENV_OUT_DIR: &str = "SCRAPEDIAG_OUT_DIR";
pub const ENV_TIMEOUT: &str = "SCRAPEDIAG_TIMEOUT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether output should carry ANSI styling.
    pub fn enabled(self, stdout_is_terminal: bool, no_color_set: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout_is_terminal && !no_color_set,
        }
    }
}

/// Everything a collection run needs, resolved once at startup and passed
/// down explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub out_dir: PathBuf,
    pub timeout_secs: u64,
    pub summarizer: SummarizerKind,
    pub color: ColorMode,
    /// Shown when the liveness probe fails.
    pub start_hint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            out_dir: PathBuf::from("."),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            summarizer: SummarizerKind::default(),
            color: ColorMode::default(),
            start_hint: DEFAULT_START_HINT.to_string(),
        }
    }
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub summarizer: Option<SummarizerKind>,
    pub color: Option<ColorMode>,
}

impl Config {
    /// Resolve the effective configuration. Priority, highest first:
    /// 1. Command-line overrides
    /// 2. SCRAPEDIAG_* environment variables
    /// 3. Config file (explicit path, SCRAPEDIAG_CONFIG, or the default location)
    /// 4. Built-in defaults
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// [`Config::resolve`] with an injectable environment lookup.
    pub fn resolve_with<F>(overrides: &ConfigOverrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match (&overrides.config_path, env(ENV_CONFIG)) {
            (Some(path), _) => Self::load_required(path)?,
            (None, Some(path)) => Self::load_required(&expand_tilde(&path))?,
            (None, None) => match Self::default_path() {
                Some(path) => Self::load_from(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env(&env)?;
        config.apply_overrides(overrides);
        config.normalize()?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_required(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::load_from(path)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scrapediag").join("config.toml"))
    }

    fn apply_env<F>(&mut self, env: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(dir) = env(ENV_OUT_DIR) {
            self.out_dir = expand_tilde(&dir);
        }
        if let Some(timeout) = env(ENV_TIMEOUT) {
            self.timeout_secs = timeout.trim().parse().map_err(|_| {
                Error::Config(format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT, timeout))
            })?;
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.base_url {
            self.base_url = url.clone();
        }
        if let Some(dir) = &overrides.out_dir {
            self.out_dir = dir.clone();
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.timeout_secs = timeout;
        }
        if let Some(kind) = overrides.summarizer {
            self.summarizer = kind;
        }
        if let Some(color) = overrides.color {
            self.color = color;
        }
    }

    fn normalize(&mut self) -> Result<()> {
        let trimmed = self.base_url.trim().trim_end_matches('/').to_string();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        self.base_url = trimmed;

        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout must be at least 1 second".to_string()));
        }
        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(Error::Config(format!(
                "timeout must be at most {} seconds, got {}",
                MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
