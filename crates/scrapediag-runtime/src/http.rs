use crate::config::MAX_TIMEOUT_SECS;
use crate::{Error, Result};
use reqwest::blocking::Client;
use std::fmt;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("scrapediag/", env!("CARGO_PKG_VERSION"));

/// Read-only endpoints of the scraping service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Root,
    Debug,
    SoupContent,
    Trades,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Root => "/",
            Endpoint::Debug => "/debug",
            Endpoint::SoupContent => "/soup-content",
            Endpoint::Trades => "/trades",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Blocking client bound to one service base URL. Every request, the
/// liveness probe included, is cut off after the configured timeout.
#[derive(Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        if timeout > Duration::from_secs(MAX_TIMEOUT_SECS) {
            return Err(Error::Config(format!(
                "timeout must be at most {} seconds",
                MAX_TIMEOUT_SECS
            )));
        }
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// True on any 2xx answer from the root endpoint.
    pub fn is_alive(&self) -> bool {
        let url = self.url(Endpoint::Root);
        match self.http.get(&url).send() {
            Ok(resp) => {
                debug!(%url, status = resp.status().as_u16(), "liveness probe answered");
                resp.status().is_success()
            }
            Err(e) => {
                debug!(%url, error = %e, "liveness probe failed");
                false
            }
        }
    }

    /// GET an endpoint and return the body text. Non-2xx is an error that
    /// still carries the body, since the service explains failures there.
    pub fn get_text(&self, endpoint: Endpoint, query: &[(&str, String)]) -> Result<String> {
        let url = self.url(endpoint);
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let resp = request.send()?;
        let status = resp.status();
        debug!(%url, status = status.as_u16(), "fetched");
        if !status.is_success() {
            return Err(Error::Status {
                endpoint: endpoint.path().to_string(),
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        Ok(resp.text()?)
    }
}
