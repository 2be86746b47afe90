//! Public client surface + builder.
//! Defaults (UA, endpoints) live in `constants`.

mod constants;

use crate::core::EsgError;
use constants::{DEFAULT_BASE_QUOTE, SUSTAINABILITY_PATH, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Defines how [`EsgBatch`](crate::report::EsgBatch) treats its memoized table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Return the memoized table when the ticker list matches the memo key exactly;
    /// otherwise fetch and replace the memo. (Default)
    #[default]
    Use,
    /// Always fetch from the network and replace the memo with the new table.
    Refresh,
    /// Always fetch from the network and leave the memo untouched.
    Bypass,
}

/// HTTP client for the sustainability pages.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct EsgClient {
    http: Client,
    base_quote: Url,
}

impl Default for EsgClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl EsgClient {
    /// Create a new builder.
    pub fn builder() -> EsgClientBuilder {
        EsgClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub fn base_quote(&self) -> &Url {
        &self.base_quote
    }

    /// Resolve the sustainability page URL for `symbol`.
    pub fn sustainability_url(&self, symbol: &str) -> Result<Url, EsgError> {
        let url = self
            .base_quote
            .join(&format!("{symbol}/"))?
            .join(SUSTAINABILITY_PATH)?;
        Ok(url)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EsgClientBuilder {
    user_agent: Option<String>,
    base_quote: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl EsgClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quotes HTML base (e.g., `https://finance.yahoo.com/quote/`).
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<EsgClient, EsgError> {
        let base_quote = match self.base_quote {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(EsgClient { http, base_quote })
    }
}
