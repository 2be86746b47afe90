mod api;
mod model;
pub mod scrape;

pub use model::{EsgScores, RiskLevel};
pub use scrape::parse_sustainability_html;

use crate::core::{EsgClient, EsgError};

/// A builder for fetching ESG (Environmental, Social, and Governance) data for a specific symbol.
pub struct EsgBuilder<'a> {
    client: &'a EsgClient,
    symbol: String,
}

impl<'a> EsgBuilder<'a> {
    /// Creates a new `EsgBuilder` for a given symbol.
    pub fn new(client: &'a EsgClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
        }
    }

    /// Fetches and scrapes the sustainability page for the symbol.
    ///
    /// Returns `Ok(None)` when the page answers with a non-success status. Sections
    /// missing from a successful page only leave their fields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the body cannot be read.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn fetch(self) -> Result<Option<EsgScores>, EsgError> {
        api::fetch_esg_scores(self.client, &self.symbol).await
    }
}
