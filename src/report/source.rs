use crate::core::{EsgClient, EsgError};
use crate::esg::{EsgBuilder, EsgScores};

/// A trait for anything that can produce ESG scores for a symbol.
///
/// It is implemented by [`EsgClient`] and lets the batch layer run against a
/// stand-in source in tests.
pub trait EsgSource: Send + Sync {
    /// Fetch the scores for one symbol.
    ///
    /// `Ok(None)` means the provider has no page for the symbol.
    fn fetch_esg<'a>(
        &'a self,
        symbol: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Option<EsgScores>, EsgError>> + Send + 'a>,
    >;
}

impl EsgSource for EsgClient {
    fn fetch_esg<'a>(
        &'a self,
        symbol: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Option<EsgScores>, EsgError>> + Send + 'a>,
    > {
        Box::pin(async move { EsgBuilder::new(self, symbol).fetch().await })
    }
}
