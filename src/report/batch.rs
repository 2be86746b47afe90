use crate::core::CacheMode;

use super::{EsgSource, EsgTable};

#[derive(Debug)]
struct Memo {
    key: Vec<String>,
    table: EsgTable,
}

/// Fetches a ticker list one symbol at a time and memoizes the resulting table.
///
/// The memo key is the exact ordered ticker list: loading the same list again returns
/// the memoized table without touching the network, while any different list (other
/// symbols, or the same symbols in another order) fetches afresh and replaces the memo.
pub struct EsgBatch<S> {
    source: S,
    cache_mode: CacheMode,
    memo: Option<Memo>,
}

impl<S: EsgSource> EsgBatch<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache_mode: CacheMode::Use,
            memo: None,
        }
    }

    /// Sets how the memo is consulted on subsequent loads.
    #[must_use]
    pub fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Drop the memoized table.
    pub fn invalidate(&mut self) {
        self.memo = None;
    }

    /// Whether a load of `tickers` would be served from the memo.
    pub fn is_memoized(&self, tickers: &[String]) -> bool {
        self.cache_mode == CacheMode::Use && self.memo.as_ref().is_some_and(|m| m.key == tickers)
    }

    /// Build the table for `tickers`.
    ///
    /// Failures are per ticker: a symbol whose fetch errors or returns no total score
    /// simply has no row and lowers the coverage.
    pub async fn load(&mut self, tickers: &[String]) -> EsgTable {
        if self.is_memoized(tickers)
            && let Some(m) = &self.memo
        {
            tracing::debug!(tickers = tickers.len(), "serving memoized table");
            return m.table.clone();
        }

        let table = self.fetch_table(tickers).await;
        if self.cache_mode != CacheMode::Bypass {
            self.memo = Some(Memo {
                key: tickers.to_vec(),
                table: table.clone(),
            });
        }
        table
    }

    async fn fetch_table(&self, tickers: &[String]) -> EsgTable {
        let mut table = EsgTable::new(tickers.len());
        for sym in tickers {
            match self.source.fetch_esg(sym).await {
                Ok(Some(scores)) => {
                    table.push(sym.clone(), scores);
                }
                Ok(None) => tracing::info!(ticker = %sym, "no ESG data"),
                Err(e) => tracing::warn!(ticker = %sym, error = %e, "ESG fetch failed"),
            }
        }
        tracing::info!(
            requested = table.requested,
            valid = table.len(),
            "ESG table built"
        );
        table
    }
}
