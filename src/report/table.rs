use serde::Serialize;

use crate::esg::EsgScores;

/// One ticker that returned ESG data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EsgRow {
    pub ticker: String,
    #[serde(flatten)]
    pub scores: EsgScores,
}

impl EsgRow {
    /// Total score; rows only exist for tickers that have one.
    pub fn total(&self) -> f64 {
        self.scores.total.unwrap_or(f64::NAN)
    }
}

/// Rows for every requested ticker that had a total score, in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EsgTable {
    /// Number of tickers that were requested, with or without data.
    pub requested: usize,
    pub rows: Vec<EsgRow>,
}

impl EsgTable {
    pub fn new(requested: usize) -> Self {
        Self {
            requested,
            rows: Vec::new(),
        }
    }

    /// Append a fetch result. Records without a total score are dropped.
    ///
    /// Returns whether a row was added.
    pub fn push(&mut self, ticker: impl Into<String>, scores: EsgScores) -> bool {
        let ticker = ticker.into();
        if !scores.has_data() {
            tracing::debug!(ticker = %ticker, "no total score; dropped from table");
            return false;
        }
        self.rows.push(EsgRow { ticker, scores });
        true
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Detail lookup by ticker.
    pub fn row(&self, ticker: &str) -> Option<&EsgRow> {
        self.rows.iter().find(|r| r.ticker.eq_ignore_ascii_case(ticker))
    }

    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.ticker.as_str())
    }

    /// The `n` rows with the highest total score; ties keep table order.
    pub fn top_by_total(&self, n: usize) -> Vec<&EsgRow> {
        let mut rows: Vec<&EsgRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.total().total_cmp(&a.total()));
        rows.truncate(n);
        rows
    }
}
