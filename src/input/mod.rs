//! Ticker list intake: normalization and CSV loading.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::core::EsgError;

/// Column an uploaded ticker file must carry.
pub const TICKER_COLUMN: &str = "Ticker";

/// Where the ticker list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerInput {
    /// A single symbol typed by the user.
    Single(String),
    /// A CSV file with a `Ticker` column.
    File(PathBuf),
}

impl TickerInput {
    /// Pick the active source. A single symbol takes precedence over a file.
    pub fn select(single: Option<String>, file: Option<PathBuf>) -> Option<Self> {
        match (single.filter(|s| !s.trim().is_empty()), file) {
            (Some(s), _) => Some(TickerInput::Single(s)),
            (None, Some(p)) => Some(TickerInput::File(p)),
            (None, None) => None,
        }
    }

    /// Resolve into a normalized, non-empty ticker list.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, lacks a `Ticker` column, or no symbols
    /// remain after normalization.
    pub fn resolve(&self) -> Result<Vec<String>, EsgError> {
        let tickers = match self {
            TickerInput::Single(s) => normalize_tickers([s.as_str()]),
            TickerInput::File(p) => tickers_from_path(p)?,
        };
        if tickers.is_empty() {
            return Err(EsgError::NoTickers);
        }
        Ok(tickers)
    }
}

/// Trim and uppercase symbols, dropping empties and later duplicates.
pub fn normalize_tickers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut dupes = 0usize;
    for s in raw {
        let sym = s.as_ref().trim().to_uppercase();
        if sym.is_empty() {
            continue;
        }
        if seen.insert(sym.clone()) {
            out.push(sym);
        } else {
            dupes += 1;
        }
    }
    if dupes > 0 {
        tracing::info!(dropped = dupes, kept = out.len(), "dropped duplicate tickers");
    }
    out
}

/// Read the `Ticker` column of a CSV stream.
///
/// # Errors
///
/// Returns [`EsgError::MissingColumn`] when the header has no `Ticker` column, or
/// [`EsgError::Csv`] on malformed input.
pub fn tickers_from_csv<R: Read>(reader: R) -> Result<Vec<String>, EsgError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let idx = rdr
        .headers()?
        .iter()
        .position(|h| h.trim() == TICKER_COLUMN)
        .ok_or_else(|| EsgError::MissingColumn(TICKER_COLUMN.to_string()))?;

    let mut raw = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(cell) = record.get(idx) {
            raw.push(cell.to_string());
        }
    }
    Ok(normalize_tickers(raw))
}

/// Read the `Ticker` column of a CSV file.
pub fn tickers_from_path(path: &Path) -> Result<Vec<String>, EsgError> {
    let file = std::fs::File::open(path)?;
    tickers_from_csv(file)
}
