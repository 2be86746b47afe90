//! yf-esg: ESG risk metrics from Yahoo Finance sustainability pages.
//!
//! The crate fetches one sustainability page per ticker, scrapes the total,
//! environmental, social and governance risk scores, the controversy level and the
//! product involvement table, and aggregates the results for reporting and CSV export.
//!
//! ```no_run
//! # use yf_esg::{EsgBatch, EsgClient, Summary, input::normalize_tickers};
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EsgClient::builder().build()?;
//! let tickers = normalize_tickers(["aapl", "msft"]);
//!
//! let mut batch = EsgBatch::new(client);
//! let table = batch.load(&tickers).await;
//! let summary = Summary::from_table(&table);
//! println!("coverage: {:.1}%", summary.coverage_pct);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod esg;
pub mod export;
pub mod input;
pub mod report;

pub use crate::core::{CacheMode, EsgClient, EsgClientBuilder, EsgError};
pub use esg::{EsgBuilder, EsgScores, RiskLevel, parse_sustainability_html};
pub use report::{EsgBatch, EsgRow, EsgSource, EsgTable, Summary};
