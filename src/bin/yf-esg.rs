//! Command-line ESG dashboard: fetch, summarize, inspect and export.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use url::Url;

use yf_esg::export::{self, DEFAULT_EXPORT_FILE};
use yf_esg::input::TickerInput;
use yf_esg::report::{render_detail, render_overview};
use yf_esg::{EsgBatch, EsgClient, EsgTable, Summary};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// A single ticker symbol. Takes precedence over --file.
    #[arg(short, long)]
    ticker: Option<String>,

    /// CSV file with a `Ticker` column.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Ticker to show the detail view for. Defaults to the first one with data.
    #[arg(short, long)]
    detail: Option<String>,

    /// List the N companies with the highest total score in the overview.
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Write the joined table as CSV.
    #[arg(short, long, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_FILE)]
    export: Option<PathBuf>,

    /// Print the table and summary as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Override the quote page base URL.
    #[arg(long, value_name = "URL")]
    base_url: Option<Url>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Sets the level of tracing. Falls back to RUST_LOG, then `warn`.
    #[arg(long, global = true)]
    trace: Option<TraceLevel>,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum TraceLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl TraceLevel {
    fn directive(self) -> &'static str {
        match self {
            TraceLevel::Error => "error",
            TraceLevel::Warn => "warn",
            TraceLevel::Info => "info",
            TraceLevel::Debug => "debug",
            TraceLevel::Trace => "trace",
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a Summary,
    table: &'a EsgTable,
}

fn init_tracing(level: Option<TraceLevel>) {
    let filter = match level {
        Some(l) => EnvFilter::new(l.directive()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_client(cli: &Cli) -> anyhow::Result<EsgClient> {
    let mut b = EsgClient::builder();
    if let Some(url) = &cli.base_url {
        b = b.base_quote(url.clone());
    }
    if let Some(secs) = cli.timeout {
        b = b.timeout(Duration::from_secs(secs));
    }
    Ok(b.build()?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.trace);
    debug!("command line input recorded: {cli:?}");

    let Some(source) = TickerInput::select(cli.ticker.clone(), cli.file.clone()) else {
        anyhow::bail!("provide a ticker with --ticker or a CSV file with --file");
    };
    let tickers = source
        .resolve()
        .with_context(|| format!("reading tickers from {source:?}"))?;
    info!(count = tickers.len(), "fetching ESG data");

    let mut batch = EsgBatch::new(build_client(&cli)?);
    let table = batch.load(&tickers).await;

    if table.is_empty() {
        anyhow::bail!("No ESG data found for the given tickers.");
    }

    if let Some(path) = &cli.export {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        export::write_csv(&table, file)?;
        info!(path = %path.display(), rows = table.len(), "exported CSV");
    }

    let summary = Summary::from_table(&table);

    if cli.json {
        let out = JsonReport {
            summary: &summary,
            table: &table,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if table.len() > 1 {
        println!("{}", render_overview(&summary, &table, cli.top));
    }

    let row = match cli.detail.as_deref() {
        Some(t) => table
            .row(t)
            .with_context(|| format!("no ESG data for {t}"))?,
        None => &table.rows[0],
    };
    println!("{}", render_detail(row));
    Ok(())
}
