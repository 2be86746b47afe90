//! CSV export of an [`EsgTable`].
//!
//! Involvement areas differ per ticker, so they are materialized here into a sparse
//! table: one column per product seen in any row, `No` where a ticker lacks it.

use std::collections::{BTreeMap, HashSet};
use std::io::{Read, Write};

use crate::core::EsgError;
use crate::report::{EsgRow, EsgTable};

/// Default file name offered for exports.
pub const DEFAULT_EXPORT_FILE: &str = "esg_data_export.csv";

/// Fill value for products a ticker has no entry for.
pub const MISSING_PRODUCT: &str = "No";

/// Fixed leading columns, in output order.
pub const BASE_COLUMNS: [&str; 8] = [
    "Ticker",
    "Total ESG Risk Score",
    "Total ESG Risk Level",
    "Environmental Risk",
    "Social Risk",
    "Governance Risk",
    "Controversy Score",
    "Controversy Category Average",
];

/// Distinct product names across all rows, in order of first appearance.
pub fn involvement_columns(table: &EsgTable) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cols = Vec::new();
    for row in &table.rows {
        for product in row.scores.involvement_areas.keys() {
            if seen.insert(product.as_str()) {
                cols.push(product.clone());
            }
        }
    }
    cols
}

/// Header row: base columns then product columns.
pub fn headers(table: &EsgTable) -> Vec<String> {
    BASE_COLUMNS
        .iter()
        .map(|s| s.to_string())
        .chain(involvement_columns(table))
        .collect()
}

fn num(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

fn record(row: &EsgRow, products: &[String]) -> Vec<String> {
    let s = &row.scores;
    let mut rec = vec![
        row.ticker.clone(),
        num(s.total),
        s.total_level.clone().unwrap_or_default(),
        num(s.environmental),
        num(s.social),
        num(s.governance),
        num(s.controversy_score),
        num(s.controversy_category_average),
    ];
    rec.extend(products.iter().map(|p| {
        s.involvement_areas
            .get(p)
            .cloned()
            .unwrap_or_else(|| MISSING_PRODUCT.to_string())
    }));
    rec
}

/// Write the joined table as CSV. Null values are empty cells.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_csv<W: Write>(table: &EsgTable, writer: W) -> Result<(), EsgError> {
    let products = involvement_columns(table);
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(headers(table))?;
    for row in &table.rows {
        wtr.write_record(record(row, &products))?;
    }
    wtr.flush()?;
    tracing::debug!(rows = table.len(), products = products.len(), "wrote CSV export");
    Ok(())
}

/// The CSV export as a string.
pub fn to_csv_string(table: &EsgTable) -> Result<String, EsgError> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// One row of a previously exported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedRow {
    pub ticker: String,
    /// Every non-ticker column, keyed by header.
    pub cells: BTreeMap<String, String>,
}

impl ExportedRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// A previously exported file, read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedTable {
    pub headers: Vec<String>,
    pub rows: Vec<ExportedRow>,
}

impl ExportedTable {
    pub fn row(&self, ticker: &str) -> Option<&ExportedRow> {
        self.rows.iter().find(|r| r.ticker == ticker)
    }

    /// Product columns, i.e. everything after the fixed base columns.
    pub fn product_columns(&self) -> &[String] {
        self.headers.get(BASE_COLUMNS.len()..).unwrap_or(&[])
    }
}

/// Read an export produced by [`write_csv`].
///
/// # Errors
///
/// Returns [`EsgError::MissingColumn`] without a `Ticker` column, or [`EsgError::Csv`]
/// on malformed input.
pub fn read_csv<R: Read>(reader: R) -> Result<ExportedTable, EsgError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let ticker_idx = headers
        .iter()
        .position(|h| h == BASE_COLUMNS[0])
        .ok_or_else(|| EsgError::MissingColumn(BASE_COLUMNS[0].to_string()))?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let mut ticker = String::new();
        let mut cells = BTreeMap::new();
        for (i, (h, v)) in headers.iter().zip(rec.iter()).enumerate() {
            if i == ticker_idx {
                ticker = v.to_string();
            } else {
                cells.insert(h.clone(), v.to_string());
            }
        }
        rows.push(ExportedRow { ticker, cells });
    }
    Ok(ExportedTable { headers, rows })
}
