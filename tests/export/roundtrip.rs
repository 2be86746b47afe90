use std::collections::BTreeMap;

use yf_esg::export::{self, BASE_COLUMNS, MISSING_PRODUCT};
use yf_esg::{EsgBatch, EsgScores, EsgTable};

use crate::common;

fn sample_table() -> EsgTable {
    let mut t = EsgTable::new(3);
    t.push(
        "AAPL",
        EsgScores {
            total: Some(14.2),
            total_level: Some("Low".into()),
            environmental: Some(0.6),
            social: Some(7.0),
            governance: Some(6.6),
            controversy_score: Some(3.0),
            controversy_category_average: Some(2.1),
            involvement_areas: BTreeMap::from([
                ("Tobacco Products".to_string(), "No".to_string()),
                ("Alcoholic Beverages".to_string(), "No".to_string()),
            ]),
        },
    );
    t.push(
        "XOM",
        EsgScores {
            total: Some(41.6),
            total_level: Some("Severe".into()),
            environmental: Some(26.4),
            involvement_areas: BTreeMap::from([(
                "Thermal Coal".to_string(),
                "Significant, 5-9.9%".to_string(),
            )]),
            ..Default::default()
        },
    );
    t
}

#[test]
fn export_then_read_preserves_values() {
    let table = sample_table();
    let csv = export::to_csv_string(&table).unwrap();
    let back = export::read_csv(csv.as_bytes()).unwrap();

    assert_eq!(&back.headers[..BASE_COLUMNS.len()], &BASE_COLUMNS.map(String::from)[..]);
    assert_eq!(
        back.product_columns(),
        &["Alcoholic Beverages", "Tobacco Products", "Thermal Coal"].map(String::from)[..]
    );
    assert_eq!(back.rows.len(), 2);

    let aapl = back.row("AAPL").unwrap();
    assert_eq!(aapl.get("Total ESG Risk Score"), Some("14.2"));
    assert_eq!(aapl.get("Total ESG Risk Level"), Some("Low"));
    assert_eq!(aapl.get("Controversy Category Average"), Some("2.1"));
    assert_eq!(aapl.get("Tobacco Products"), Some("No"));
    assert_eq!(aapl.get("Thermal Coal"), Some(MISSING_PRODUCT));

    let xom = back.row("XOM").unwrap();
    assert_eq!(xom.get("Thermal Coal"), Some("Significant, 5-9.9%"));
    assert_eq!(xom.get("Alcoholic Beverages"), Some(MISSING_PRODUCT));
    assert_eq!(xom.get("Social Risk"), Some(""));

    // every (ticker, field) survives the trip
    for row in &table.rows {
        let got = back.row(&row.ticker).unwrap();
        let s = &row.scores;
        let num = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        assert_eq!(got.get("Environmental Risk"), Some(num(s.environmental).as_str()));
        assert_eq!(got.get("Governance Risk"), Some(num(s.governance).as_str()));
        assert_eq!(got.get("Controversy Score"), Some(num(s.controversy_score).as_str()));
        for (product, involvement) in &s.involvement_areas {
            assert_eq!(got.get(product), Some(involvement.as_str()));
        }
    }
}

#[test]
fn export_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(export::DEFAULT_EXPORT_FILE);
    export::write_csv(&sample_table(), std::fs::File::create(&path).unwrap()).unwrap();

    let back = export::read_csv(std::fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(back.rows.len(), 2);
}

#[tokio::test]
async fn fetched_table_exports_fixture_products() {
    let server = common::setup_server();
    let _m = common::mock_sustainability_fixture(&server, "AAPL");

    let table = EsgBatch::new(common::client_for(&server))
        .load(&["AAPL".to_string()])
        .await;
    let csv = export::to_csv_string(&table).unwrap();
    let back = export::read_csv(csv.as_bytes()).unwrap();

    assert_eq!(back.product_columns().len(), 5);
    assert_eq!(back.row("AAPL").unwrap().get("Military Contracting"), Some("No"));
}
