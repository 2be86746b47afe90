use yf_esg::{EsgBatch, Summary, input::normalize_tickers};

use crate::common;

#[tokio::test]
async fn valid_and_invalid_ticker_gives_half_coverage() {
    let server = common::setup_server();
    let m_aapl = common::mock_sustainability_fixture(&server, "AAPL");
    let m_bad = common::mock_status(&server, "ZZZZINVALID", 404);

    let mut batch = EsgBatch::new(common::client_for(&server));
    let tickers = normalize_tickers(["aapl", "ZZZZINVALID"]);
    let table = batch.load(&tickers).await;

    m_aapl.assert();
    m_bad.assert();

    assert_eq!(table.len(), 1);
    let row = table.row("AAPL").unwrap();
    assert_eq!(row.scores.total, Some(14.2));
    assert_eq!(row.scores.total_level.as_deref(), Some("Low"));

    let summary = Summary::from_table(&table);
    assert_eq!(summary.requested, 2);
    assert!((summary.coverage_pct - 50.0).abs() < 1e-9);
}

#[tokio::test]
async fn rows_match_tickers_with_total_score() {
    let server = common::setup_server();
    let _a = common::mock_sustainability_fixture(&server, "AAPL");
    let _b = common::mock_sustainability(
        &server,
        "HALF",
        common::page(r#"<section data-testid="ENVIRONMENTAL_SCORE"><h4>3.3</h4></section>"#),
    );
    let _c = common::mock_sustainability(
        &server,
        "XOM",
        common::page(
            r#"<section data-testid="TOTAL_ESG_SCORE"><h4>41.6</h4><span class="perf">Severe</span></section>"#,
        ),
    );
    let _d = common::mock_status(&server, "GONE", 500);

    let tickers = normalize_tickers(["AAPL", "HALF", "XOM", "GONE"]);
    let table = EsgBatch::new(common::client_for(&server)).load(&tickers).await;

    assert_eq!(table.requested, 4);
    assert_eq!(table.tickers().collect::<Vec<_>>(), vec!["AAPL", "XOM"]);
}
