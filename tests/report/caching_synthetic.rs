use yf_esg::{CacheMode, EsgBatch};

use crate::common;

fn list(syms: &[&str]) -> Vec<String> {
    syms.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn batch_serves_same_list_from_memo() {
    let server = common::setup_server();

    // Each mock should be hit exactly once across both loads.
    let m_aapl = common::mock_sustainability_fixture(&server, "AAPL");
    let m_msft = common::mock_status(&server, "MSFT", 404);

    let mut batch = EsgBatch::new(common::client_for(&server));
    let tickers = list(&["AAPL", "MSFT"]);

    let first = batch.load(&tickers).await;
    let second = batch.load(&tickers).await;

    m_aapl.assert_calls(1);
    m_msft.assert_calls(1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn batch_new_list_bypasses_memo() {
    let server = common::setup_server();
    let m_aapl = common::mock_sustainability_fixture(&server, "AAPL");
    let m_msft = common::mock_status(&server, "MSFT", 404);

    let mut batch = EsgBatch::new(common::client_for(&server));
    batch.load(&list(&["AAPL"])).await;
    batch.load(&list(&["AAPL", "MSFT"])).await;

    m_aapl.assert_calls(2);
    m_msft.assert_calls(1);
}

#[tokio::test]
async fn batch_refresh_hits_network_again() {
    let server = common::setup_server();
    let m_aapl = common::mock_sustainability_fixture(&server, "AAPL");

    let mut batch = EsgBatch::new(common::client_for(&server)).cache_mode(CacheMode::Refresh);
    let tickers = list(&["AAPL"]);
    batch.load(&tickers).await;
    batch.load(&tickers).await;

    m_aapl.assert_calls(2);
}
