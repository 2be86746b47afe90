use yf_esg::{EsgBuilder, RiskLevel};

use crate::common;

#[tokio::test]
async fn offline_esg_uses_recorded_fixture() {
    let sym = "AAPL";
    let server = common::setup_server();
    let mock = common::mock_sustainability_fixture(&server, sym);
    let client = common::client_for(&server);

    let esg = EsgBuilder::new(&client, sym)
        .fetch()
        .await
        .unwrap()
        .expect("page served with 200");

    mock.assert();

    assert_eq!(esg.total, Some(14.2));
    assert_eq!(esg.total_level.as_deref(), Some("Low"));
    assert_eq!(esg.risk_level(), RiskLevel::Low);
    assert_eq!(esg.environmental, Some(0.6));
    assert_eq!(esg.social, Some(7.0));
    assert_eq!(esg.governance, Some(6.6));
    assert_eq!(esg.controversy_score, Some(3.0));
    assert_eq!(esg.controversy_category_average, Some(2.1));
}

#[tokio::test]
async fn offline_involvement_table_skips_header_row() {
    let sym = "AAPL";
    let server = common::setup_server();
    let mock = common::mock_sustainability_fixture(&server, sym);
    let client = common::client_for(&server);

    let esg = EsgBuilder::new(&client, sym).fetch().await.unwrap().unwrap();
    mock.assert();

    assert_eq!(esg.involvement_areas.len(), 5);
    assert!(!esg.involvement_areas.contains_key("Products and Activities"));
    assert_eq!(
        esg.involvement_areas.get("Tobacco Products").map(String::as_str),
        Some("No")
    );
}
