use yf_esg::{EsgBuilder, EsgClient};

#[tokio::test]
#[ignore]
async fn live_esg_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let client = EsgClient::builder().build().unwrap();

    // Records `tests/fixtures/sustainability_html_MSFT.html` when YF_ESG_RECORD=1
    // and the crate is built with `--features test-mode`.
    let esg = EsgBuilder::new(&client, "MSFT").fetch().await.unwrap();

    if !crate::common::is_recording() {
        let esg = esg.expect("MSFT sustainability page should be served");
        assert!(
            esg.total.is_some() || esg.environmental.is_some(),
            "Expected at least one ESG score to be present for MSFT"
        );
    }
}
