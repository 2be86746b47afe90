use httpmock::Method::GET;
use yf_esg::{EsgBuilder, EsgError};

use crate::common;

#[tokio::test]
async fn non_success_status_is_no_data() {
    let server = common::setup_server();
    let mock = common::mock_status(&server, "ZZZZINVALID", 404);
    let client = common::client_for(&server);

    let got = EsgBuilder::new(&client, "ZZZZINVALID").fetch().await.unwrap();
    mock.assert();
    assert!(got.is_none());
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = common::setup_server();
    let mock = common::mock_status(&server, "FLAKY", 503);
    let client = common::client_for(&server);

    let got = EsgBuilder::new(&client, "FLAKY").fetch().await.unwrap();
    assert!(got.is_none());
    mock.assert_calls(1);
}

#[tokio::test]
async fn request_sends_browser_user_agent() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/quote/MSFT/sustainability/")
            .header(
                "user-agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36",
            );
        then.status(200).body(common::page(""));
    });
    let client = common::client_for(&server);

    let got = EsgBuilder::new(&client, "MSFT").fetch().await.unwrap();
    mock.assert();
    assert!(got.is_some());
}

#[tokio::test]
async fn connection_failure_is_an_http_error() {
    // Nothing listens on port 9 of localhost in the test environment.
    let client = yf_esg::EsgClient::builder()
        .base_quote(url::Url::parse("http://127.0.0.1:9/quote/").unwrap())
        .build()
        .unwrap();
    let err = EsgBuilder::new(&client, "AAPL").fetch().await.unwrap_err();
    assert!(matches!(err, EsgError::Http(_)));
}
