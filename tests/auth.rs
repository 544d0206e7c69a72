mod common;

use httpmock::Method::GET;
use httpmock::MockServer;
use url::Url;

use stockboard::Ticker;
use stockboard::core::MarketClient;

fn client_with_auth_endpoints(server: &MockServer) -> MarketClient {
    MarketClient::builder()
        .base_quote_summary(
            Url::parse(&format!("{}/v10/finance/quoteSummary/", server.base_url())).unwrap(),
        )
        .cookie_url(Url::parse(&format!("{}/consent", server.base_url())).unwrap())
        .crumb_url(Url::parse(&format!("{}/v1/test/getcrumb", server.base_url())).unwrap())
        .build()
        .unwrap()
}

fn stats_body() -> String {
    r#"{
      "quoteSummary":{
        "result":[{"summaryDetail":{"trailingPE":{"raw":27.4}}}],
        "error":null
      }
    }"#
    .to_string()
}

#[tokio::test]
async fn credentials_are_fetched_before_the_first_quote_summary_call() {
    let server = common::setup_server();

    let cookie = server.mock(|when, then| {
        when.method(GET).path("/consent");
        then.status(200).header(
            "set-cookie",
            "A=B; Max-Age=315360000; Domain=.yahoo.com; Path=/; Secure; SameSite=None",
        );
    });
    let crumb = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(200).body("fresh-crumb");
    });
    let summary = server.mock(|when, then| {
        when.method(GET)
            .path("/v10/finance/quoteSummary/META")
            .query_param("crumb", "fresh-crumb");
        then.status(200)
            .header("content-type", "application/json")
            .body(stats_body());
    });

    let client = client_with_auth_endpoints(&server);
    let stats = Ticker::new(&client, "META").key_stats().await.unwrap();

    cookie.assert();
    crumb.assert();
    summary.assert();
    assert_eq!(stats.trailing_pe, Some(27.4));
}

#[tokio::test]
async fn an_invalid_crumb_is_refreshed_once() {
    let server = common::setup_server();

    let _cookie = server.mock(|when, then| {
        when.method(GET).path("/consent");
        then.status(200)
            .header("set-cookie", "A=B; Domain=.yahoo.com; Path=/");
    });
    let crumb = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(200).body("second-crumb");
    });
    let rejected = server.mock(|when, then| {
        when.method(GET)
            .path("/v10/finance/quoteSummary/META")
            .query_param("crumb", "stale-crumb");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"quoteSummary":{"result":null,"error":{"code":"Unauthorized","description":"Invalid Crumb"}}}"#);
    });
    let accepted = server.mock(|when, then| {
        when.method(GET)
            .path("/v10/finance/quoteSummary/META")
            .query_param("crumb", "second-crumb");
        then.status(200)
            .header("content-type", "application/json")
            .body(stats_body());
    });

    let client = MarketClient::builder()
        .base_quote_summary(
            Url::parse(&format!("{}/v10/finance/quoteSummary/", server.base_url())).unwrap(),
        )
        .cookie_url(Url::parse(&format!("{}/consent", server.base_url())).unwrap())
        .crumb_url(Url::parse(&format!("{}/v1/test/getcrumb", server.base_url())).unwrap())
        .preauth("A=B", "stale-crumb")
        .build()
        .unwrap();

    let stats = Ticker::new(&client, "META").key_stats().await.unwrap();

    rejected.assert();
    crumb.assert();
    accepted.assert();
    assert_eq!(stats.trailing_pe, Some(27.4));
}
