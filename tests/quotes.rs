mod common;

use httpmock::Method::GET;
use stockboard::Ticker;
use stockboard::core::MarketError;

#[tokio::test]
async fn quote_maps_the_v7_fields() {
    let server = common::setup_server();
    let mock = common::mock_quote_v7(&server, "MSFT", common::quote_body("MSFT", Some(410.25)));
    let client = common::preauth_client(&server);

    let quote = Ticker::new(&client, "MSFT").quote().await.unwrap();

    mock.assert();
    assert_eq!(quote.symbol, "MSFT");
    assert_eq!(quote.shortname.as_deref(), Some("Test Corp"));
    assert_eq!(quote.regular_market_price, Some(410.25));
    assert_eq!(quote.regular_market_previous_close, Some(99.5));
    assert_eq!(quote.currency.as_deref(), Some("USD"));
    assert_eq!(quote.exchange.as_deref(), Some("NasdaqGS"));
    assert_eq!(quote.market_state.as_deref(), Some("CLOSED"));
}

#[tokio::test]
async fn unknown_symbol_is_an_invalid_ticker() {
    let server = common::setup_server();
    let _mock = common::mock_quote_v7(
        &server,
        "NOPE",
        r#"{"quoteResponse":{"result":[],"error":null}}"#.to_string(),
    );
    let client = common::preauth_client(&server);

    let err = Ticker::new(&client, "NOPE").quote().await.unwrap_err();
    assert!(matches!(err, MarketError::InvalidTicker(sym) if sym == "NOPE"));
}

#[tokio::test]
async fn unauthorized_quote_retries_once_with_a_crumb() {
    let server = common::setup_server();

    let denied = server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .is_true(|req| !req.query_params().iter().any(|(k, _)| k == "crumb"));
        then.status(401).body("unauthorized");
    });
    let allowed = server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .query_param("crumb", common::CRUMB);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::quote_body("AAPL", Some(190.0)));
    });

    let client = common::preauth_client(&server);
    let quote = Ticker::new(&client, "AAPL").quote().await.unwrap();

    denied.assert();
    allowed.assert();
    assert_eq!(quote.regular_market_price, Some(190.0));
}
