#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use url::Url;

use stockboard::core::MarketClient;

pub const CRUMB: &str = "test-crumb";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client pointed at the mock server with credentials already in place,
/// so no cookie/crumb round trip happens.
pub fn preauth_client(server: &MockServer) -> MarketClient {
    MarketClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .base_quote_v7(Url::parse(&format!("{}/v7/finance/quote", server.base_url())).unwrap())
        .base_quote_summary(
            Url::parse(&format!("{}/v10/finance/quoteSummary/", server.base_url())).unwrap(),
        )
        .preauth("A=B", CRUMB)
        .build()
        .unwrap()
}

pub fn mock_quote_v7<'a>(server: &'a MockServer, symbol: &str, body: String) -> Mock<'a> {
    let symbol = symbol.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .query_param("symbols", &symbol);
        then.status(200)
            .header("content-type", "application/json")
            .body(body.clone());
    })
}

pub fn mock_chart<'a>(server: &'a MockServer, symbol: &str, body: String) -> Mock<'a> {
    let path = format!("/v8/finance/chart/{symbol}");
    server.mock(move |when, then| {
        when.method(GET).path(&path);
        then.status(200)
            .header("content-type", "application/json")
            .body(body.clone());
    })
}

pub fn mock_quote_summary<'a>(
    server: &'a MockServer,
    symbol: &str,
    modules: &str,
    body: String,
) -> Mock<'a> {
    let path = format!("/v10/finance/quoteSummary/{symbol}");
    let modules = modules.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path(&path)
            .query_param("modules", &modules)
            .query_param("crumb", CRUMB);
        then.status(200)
            .header("content-type", "application/json")
            .body(body.clone());
    })
}

pub fn quote_body(symbol: &str, price: Option<f64>) -> String {
    let price = match price {
        Some(p) => format!(r#""regularMarketPrice":{p},"#),
        None => String::new(),
    };
    format!(
        r#"{{
          "quoteResponse":{{
            "result":[
              {{
                "symbol":"{symbol}",
                "shortName":"Test Corp",
                {price}
                "regularMarketPreviousClose":99.5,
                "currency":"USD",
                "fullExchangeName":"NasdaqGS",
                "marketState":"CLOSED"
              }}
            ],
            "error":null
          }}
        }}"#
    )
}

pub fn chart_body() -> String {
    r#"{
      "chart":{
        "result":[
          {
            "meta":{"timezone":"America/New_York","gmtoffset":-14400},
            "timestamp":[1000,2000,3000],
            "indicators":{
              "quote":[{
                "open":[100.0,101.0,102.0],
                "high":[101.0,102.0,103.0],
                "low":[99.0,100.0,101.0],
                "close":[100.5,101.5,102.5],
                "volume":[1000,1100,1200]
              }],
              "adjclose":[{"adjclose":[100.5,101.5,102.5]}]
            },
            "events":{
              "dividends":{"2000":{"date":2000,"amount":0.25}},
              "splits":{"3000":{"date":3000,"numerator":2,"denominator":1}}
            }
          }
        ],
        "error":null
      }
    }"#
    .to_string()
}
