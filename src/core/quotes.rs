//! Wire model and fetch for the v7 quote API.

use serde::Deserialize;
use url::Url;

use crate::core::{MarketClient, MarketError};

#[derive(Deserialize)]
pub(crate) struct V7Envelope {
    #[serde(rename = "quoteResponse")]
    pub(crate) quote_response: Option<V7QuoteResponse>,
}

#[derive(Deserialize)]
pub(crate) struct V7QuoteResponse {
    pub(crate) result: Option<Vec<V7QuoteNode>>,
    #[allow(dead_code)]
    pub(crate) error: Option<serde_json::Value>,
}

#[derive(Deserialize, Clone)]
pub(crate) struct V7QuoteNode {
    #[serde(default)]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "shortName")]
    pub(crate) short_name: Option<String>,
    #[serde(rename = "regularMarketPrice")]
    pub(crate) regular_market_price: Option<f64>,
    #[serde(rename = "regularMarketPreviousClose")]
    pub(crate) regular_market_previous_close: Option<f64>,
    pub(crate) currency: Option<String>,
    #[serde(rename = "fullExchangeName")]
    pub(crate) full_exchange_name: Option<String>,
    pub(crate) exchange: Option<String>,
    #[serde(rename = "marketState")]
    pub(crate) market_state: Option<String>,
}

/// Fetch one or more quotes from the v7 API.
///
/// The first attempt goes out without a crumb; a 401/403 answer triggers a
/// single credentialed retry.
pub(crate) async fn fetch_v7_quotes(
    client: &MarketClient,
    symbols: &[&str],
) -> Result<Vec<V7QuoteNode>, MarketError> {
    async fn attempt(
        client: &MarketClient,
        symbols: &[&str],
        crumb: Option<&str>,
    ) -> Result<(String, Url, Option<u16>), MarketError> {
        let mut url = client.base_quote_v7().clone();
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("symbols", &symbols.join(","));
            if let Some(c) = crumb {
                qp.append_pair("crumb", c);
            }
        }

        let resp = client
            .http()
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;

        if status.is_success() {
            Ok((body, url, None))
        } else {
            Ok((body, url, Some(status.as_u16())))
        }
    }

    let (body, url, maybe_status) = attempt(client, symbols, None).await?;

    let body_to_parse = match maybe_status {
        None => body,
        Some(401 | 403) => {
            client.ensure_credentials().await?;
            let crumb = client
                .crumb()
                .await
                .ok_or_else(|| MarketError::Auth("crumb is not set after ensuring credentials".into()))?;

            let (body, url, maybe_status) = attempt(client, symbols, Some(&crumb)).await?;
            if let Some(status) = maybe_status {
                return Err(MarketError::Status {
                    status,
                    url: url.to_string(),
                });
            }
            body
        }
        Some(status) => {
            return Err(MarketError::Status {
                status,
                url: url.to_string(),
            });
        }
    };

    let env: V7Envelope = serde_json::from_str(&body_to_parse)?;

    Ok(env
        .quote_response
        .and_then(|qr| qr.result)
        .unwrap_or_default())
}
