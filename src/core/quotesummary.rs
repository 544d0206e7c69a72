//! Shared plumbing for the v10 quoteSummary endpoint.

use serde::Deserialize;

use crate::core::{MarketClient, MarketError, net};

#[derive(Deserialize)]
pub(crate) struct V10Envelope {
    #[serde(rename = "quoteSummary")]
    pub(crate) quote_summary: Option<V10QuoteSummary>,
}

#[derive(Deserialize)]
pub(crate) struct V10QuoteSummary {
    pub(crate) result: Option<Vec<serde_json::Value>>,
    pub(crate) error: Option<V10Error>,
}

#[derive(Deserialize)]
pub(crate) struct V10Error {
    pub(crate) description: String,
}

/// Fetch the requested quoteSummary modules for a symbol.
///
/// A stale crumb (a 401/403 status, or an "Invalid Crumb" error body) is
/// refreshed once; any other Yahoo error is passed through as
/// [`MarketError::Data`].
pub(crate) async fn fetch(
    client: &MarketClient,
    symbol: &str,
    modules: &str,
    caller: &str,
) -> Result<V10Envelope, MarketError> {
    for attempt in 0..=1 {
        client.ensure_credentials().await?;
        let crumb = client
            .crumb()
            .await
            .ok_or_else(|| MarketError::Auth("crumb is not set".into()))?;

        let mut url = client.base_quote_summary().join(symbol)?;
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("modules", modules);
            qp.append_pair("crumb", &crumb);
        }

        let body = match net::fetch_text(client, url).await {
            Ok(body) => body,
            Err(MarketError::Status {
                status: 401 | 403, ..
            }) if attempt == 0 => {
                tracing::debug!(symbol, caller, "quoteSummary unauthorized; refreshing crumb");
                client.clear_crumb().await;
                continue;
            }
            Err(e) => return Err(e),
        };

        let env: V10Envelope = serde_json::from_str(&body)
            .map_err(|e| MarketError::Data(format!("quoteSummary json parse: {e}")))?;

        if let Some(error) = env.quote_summary.as_ref().and_then(|qs| qs.error.as_ref()) {
            if error.description.to_ascii_lowercase().contains("invalid crumb") && attempt == 0 {
                tracing::debug!(symbol, caller, "invalid crumb; refreshing and retrying");
                client.clear_crumb().await;
                continue;
            }
            return Err(MarketError::Data(format!(
                "yahoo error: {}",
                error.description
            )));
        }

        return Ok(env);
    }

    Err(MarketError::Data(format!(
        "{caller} API call failed after crumb refresh"
    )))
}

/// Fetch modules and deserialize the single result object into `T`.
pub(crate) async fn fetch_module_result<T>(
    client: &MarketClient,
    symbol: &str,
    modules: &str,
    caller: &str,
) -> Result<T, MarketError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let env = fetch(client, symbol, modules, caller).await?;

    let result_val = env
        .quote_summary
        .and_then(|qs| qs.result)
        .and_then(|mut v| v.pop())
        .ok_or_else(|| MarketError::Data("empty quoteSummary result".into()))?;

    serde_json::from_value(result_val)
        .map_err(|e| MarketError::Data(format!("quoteSummary result parse: {e}")))
}
