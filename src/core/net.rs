use url::Url;

use crate::core::{MarketClient, MarketError};

/// GET a URL and return the body text, mapping non-2xx statuses to
/// [`MarketError::Status`]. One attempt; callers own any crumb-refresh logic.
pub(crate) async fn fetch_text(client: &MarketClient, url: Url) -> Result<String, MarketError> {
    let resp = client.http().get(url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(MarketError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(resp.text().await?)
}
