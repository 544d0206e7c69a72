//! Cookie & crumb acquisition for the authenticated Yahoo endpoints.

use reqwest::header::SET_COOKIE;

use crate::core::error::MarketError;

impl super::MarketClient {
    pub(crate) async fn ensure_credentials(&self) -> Result<(), MarketError> {
        // Fast path: check if credentials exist with a read lock.
        if self.state.read().await.crumb.is_some() {
            return Ok(());
        }

        // Slow path: acquire the dedicated fetch lock so only one task proceeds.
        let _guard = self.credential_fetch_lock.lock().await;

        // Double-check: another task might have fetched while this one waited.
        if self.state.read().await.crumb.is_some() {
            return Ok(());
        }

        self.get_cookie().await?;
        self.get_crumb().await?;

        Ok(())
    }

    pub(crate) async fn clear_crumb(&self) {
        let mut state = self.state.write().await;
        state.crumb = None;
    }

    pub(crate) async fn crumb(&self) -> Option<String> {
        let state = self.state.read().await;
        state.crumb.clone()
    }

    async fn get_cookie(&self) -> Result<(), MarketError> {
        let resp = self.http.get(self.cookie_url.clone()).send().await?;

        let cookie = resp
            .headers()
            .get(SET_COOKIE)
            .ok_or(MarketError::Auth("no cookie received".into()))?
            .to_str()
            .map_err(|_| MarketError::Auth("invalid cookie header format".into()))?
            .to_string();

        self.state.write().await.cookie = Some(cookie);
        Ok(())
    }

    async fn get_crumb(&self) -> Result<(), MarketError> {
        let state = self.state.read().await;
        if state.cookie.is_none() {
            return Err(MarketError::Auth("cookie is missing, cannot get crumb".into()));
        }
        drop(state); // release read lock before the http call

        let resp = self.http.get(self.crumb_url.clone()).send().await?;
        let crumb = resp.text().await?;

        if crumb.is_empty() || crumb.contains('{') || crumb.contains('<') {
            return Err(MarketError::Auth(format!("received invalid crumb: {crumb}")));
        }

        self.state.write().await.crumb = Some(crumb);
        Ok(())
    }
}
