//! Default endpoints and the request User-Agent.

/// Yahoo rejects clients with no browser-looking UA, so send a common one.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Chart (price history) API base; the symbol is appended as a path segment.
pub(crate) const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// quoteSummary API base; the symbol is appended as a path segment.
pub(crate) const DEFAULT_BASE_QUOTE_SUMMARY: &str =
    "https://query1.finance.yahoo.com/v10/finance/quoteSummary/";

/// v7 quote API; symbols go in the query string.
pub(crate) const DEFAULT_BASE_QUOTE_V7: &str = "https://query1.finance.yahoo.com/v7/finance/quote";

/// Any request here answers with a Set-Cookie for the Yahoo domains.
pub(crate) const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com/consent";

/// Returns a crumb once the cookie above is in the jar.
pub(crate) const DEFAULT_CRUMB_URL: &str = "https://query1.finance.yahoo.com/v1/test/getcrumb";
