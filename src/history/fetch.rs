use crate::core::{Interval, MarketClient, MarketError, Range, net};
use crate::history::wire::{ChartDoc, ChartMeta, EventsNode, OhlcvArrays};

pub(crate) struct Fetched {
    pub(crate) ts: Vec<i64>,
    pub(crate) quote: OhlcvArrays,
    pub(crate) adjclose: Vec<Option<f64>>,
    pub(crate) events: Option<EventsNode>,
    pub(crate) meta: Option<ChartMeta>,
}

pub(crate) async fn fetch_chart(
    client: &MarketClient,
    symbol: &str,
    range: Option<Range>,
    period: Option<(i64, i64)>,
    interval: Interval,
    include_actions: bool,
) -> Result<Fetched, MarketError> {
    let mut url = client.base_chart().join(symbol)?;
    {
        let mut qp = url.query_pairs_mut();

        if let Some((p1, p2)) = period {
            if p1 >= p2 {
                return Err(MarketError::InvalidDates);
            }
            qp.append_pair("period1", &p1.to_string());
            qp.append_pair("period2", &p2.to_string());
        } else if let Some(r) = range {
            qp.append_pair("range", r.as_str());
        } else {
            return Err(MarketError::Data("no range or period set".into()));
        }

        qp.append_pair("interval", interval.as_str());
        if include_actions {
            qp.append_pair("events", "div|split");
        }
    }

    let body = net::fetch_text(client, url).await?;
    decode_chart(&body)
}

fn decode_chart(body: &str) -> Result<Fetched, MarketError> {
    let parsed: ChartDoc =
        serde_json::from_str(body).map_err(|e| MarketError::Data(format!("json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| MarketError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(MarketError::Data(format!(
            "yahoo error: {} - {}",
            err.code, err.description
        )));
    }

    let mut results = chart
        .result
        .ok_or_else(|| MarketError::Data("missing result".into()))?;

    let r0 = results
        .pop()
        .ok_or_else(|| MarketError::Data("empty result".into()))?;

    let ts = r0.timestamp.unwrap_or_default();
    let quote = r0.indicators.quote.into_iter().next().unwrap_or_default();
    let adjclose = r0
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|a| a.adjclose)
        .unwrap_or_default();

    Ok(Fetched {
        ts,
        quote,
        adjclose,
        events: r0.events,
        meta: r0.meta,
    })
}
