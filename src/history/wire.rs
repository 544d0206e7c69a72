//! Serde mapping for the chart v8 response body.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
pub(crate) struct ChartDoc {
    pub(crate) chart: Option<ChartNode>,
}

#[derive(Deserialize)]
pub(crate) struct ChartNode {
    pub(crate) result: Option<Vec<ChartResult>>,
    pub(crate) error: Option<ChartErrorNode>,
}

#[derive(Deserialize)]
pub(crate) struct ChartErrorNode {
    pub(crate) code: String,
    pub(crate) description: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct ChartResult {
    pub(crate) meta: Option<ChartMeta>,
    pub(crate) timestamp: Option<Vec<i64>>,
    pub(crate) indicators: IndicatorsNode,
    pub(crate) events: Option<EventsNode>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct ChartMeta {
    pub(crate) timezone: Option<String>,
    pub(crate) gmtoffset: Option<i64>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct IndicatorsNode {
    pub(crate) quote: Vec<OhlcvArrays>,
    pub(crate) adjclose: Vec<AdjCloseArrays>,
}

/// Parallel per-bar arrays; a `None` entry is a hole in that bar.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct OhlcvArrays {
    pub(crate) open: Vec<Option<f64>>,
    pub(crate) high: Vec<Option<f64>>,
    pub(crate) low: Vec<Option<f64>>,
    pub(crate) close: Vec<Option<f64>>,
    pub(crate) volume: Vec<Option<u64>>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct AdjCloseArrays {
    pub(crate) adjclose: Vec<Option<f64>>,
}

/// Event maps are keyed by the event's Unix timestamp as a string.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct EventsNode {
    pub(crate) dividends: Option<BTreeMap<String, DividendNode>>,
    pub(crate) splits: Option<BTreeMap<String, SplitNode>>,
}

#[derive(Deserialize)]
pub(crate) struct DividendNode {
    pub(crate) amount: Option<f64>,
    pub(crate) date: Option<i64>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SplitNode {
    #[serde(deserialize_with = "de_split_term")]
    pub(crate) numerator: Option<u64>,
    #[serde(deserialize_with = "de_split_term")]
    pub(crate) denominator: Option<u64>,
    pub(crate) split_ratio: Option<String>,
    pub(crate) date: Option<i64>,
}

/// Yahoo is loose about split terms: they arrive as integers, as floats
/// like `4.0`, or as strings like `"4"`. Null and missing both mean absent.
fn de_split_term<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(u) = n.as_u64() {
                return Ok(Some(u));
            }
            let Some(f) = n.as_f64() else {
                return Err(D::Error::custom("unsupported number for split term"));
            };
            if !f.is_finite() {
                return Err(D::Error::custom("non-finite split term"));
            }
            let rounded = f.round();
            if (f - rounded).abs() < 1e-9 && rounded >= 0.0 {
                Ok(Some(rounded as u64))
            } else {
                Err(D::Error::custom(format!("split term is not an integer: {f}")))
            }
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<u64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("bad numeric string for split term: '{s}'")))
        }
        Some(other) => Err(D::Error::custom(format!(
            "unexpected JSON type for split term: {other}"
        ))),
    }
}
