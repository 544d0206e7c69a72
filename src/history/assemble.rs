use crate::core::models::{Action, Candle};
use crate::history::wire::{EventsNode, OhlcvArrays};

/// Build candles from the parallel chart arrays.
///
/// When `auto_adjust` is set, OHLC values are scaled by the adjclose/close
/// factor of their row. Rows with any missing OHLC value are dropped unless
/// `keepna` is set, in which case they are kept with NaN holes.
pub(crate) fn assemble_candles(
    ts: &[i64],
    q: &OhlcvArrays,
    adj: &[Option<f64>],
    auto_adjust: bool,
    keepna: bool,
) -> Vec<Candle> {
    let mut out = Vec::new();

    for (i, &t) in ts.iter().enumerate() {
        let at = |v: &Vec<Option<f64>>| v.get(i).and_then(|x| *x);
        let mut open = at(&q.open);
        let mut high = at(&q.high);
        let mut low = at(&q.low);
        let mut close = at(&q.close);
        let volume = q.volume.get(i).and_then(|x| *x);

        if auto_adjust {
            let pf = price_factor(adj.get(i).and_then(|x| *x), close);
            for v in [&mut open, &mut high, &mut low, &mut close] {
                if let Some(v) = v.as_mut() {
                    *v *= pf;
                }
            }
        }

        if let (Some(ov), Some(hv), Some(lv), Some(cv)) = (open, high, low, close) {
            out.push(Candle {
                ts: t,
                open: ov,
                high: hv,
                low: lv,
                close: cv,
                volume,
            });
        } else if keepna {
            out.push(Candle {
                ts: t,
                open: open.unwrap_or(f64::NAN),
                high: high.unwrap_or(f64::NAN),
                low: low.unwrap_or(f64::NAN),
                close: close.unwrap_or(f64::NAN),
                volume,
            });
        }
    }

    out
}

fn price_factor(adjclose: Option<f64>, close: Option<f64>) -> f64 {
    match (adjclose, close) {
        (Some(a), Some(c)) if c != 0.0 && a.is_finite() && c.is_finite() => a / c,
        _ => 1.0,
    }
}

pub(crate) fn extract_actions(events: &Option<EventsNode>) -> Vec<Action> {
    let mut out: Vec<Action> = Vec::new();

    let Some(ev) = events.as_ref() else {
        return out;
    };

    if let Some(divs) = ev.dividends.as_ref() {
        for (k, d) in divs {
            let ts = k.parse::<i64>().unwrap_or(d.date.unwrap_or(0));
            if let Some(amount) = d.amount {
                out.push(Action::Dividend { ts, amount });
            }
        }
    }

    if let Some(splits) = ev.splits.as_ref() {
        for (k, s) in splits {
            let ts = k.parse::<i64>().unwrap_or(s.date.unwrap_or(0));
            // Terms that are missing or do not fit fall back to the ratio string.
            let terms = s
                .numerator
                .and_then(|n| u32::try_from(n).ok())
                .zip(s.denominator.and_then(|d| u32::try_from(d).ok()));
            let (num, den) = terms.unwrap_or_else(|| parse_ratio(s.split_ratio.as_deref()));

            out.push(Action::Split {
                ts,
                numerator: num,
                denominator: den,
            });
        }
    }

    out.sort_by_key(Action::ts);
    out
}

/// "4:1" -> (4, 1); anything unparseable becomes 1.
fn parse_ratio(ratio: Option<&str>) -> (u32, u32) {
    let Some(r) = ratio else { return (1, 1) };
    let mut it = r.split(':');
    let n = it.next().and_then(|x| x.parse().ok()).unwrap_or(1);
    let d = it.next().and_then(|x| x.parse().ok()).unwrap_or(1);
    (n, d)
}
