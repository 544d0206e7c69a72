//! Tiny text charts for plain-mode output.

/// Renders a line chart of `values` into `height` rows of `width` columns.
///
/// Values are bucketed into columns by averaging, so any number of points
/// fits any width. Returns an empty vec for an empty series.
pub fn line_chart(values: &[f64], width: usize, height: usize) -> Vec<String> {
    if values.is_empty() || width == 0 || height == 0 {
        return Vec::new();
    }

    let cols = bucket(values, width);
    let (min, max) = min_max(&cols);
    let span = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };

    // Row index per column, 0 = bottom.
    let levels: Vec<usize> = cols
        .iter()
        .map(|v| (((v - min) / span) * (height - 1) as f64).round() as usize)
        .collect();

    let label_width = axis_label(max).len().max(axis_label(min).len());
    let mut rows = Vec::with_capacity(height);
    for row in (0..height).rev() {
        let label = if row == height - 1 {
            axis_label(max)
        } else if row == 0 {
            axis_label(min)
        } else {
            String::new()
        };
        let mut line = format!("{label:>label_width$} \u{2502}");
        for (i, &level) in levels.iter().enumerate() {
            let prev = if i == 0 { level } else { levels[i - 1] };
            let (lo, hi) = (prev.min(level), prev.max(level));
            if level == row {
                line.push('\u{2022}');
            } else if row > lo && row < hi {
                // Vertical connector between adjacent columns.
                line.push('\u{2502}');
            } else {
                line.push(' ');
            }
        }
        rows.push(line);
    }
    rows
}

/// Renders a bar chart (used for volume) into `height` rows.
pub fn bar_chart(values: &[f64], width: usize, height: usize) -> Vec<String> {
    if values.is_empty() || width == 0 || height == 0 {
        return Vec::new();
    }

    let cols = bucket(values, width);
    let max = cols.iter().copied().fold(0.0_f64, f64::max);
    let scale = if max > 0.0 { max } else { 1.0 };

    let levels: Vec<usize> = cols
        .iter()
        .map(|v| ((v / scale) * height as f64).ceil() as usize)
        .collect();

    let label_width = axis_label(max).len();
    let mut rows = Vec::with_capacity(height);
    for row in (0..height).rev() {
        let label = if row == height - 1 {
            axis_label(max)
        } else {
            String::new()
        };
        let mut line = format!("{label:>label_width$} \u{2502}");
        for &level in &levels {
            line.push(if level > row { '\u{2588}' } else { ' ' });
        }
        rows.push(line);
    }
    rows
}

/// Averages `values` down (or stretches them up) to exactly `width` columns.
fn bucket(values: &[f64], width: usize) -> Vec<f64> {
    let n = values.len();
    if n <= width {
        return values.to_vec();
    }
    (0..width)
        .map(|i| {
            let start = i * n / width;
            let end = (((i + 1) * n) / width).max(start + 1);
            let slice = &values[start..end];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

fn min_max(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}

fn axis_label(v: f64) -> String {
    if v.abs() >= 1000.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_renders_nothing() {
        assert!(line_chart(&[], 40, 8).is_empty());
        assert!(bar_chart(&[], 40, 8).is_empty());
    }

    #[test]
    fn flat_series_does_not_divide_by_zero() {
        let rows = line_chart(&[5.0, 5.0, 5.0], 10, 4);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().any(|r| r.contains('\u{2022}')));
    }

    #[test]
    fn bucketing_reduces_to_width() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        assert_eq!(bucket(&values, 10).len(), 10);
        // Short series pass through untouched.
        assert_eq!(bucket(&[1.0, 2.0], 10).len(), 2);
    }

    #[test]
    fn bar_chart_tallest_column_fills_height() {
        let rows = bar_chart(&[1.0, 10.0], 2, 4);
        // The max column must reach the top row.
        assert!(rows[0].ends_with(" \u{2588}") || rows[0].contains('\u{2588}'));
    }
}
