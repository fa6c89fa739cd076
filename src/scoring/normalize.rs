//! Min-max scaling shared by feature derivation and the scoring engine.

/// Added to the range so near-constant slices never divide by zero.
pub const NORMALIZATION_EPSILON: f64 = 1e-9;

/// Value assigned to every element of a zero-variance slice.
pub const DEGENERATE_NORMALIZED_VALUE: f64 = 1.0;

/// Scales `values` into `[0, 1]` relative to the slice's own min and max.
pub fn min_max(values: &[f64]) -> Vec<f64> {
    let Some((min, max)) = bounds(values) else {
        return Vec::new();
    };
    if max == min {
        return vec![DEGENERATE_NORMALIZED_VALUE; values.len()];
    }
    let range = max - min + NORMALIZATION_EPSILON;
    values.iter().map(|value| (value - min) / range).collect()
}

/// Percentile rank in `(0, 1]`; tied values share their average rank.
pub fn percentile_ranks(values: &[f64]) -> Vec<f64> {
    let count = values.len();
    let mut order: Vec<usize> = (0..count).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; count];
    let mut start = 0;
    while start < count {
        let mut end = start + 1;
        while end < count && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // 1-based positions start+1..=end share their mean.
        let rank = (start + 1 + end) as f64 / 2.0 / count as f64;
        for &index in &order[start..end] {
            ranks[index] = rank;
        }
        start = end;
    }
    ranks
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(values.iter().fold((first, first), |(min, max), &value| {
        (min.min(value), max.max(value))
    }))
}

#[cfg(test)]
mod tests {
    use super::{min_max, percentile_ranks};

    #[test]
    fn min_max_spans_unit_interval() {
        let scaled = min_max(&[2.0, 4.0, 3.0]);
        assert!(scaled[0].abs() < 1e-12);
        assert!((scaled[1] - 1.0).abs() < 1e-6);
        assert!((scaled[2] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_variance_slice_maps_to_one() {
        assert_eq!(min_max(&[7.0, 7.0, 7.0]), vec![1.0, 1.0, 1.0]);
        assert_eq!(min_max(&[0.3]), vec![1.0]);
        assert!(min_max(&[]).is_empty());
    }

    #[test]
    fn percentile_ranks_average_ties() {
        let ranks = percentile_ranks(&[0.1, 0.5, 0.5, 0.9]);
        assert_eq!(ranks, vec![0.25, 0.625, 0.625, 1.0]);
    }

    #[test]
    fn percentile_ranks_keep_input_order() {
        let ranks = percentile_ranks(&[0.9, 0.1, 0.5, 0.5, 0.1]);
        assert_eq!(ranks, vec![1.0, 0.3, 0.7, 0.7, 0.3]);
        assert!(percentile_ranks(&[]).is_empty());
    }
}
