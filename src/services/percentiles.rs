/// Reads several percentiles from the distribution of `values`.
///
/// Each percentile is clamped to `[0, 100]` and mapped to the nearest rank
/// of the ascending sort. Empty input yields zeros.
pub fn percentiles_f64(values: &[f64], percentiles: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let Some(last_rank) = sorted.len().checked_sub(1) else {
        return vec![0.0; percentiles.len()];
    };

    percentiles
        .iter()
        .map(|p| {
            let fraction = p.clamp(0.0, 100.0) / 100.0;
            sorted[(fraction * last_rank as f64).round() as usize]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentiles_f64_sorts_before_lookup() {
        // len=5 => p50 at rank 2, p85 at round(3.4)=3
        let values = [40.0, 0.0, 30.0, 10.0, 20.0];
        assert_eq!(
            percentiles_f64(&values, &[0.0, 50.0, 85.0, 100.0]),
            vec![0.0, 20.0, 30.0, 40.0]
        );
    }

    #[test]
    fn out_of_range_percentiles_clamp_to_extremes() {
        let values = [12.5, 3.0, 7.0];
        assert_eq!(percentiles_f64(&values, &[-5.0, 250.0]), vec![3.0, 12.5]);
    }

    #[test]
    fn single_deficit_answers_every_percentile() {
        assert_eq!(percentiles_f64(&[42.0], &[0.0, 50.0, 100.0]), vec![42.0; 3]);
    }

    #[test]
    fn empty_input_yields_zeros() {
        assert_eq!(percentiles_f64(&[], &[50.0, 85.0]), vec![0.0, 0.0]);
    }
}
