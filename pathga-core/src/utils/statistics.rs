#[cfg(test)]
#[path = "../../tests/unit/utils/statistics_test.rs"]
mod statistics_test;

/// Returns coefficient of variation, zero when mean is zero.
pub fn get_cv(values: &[f64]) -> f64 {
    let (variance, mean) = get_variance_mean(values);
    if mean == 0. {
        return 0.;
    }

    variance.sqrt() / mean
}

/// Gets mean of values using given slice.
pub fn get_mean_slice(values: &[f64]) -> f64 {
    if values.is_empty() { 0. } else { values.iter().sum::<f64>() / values.len() as f64 }
}

fn get_variance_mean(values: &[f64]) -> (f64, f64) {
    let mean = get_mean_slice(values);

    let (first, second) = values.iter().fold((0., 0.), |acc, v| {
        let dev = v - mean;
        (acc.0 + dev * dev, acc.1 + dev)
    });

    if values.is_empty() {
        return (0., mean);
    }

    // NOTE Bessel's correction is not used here
    ((first - (second * second / values.len() as f64)) / (values.len() as f64), mean)
}
