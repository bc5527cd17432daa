//! Utility functions for working with data slices

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use segment_core::utils::mean;
///
/// let purchases = [8000.0, 9000.0, 10000.0];
/// assert_eq!(mean(&purchases), 9000.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Calculate the sample standard deviation (n-1 denominator)
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use segment_core::utils::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    // A constant slice has zero spread even when rounding in `mean` would
    // say otherwise.
    if data.windows(2).all(|w| w[0] == w[1]) {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;
    variance.sqrt()
}
