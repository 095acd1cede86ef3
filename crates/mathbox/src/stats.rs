//! Scalar statistics helpers.

/// The `n`-th root of `base`, computed as `base^(1/n)`.
pub fn nth_root(base: f64, n: f64) -> f64 {
    base.powf(1.0 / n)
}

/// The arithmetic mean, or `None` for an empty slice.
pub fn arithmetic_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// The geometric mean (the `n`-th root of the product of `n` values), or
/// `None` for an empty slice.
pub fn geometric_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        let product: f64 = values.iter().product();
        Some(nth_root(product, values.len() as f64))
    }
}
