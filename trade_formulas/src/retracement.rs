//! Fibonacci retracement levels

/// Standard Fibonacci retracement ratios
pub const FIBONACCI_RATIOS: [f64; 5] = [0.236, 0.382, 0.5, 0.618, 0.786];

/// Price level `retracement_level` of the way down from `high` to `low`.
///
/// `high - (high - low) * retracement_level`. The level is conventionally in
/// `[0, 1]` but is not clamped, so extensions beyond the range work too.
///
/// ```
/// use trade_formulas::calculate_fibonacci_retracement;
///
/// let level = calculate_fibonacci_retracement(150.0, 100.0, 0.5);
/// assert_eq!(level, 125.0);
/// ```
pub fn calculate_fibonacci_retracement(high: f64, low: f64, retracement_level: f64) -> f64 {
    high - ((high - low) * retracement_level)
}

/// Every standard retracement level between `high` and `low`, as
/// `(ratio, price)` pairs in the order of [`FIBONACCI_RATIOS`]
pub fn fibonacci_levels(high: f64, low: f64) -> Vec<(f64, f64)> {
    FIBONACCI_RATIOS
        .iter()
        .map(|&ratio| (ratio, calculate_fibonacci_retracement(high, low, ratio)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_retracement_calculation() {
        assert_relative_eq!(
            calculate_fibonacci_retracement(150.0, 100.0, 0.618),
            119.1,
            epsilon = 1e-9
        );

        // Endpoints
        assert_eq!(calculate_fibonacci_retracement(150.0, 100.0, 0.0), 150.0);
        assert_eq!(calculate_fibonacci_retracement(150.0, 100.0, 1.0), 100.0);
    }

    #[test]
    fn test_retracement_level_not_clamped() {
        // 161.8% extension lands below the low
        let level = calculate_fibonacci_retracement(150.0, 100.0, 1.618);
        assert_relative_eq!(level, 69.1, epsilon = 1e-9);
    }

    #[test]
    fn test_fibonacci_levels() {
        let levels = fibonacci_levels(200.0, 100.0);
        assert_eq!(levels.len(), FIBONACCI_RATIOS.len());

        // Prices descend as the ratio grows
        assert!(levels.windows(2).all(|pair| pair[0].1 > pair[1].1));

        let (ratio, price) = levels[2];
        assert_eq!(ratio, 0.5);
        assert_eq!(price, 150.0);
    }
}
