//! Volatility and dispersion calculations
//!
//! Contains:
//! - Mean and population variance
//! - Standard Deviation
//! - Covariance
//! - Beta against a market benchmark
//!
//! All dispersion measures use the population form (divide by `N`, not `N - 1`).

use crate::{MathError, Result};

/// Arithmetic mean of `data`
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        tracing::debug!("mean rejected: empty series");
        return Err(MathError::InvalidArgument(
            "Cannot calculate the mean of an empty series".to_string(),
        ));
    }

    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population variance of `data`
pub fn variance(data: &[f64]) -> Result<f64> {
    let mean = mean(data)?;

    // A constant series has no spread even when its mean is inexact
    if data.iter().all(|&value| value == data[0]) {
        return Ok(0.0);
    }

    let variance = data
        .iter()
        .map(|&value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64;

    Ok(variance)
}

/// Population standard deviation of `data`.
///
/// Fails with [`MathError::InvalidArgument`] when `data` is empty.
///
/// ```
/// use trade_formulas::calculate_standard_deviation;
///
/// let std_dev = calculate_standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(std_dev, 2.0);
/// ```
pub fn calculate_standard_deviation(data: &[f64]) -> Result<f64> {
    Ok(variance(data)?.sqrt())
}

/// Population covariance of two index-aligned series
pub fn covariance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        tracing::debug!(
            left = a.len(),
            right = b.len(),
            "covariance rejected: length mismatch"
        );
        return Err(MathError::InvalidArgument(format!(
            "Series must have the same length, got {} and {}",
            a.len(),
            b.len()
        )));
    }

    let mean_a = mean(a)?;
    let mean_b = mean(b)?;

    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| (x - mean_a) * (y - mean_b))
        .sum();

    Ok(sum / a.len() as f64)
}

/// Beta of a security against the market:
/// `cov(security, market) / (std_dev(security) * std_dev(market))`.
///
/// Both series are index-aligned returns and must have the same, non-zero
/// length ([`MathError::InvalidArgument`] otherwise). A series with zero
/// variance yields [`MathError::DivideByZero`].
pub fn calculate_beta(security_returns: &[f64], market_returns: &[f64]) -> Result<f64> {
    let cov = covariance(security_returns, market_returns)?;
    let security_std_dev = calculate_standard_deviation(security_returns)?;
    let market_std_dev = calculate_standard_deviation(market_returns)?;

    if security_std_dev == 0.0 || market_std_dev == 0.0 {
        tracing::debug!(
            security_std_dev,
            market_std_dev,
            "beta rejected: zero variance series"
        );
        return Err(MathError::DivideByZero(
            "Return series has zero variance, cannot calculate beta".to_string(),
        ));
    }

    Ok(cov / (security_std_dev * market_std_dev))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_deviation_calculation() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(calculate_standard_deviation(&data).unwrap(), 2.0);

        // A single value has no spread
        assert_eq!(calculate_standard_deviation(&[42.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_standard_deviation_empty() {
        assert!(matches!(
            calculate_standard_deviation(&[]),
            Err(MathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_variance_is_population() {
        // Sample variance would be 1.0, population is 2/3
        assert_relative_eq!(variance(&[1.0, 2.0, 3.0]).unwrap(), 2.0 / 3.0);
    }

    #[test]
    fn test_covariance_calculation() {
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, 2.0, 1.0];
        assert_relative_eq!(covariance(&a, &b).unwrap(), -2.0 / 3.0);
        assert_relative_eq!(covariance(&a, &a).unwrap(), variance(&a).unwrap());
    }

    #[test]
    fn test_beta_calculation() {
        assert_relative_eq!(
            calculate_beta(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap(),
            1.0,
            epsilon = 1e-12
        );

        // Perfectly inverse series
        assert_relative_eq!(
            calculate_beta(&[3.0, 2.0, 1.0], &[1.0, 2.0, 3.0]).unwrap(),
            -1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_beta_length_mismatch() {
        assert!(matches!(
            calculate_beta(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(MathError::InvalidArgument(_))
        ));
        assert!(matches!(
            calculate_beta(&[], &[]),
            Err(MathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_constant_series_has_zero_spread() {
        // 0.1 is inexact, so the naive mean differs from the values
        let data = [0.1; 7];
        assert_eq!(variance(&data).unwrap(), 0.0);
        assert_eq!(calculate_standard_deviation(&[0.1, 0.1, 0.1]).unwrap(), 0.0);
    }

    #[test]
    fn test_beta_inexact_constant_series() {
        assert!(matches!(
            calculate_beta(&[0.1, 0.1, 0.1], &[1.0, 2.0, 3.0]),
            Err(MathError::DivideByZero(_))
        ));
        assert!(matches!(
            calculate_beta(&[1.0, 2.0, 3.0], &[0.1, 0.1, 0.1]),
            Err(MathError::DivideByZero(_))
        ));
    }

    #[test]
    fn test_beta_zero_variance() {
        assert!(matches!(
            calculate_beta(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]),
            Err(MathError::DivideByZero(_))
        ));
        assert!(matches!(
            calculate_beta(&[0.0, 0.0], &[1.0, 2.0]),
            Err(MathError::DivideByZero(_))
        ));
    }
}
