//! Moving average calculation
//!
//! Simple Moving Average (SMA) over the most recent values of a price series.

use crate::{MathError, Result};

/// Arithmetic mean of the last `time_period` prices.
///
/// `prices` is chronological, oldest first. The period must be greater than
/// zero and no longer than the series; anything else is
/// [`MathError::InvalidArgument`].
///
/// ```
/// use trade_formulas::calculate_ma;
///
/// let prices = [98.0, 100.0, 102.0, 104.0];
/// assert_eq!(calculate_ma(&prices, 3).unwrap(), 102.0);
/// ```
pub fn calculate_ma(prices: &[f64], time_period: usize) -> Result<f64> {
    if time_period == 0 {
        tracing::debug!(len = prices.len(), "moving average rejected: zero period");
        return Err(MathError::InvalidArgument(
            "Period must be greater than zero".to_string(),
        ));
    }

    if time_period > prices.len() {
        tracing::debug!(
            time_period,
            len = prices.len(),
            "moving average rejected: period longer than series"
        );
        return Err(MathError::InvalidArgument(format!(
            "Not enough data for moving average. Need {} values, have {}.",
            time_period,
            prices.len()
        )));
    }

    let window = &prices[prices.len() - time_period..];
    Ok(window.iter().sum::<f64>() / time_period as f64)
}
