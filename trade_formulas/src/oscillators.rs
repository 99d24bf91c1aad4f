//! Oscillator calculations
//!
//! Relative Strength Index (RSI) from aggregate gains and losses.

use crate::{MathError, Result};

/// Relative Strength Index over the whole input.
///
/// `RS = sum(gains) / sum(losses)` and `RSI = 100 - 100 / (1 + RS)`.
/// This is a single aggregate ratio, not the smoothed rolling RSI: every
/// gain and loss supplied contributes with equal weight. Losses are given as
/// non-negative magnitudes.
///
/// Fails with [`MathError::DivideByZero`] when the losses sum to zero,
/// including when `losses` is empty.
///
/// ```
/// use trade_formulas::calculate_rsi;
///
/// // Equal gains and losses sit at the midpoint
/// assert_eq!(calculate_rsi(&[1.0, 1.0], &[2.0]).unwrap(), 50.0);
/// ```
pub fn calculate_rsi(gains: &[f64], losses: &[f64]) -> Result<f64> {
    let total_gain: f64 = gains.iter().sum();
    let total_loss: f64 = losses.iter().sum();

    if total_loss == 0.0 {
        tracing::debug!(
            total_gain,
            losses = losses.len(),
            "rsi rejected: losses sum to zero"
        );
        return Err(MathError::DivideByZero(
            "Sum of losses is zero, cannot calculate RSI".to_string(),
        ));
    }

    let rs = total_gain / total_loss;
    Ok(100.0 - (100.0 / (1.0 + rs)))
}
