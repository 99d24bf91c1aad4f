//! Return-based calculations
//!
//! Contains:
//! - Profit and Loss (P&L) of a closed trade
//! - Sharpe Ratio

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Profit or loss of a trade: `(exit_price - entry_price) * shares_traded`.
///
/// A negative result is a loss. Inputs are not validated, so short positions
/// can be expressed with a negative share count.
///
/// ```
/// use trade_formulas::calculate_pnl;
///
/// assert_eq!(calculate_pnl(50.0, 45.0, 10.0), -50.0);
/// ```
pub fn calculate_pnl(entry_price: f64, exit_price: f64, shares_traded: f64) -> f64 {
    (exit_price - entry_price) * shares_traded
}

/// Sharpe ratio: excess return over the risk-free rate per unit of volatility.
///
/// Fails with [`MathError::DivideByZero`] when `portfolio_std_dev` is zero.
pub fn calculate_sharpe_ratio(
    portfolio_return: f64,
    risk_free_rate: f64,
    portfolio_std_dev: f64,
) -> Result<f64> {
    if portfolio_std_dev == 0.0 {
        tracing::debug!(
            portfolio_return,
            risk_free_rate,
            "sharpe ratio rejected: zero standard deviation"
        );
        return Err(MathError::DivideByZero(
            "Portfolio standard deviation is zero, cannot calculate Sharpe ratio".to_string(),
        ));
    }

    Ok((portfolio_return - risk_free_rate) / portfolio_std_dev)
}

/// A single round-trip trade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub entry_price: f64,
    pub exit_price: f64,
    pub shares_traded: f64,
}

impl Trade {
    /// Create a new trade
    pub fn new(entry_price: f64, exit_price: f64, shares_traded: f64) -> Self {
        Self {
            entry_price,
            exit_price,
            shares_traded,
        }
    }

    /// Profit or loss of this trade
    pub fn pnl(&self) -> f64 {
        calculate_pnl(self.entry_price, self.exit_price, self.shares_traded)
    }
}
