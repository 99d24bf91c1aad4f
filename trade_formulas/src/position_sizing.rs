//! Forex position sizing
//!
//! Sizes a position so that hitting the stop loss costs a fixed percentage of
//! the account.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Divisor turning a currency value into the value of one pip
pub const PIP_DIVISOR: f64 = 10_000.0;

/// Lot size risking `risk_pct` percent of `account_size` over `stop_loss_pips`.
///
/// ```text
/// risk_amount = account_size * risk_pct / 100
/// pip_value   = currency_value / 10000
/// lot_size    = risk_amount / (stop_loss_pips * pip_value)
/// ```
///
/// The result is rounded to two decimal places, with ties rounded half away
/// from zero (`f64::round`), not to the nearest even cent. A lot size too large
/// to scale by 100 is returned unrounded.
///
/// Fails with [`MathError::DivideByZero`] when `stop_loss_pips * pip_value` is
/// zero: either input is zero, or their product underflows.
///
/// ```
/// use trade_formulas::calculate_lot_size;
///
/// assert_eq!(calculate_lot_size(10_000.0, 1.0, 50.0, 10.0).unwrap(), 2000.0);
/// ```
pub fn calculate_lot_size(
    account_size: f64,
    risk_pct: f64,
    stop_loss_pips: f64,
    currency_value: f64,
) -> Result<f64> {
    let risk_per_lot = stop_loss_pips * pip_value(currency_value);
    if risk_per_lot == 0.0 {
        tracing::debug!(
            account_size,
            risk_pct,
            stop_loss_pips,
            currency_value,
            "lot size rejected: zero risk per lot"
        );
        return Err(MathError::DivideByZero(format!(
            "Stop loss of {} pips at currency value {} risks nothing per lot, cannot calculate lot size",
            stop_loss_pips, currency_value
        )));
    }

    let lot_size = risk_amount(account_size, risk_pct) / risk_per_lot;

    Ok(round_to_cents(lot_size))
}

fn risk_amount(account_size: f64, risk_pct: f64) -> f64 {
    account_size * (risk_pct / 100.0)
}

fn pip_value(currency_value: f64) -> f64 {
    currency_value / PIP_DIVISOR
}

fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Inputs for a lot size calculation, loadable from a config file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LotSizeParams {
    /// Account equity in account currency
    pub account_size: f64,
    /// Percentage of the account to risk, e.g. `1.0` for 1%
    pub risk_pct: f64,
    /// Distance to the stop loss in pips
    pub stop_loss_pips: f64,
    /// Currency value from which the pip value is derived
    pub currency_value: f64,
}

impl LotSizeParams {
    /// Amount of the account put at risk
    pub fn risk_amount(&self) -> f64 {
        risk_amount(self.account_size, self.risk_pct)
    }

    /// Value of a single pip
    pub fn pip_value(&self) -> f64 {
        pip_value(self.currency_value)
    }

    /// Lot size for these parameters, see [`calculate_lot_size`]
    pub fn lot_size(&self) -> Result<f64> {
        calculate_lot_size(
            self.account_size,
            self.risk_pct,
            self.stop_loss_pips,
            self.currency_value,
        )
    }
}
