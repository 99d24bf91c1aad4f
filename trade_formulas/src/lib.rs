//! # Trade Formulas
//!
//! Stateless arithmetic for trading decisions.
//! Every function here is a pure transformation of its inputs: there is no
//! shared state, so any of them can be called from any thread.
//!
//! Formulas are grouped by indicator family:
//! - [`returns`]: profit and loss, Sharpe ratio
//! - [`moving_averages`]: moving average
//! - [`oscillators`]: Relative Strength Index (RSI)
//! - [`retracement`]: Fibonacci retracement
//! - [`volatility`]: standard deviation, covariance, beta
//! - [`position_sizing`]: forex lot size
//!
//! ## Example
//!
//! ```
//! use trade_formulas::{calculate_ma, calculate_pnl, MathError};
//!
//! assert_eq!(calculate_pnl(100.0, 110.0, 5.0), 50.0);
//! assert_eq!(calculate_ma(&[100.0, 102.0, 104.0], 3).unwrap(), 102.0);
//! assert!(matches!(
//!     calculate_ma(&[100.0], 0),
//!     Err(MathError::InvalidArgument(_))
//! ));
//! ```

use thiserror::Error;

// Indicator modules
pub mod moving_averages;
pub mod oscillators;
pub mod position_sizing;
pub mod retracement;
pub mod returns;
pub mod volatility;

pub use moving_averages::calculate_ma;
pub use oscillators::calculate_rsi;
pub use position_sizing::{calculate_lot_size, LotSizeParams};
pub use retracement::{calculate_fibonacci_retracement, fibonacci_levels};
pub use returns::{calculate_pnl, calculate_sharpe_ratio, Trade};
pub use volatility::{calculate_beta, calculate_standard_deviation};

/// Errors that can occur in trading formula calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A denominator evaluated to zero
    #[error("Division by zero: {0}")]
    DivideByZero(String),

    /// An input was empty, out of range, or mismatched with another input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for trading formula operations
pub type Result<T> = std::result::Result<T, MathError>;
