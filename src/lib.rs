//! # Trade Formulas Workspace
//!
//! Facade over the [`trade_formulas`] crate.
//!
//! ## Example
//!
//! ```
//! use trade_formulas_workspace::calculate_sharpe_ratio;
//!
//! let sharpe = calculate_sharpe_ratio(0.12, 0.02, 0.2).unwrap();
//! assert!((sharpe - 0.5).abs() < 1e-12);
//! ```

pub use trade_formulas::*;
