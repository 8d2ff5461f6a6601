//! # Rounding Primitives
//!
//! The two rounding policies used everywhere in the engine:
//!
//! - Labor quantities are expressed in hours and rounded to the nearest
//!   quarter hour, matching how crews book time.
//! - Currency amounts are rounded to two decimals (whole cents).
//!
//! ## Example
//!
//! ```rust
//! use offerte_core::rounding::{round_money, round_quarter_hour};
//!
//! assert_eq!(round_quarter_hour(3.1), 3.0);
//! assert_eq!(round_quarter_hour(3.13), 3.25);
//! assert_eq!(round_money(12.344), 12.34);
//! assert_eq!(round_money(12.346), 12.35);
//! ```

/// Round a currency amount to two decimals (whole cents).
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Round a labor quantity to the nearest quarter hour.
pub fn round_quarter_hour(hours: f64) -> f64 {
    (hours * 4.0).round() / 4.0
}

/// Check whether an hour figure sits on a quarter-hour boundary.
///
/// Used by invariant checks in tests; computed against a small epsilon
/// because the quantities are plain f64 values.
pub fn is_quarter_aligned(hours: f64) -> bool {
    let scaled = hours * 4.0;
    (scaled - scaled.round()).abs() < 1e-9
}
