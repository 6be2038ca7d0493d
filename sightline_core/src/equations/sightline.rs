//! # Sightline Clearance Formulas
//!
//! Closed-form relations between two consecutive seating rows and a common
//! focus point (pitch centre line, stage edge).
//!
//! ## Notation
//!
//! - `X` = Horizontal distance from the front row's eye to the focus
//! - `H` = Vertical distance from the front row's eye down to the focus
//! - `T` = Tread size (going), the horizontal spacing between rows
//! - `R` = Riser height of the row behind
//! - `C` = C-value, the clearance of the rear sightline over the front eye
//!
//! ```text
//!                               rear eye (X+T, H+R)
//!                             ╱
//!              front eye ● ╱ ← C
//!                (X, H)  ╱
//!                      ╱
//!   focus ●──────────────────────────
//! ```
//!
//! The rear spectator's line to the focus passes above the front eye at
//! height `X(H+R)/(X+T)`; the C-value is that height minus `H`.
//!
//! ## Sign Conventions
//!
//! - Distances are measured away from the focus and are positive for a
//!   conventional stand
//! - A negative C-value means the sightline passes below the front eye

use crate::errors::{CalcError, CalcResult};

/// Calculate the C-value a rear row achieves over the row in front
///
/// # Formula
/// - C = X(H+R)/(X+T) - H
///
/// # Arguments
/// * `x` - Horizontal eye-to-focus distance of the front row
/// * `h` - Vertical eye-to-focus distance of the front row
/// * `tread` - Tread size between the rows
/// * `next_riser` - Riser height of the rear row
///
/// Returns NaN or ±Infinity when `x + tread == 0`; use
/// [`checked_clearance`] when that must be reported.
#[inline]
pub fn clearance(x: f64, h: f64, tread: f64, next_riser: f64) -> f64 {
    (x * (h + next_riser)) / (x + tread) - h
}

/// [`clearance`] with the division and result checked for finiteness.
///
/// `row` is the index of the front row, used only for the error report.
pub fn checked_clearance(row: usize, x: f64, h: f64, tread: f64, next_riser: f64) -> CalcResult<f64> {
    if x + tread == 0.0 {
        return Err(CalcError::non_finite_result(
            row,
            "c_value",
            format!("eye-to-focus distance {} plus tread {} is zero (division by zero)", x, tread),
        ));
    }
    let c = clearance(x, h, tread, next_riser);
    if !c.is_finite() {
        return Err(CalcError::non_finite_result(
            row,
            "c_value",
            format!("clearance evaluated to {}", c),
        ));
    }
    Ok(c)
}

/// Rate at which the C-value grows per unit of riser height
///
/// # Formula
/// - dC/dR = X/(X+T)
///
/// The riser search only terminates when this is positive.
#[inline]
pub fn clearance_slope(x: f64, tread: f64) -> f64 {
    x / (x + tread)
}

/// Exact riser height that produces a target C-value
///
/// # Formula
/// - R = (C+H)(X+T)/X - H
///
/// Returns `None` when the C-value does not increase with the riser (the
/// target is then unreachable by raising the rear row) or the result is not
/// finite.
pub fn required_riser_height(x: f64, h: f64, tread: f64, target_c: f64) -> Option<f64> {
    let slope = clearance_slope(x, tread);
    if !(slope.is_finite() && slope > 0.0) {
        return None;
    }
    let r = (target_c + h) * (x + tread) / x - h;
    r.is_finite().then_some(r)
}

/// Number of whole increments needed to lift `start` to at least `required`
///
/// Zero when `start` already suffices. `increment` must be positive.
#[inline]
pub fn increments_needed(required: f64, start: f64, increment: f64) -> f64 {
    ((required - start) / increment).ceil().max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn test_clearance_default_first_row() {
        // X = 10000, H = 2220, T = 900, R = 280
        // C = 10000 * 2500 / 10900 - 2220 = 73.577...
        let c = clearance(10000.0, 2220.0, 900.0, 280.0);
        assert!((c - 73.58).abs() < 0.01, "C = {}", c);
    }

    #[test]
    fn test_clearance_negative_below_eye() {
        // Minimum riser 180 leaves the sightline under the front eye
        let c = clearance(10000.0, 2220.0, 900.0, 180.0);
        assert!(c < 0.0, "C = {}", c);
    }

    #[test]
    fn test_checked_clearance_division_by_zero() {
        let err = checked_clearance(4, -900.0, 2220.0, 900.0, 180.0).unwrap_err();
        assert_eq!(err.error_code(), "NON_FINITE_RESULT");
        assert!(matches!(err, CalcError::NonFiniteResult { row: 4, .. }));
    }

    #[test]
    fn test_checked_clearance_matches_unchecked() {
        let c = checked_clearance(0, 10000.0, 2220.0, 900.0, 255.0).unwrap();
        assert!(approx_eq(c, clearance(10000.0, 2220.0, 900.0, 255.0)));
    }

    #[test]
    fn test_required_riser_inverts_clearance() {
        let r = required_riser_height(10000.0, 2220.0, 900.0, 60.0).unwrap();
        let c = clearance(10000.0, 2220.0, 900.0, r);
        assert!(approx_eq(c, 60.0), "C = {}", c);
        // 180 + 4 * 25 = 280 is the first increment at or above r
        assert!(r > 255.0 && r <= 280.0, "R = {}", r);
    }

    #[test]
    fn test_required_riser_unreachable() {
        assert!(required_riser_height(0.0, 2220.0, 900.0, 60.0).is_none());
        assert!(required_riser_height(-500.0, 2220.0, 900.0, 60.0).is_none());
    }

    #[test]
    fn test_increments_needed() {
        assert_eq!(increments_needed(270.0, 180.0, 25.0), 4.0);
        assert_eq!(increments_needed(280.0, 180.0, 25.0), 4.0);
        assert_eq!(increments_needed(100.0, 180.0, 25.0), 0.0);
    }
}
