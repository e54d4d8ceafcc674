//! Angle wrapping helpers for the orbit integrator.

use std::f32::consts::TAU;

/// Wrap an angle in radians into `[0, 2π)`.
///
/// `rem_euclid` keeps the result non-negative for negative inputs, so
/// integration with negative angular rates stays in range.
#[inline]
#[must_use]
pub fn wrap_tau(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can return exactly TAU when the input is a tiny negative
    // value; fold that back to zero.
    if wrapped >= TAU {
        wrapped - TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_leaves_in_range_values_alone() {
        assert_eq!(wrap_tau(0.0), 0.0);
        assert!((wrap_tau(1.5) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn wrap_folds_past_full_turn() {
        assert!((wrap_tau(TAU + 0.25) - 0.25).abs() < 1e-6);
        assert!((wrap_tau(3.0 * TAU + 1.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn wrap_handles_negative_angles() {
        let w = wrap_tau(-0.25);
        assert!(w >= 0.0 && w < TAU);
        assert!((w - (TAU - 0.25)).abs() < 1e-6);
    }

    #[test]
    fn wrap_never_returns_tau() {
        for angle in [-1e-8f32, -1e-4, TAU, -TAU, 100.0 * TAU] {
            let w = wrap_tau(angle);
            assert!(w < TAU, "wrap_tau({angle}) = {w}");
            assert!(w >= 0.0);
        }
    }
}
