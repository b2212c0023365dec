//! Newton iteration on the exact dispersion relation.

use std::f64::consts::PI;

use crate::error::DispersionError;
use crate::hunt::wave_number;
use crate::validate_inputs;

/// Solves `ω² = g·k·tanh(k·h)` for `k` by Newton iteration.
///
/// Starts from the Hunt approximation and stops when the relative update is
/// below `tol`. Zero or negative frequencies return `0.0`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DispersionError::InvalidDepth`] | `depth` not finite or `<= 0` |
/// | [`DispersionError::InvalidGravity`] | `gravity` not finite or `<= 0` |
/// | [`DispersionError::InvalidSolverSettings`] | `tol <= 0` or `max_iter == 0` |
/// | [`DispersionError::NotConverged`] | tolerance not reached in `max_iter` steps |
pub fn wave_number_iterative(
    frequency: f64,
    depth: f64,
    gravity: f64,
    tol: f64,
    max_iter: usize,
) -> Result<f64, DispersionError> {
    validate_inputs(depth, gravity)?;
    if !tol.is_finite() || tol <= 0.0 {
        return Err(DispersionError::InvalidSolverSettings(format!(
            "tol must be finite and > 0, got {tol}"
        )));
    }
    if max_iter == 0 {
        return Err(DispersionError::InvalidSolverSettings(
            "max_iter must be >= 1".to_string(),
        ));
    }
    if frequency.is_nan() || frequency <= 0.0 {
        return Ok(0.0);
    }

    let omega = 2.0 * PI * frequency;
    let omega_sq = omega * omega;
    let mut k = wave_number(frequency, depth, gravity)?;

    for _ in 0..max_iter {
        let kh = k * depth;
        let tanh = kh.tanh();
        let sech = 1.0 / kh.cosh();
        let f = gravity * k * tanh - omega_sq;
        let df = gravity * tanh + gravity * kh * sech * sech;
        let step = f / df;
        k -= step;
        if (step / k).abs() < tol {
            return Ok(k);
        }
    }

    Err(DispersionError::NotConverged {
        iterations: max_iter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GRAVITY;
    use approx::assert_relative_eq;

    #[test]
    fn converges_to_exact_relation() {
        let k = wave_number_iterative(0.125, 10.0, GRAVITY, 1e-14, 50).unwrap();
        let lhs = (2.0 * PI * 0.125_f64).powi(2);
        let rhs = GRAVITY * k * (k * 10.0).tanh();
        assert_relative_eq!(lhs, rhs, max_relative = 1e-12);
    }

    #[test]
    fn agrees_with_hunt_within_tolerance() {
        for &(f, h) in &[(0.05, 20.0), (0.125, 10.0), (0.2, 2.0), (0.33, 20.0), (0.5, 1.0)] {
            let exact = wave_number_iterative(f, h, GRAVITY, 1e-14, 50).unwrap();
            let approx = wave_number(f, h, GRAVITY).unwrap();
            assert_relative_eq!(exact, approx, max_relative = 1e-3);
        }
    }

    #[test]
    fn zero_frequency() {
        assert_eq!(
            wave_number_iterative(0.0, 5.0, GRAVITY, 1e-10, 10).unwrap(),
            0.0
        );
    }

    #[test]
    fn bad_settings_rejected() {
        assert!(matches!(
            wave_number_iterative(0.1, 5.0, GRAVITY, 0.0, 10).unwrap_err(),
            DispersionError::InvalidSolverSettings(_)
        ));
        assert!(matches!(
            wave_number_iterative(0.1, 5.0, GRAVITY, 1e-10, 0).unwrap_err(),
            DispersionError::InvalidSolverSettings(_)
        ));
    }

    #[test]
    fn invalid_depth_rejected() {
        assert!(matches!(
            wave_number_iterative(0.1, 0.0, GRAVITY, 1e-10, 10).unwrap_err(),
            DispersionError::InvalidDepth { .. }
        ));
    }
}
