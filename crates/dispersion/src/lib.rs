//! # nereus-dispersion
//!
//! Wave number from the linear dispersion relation
//! `ω² = g·k·tanh(k·h)`.
//!
//! | Function | Method | Use |
//! |----------|--------|-----|
//! | [`wave_number`] | Hunt (1979) Padé approximation | default, closed form |
//! | [`wave_number_iterative`] | Newton iteration | reference solution |
//! | [`wavelength`] | `2π / k` from [`wave_number`] | reporting |
//!
//! ```
//! use nereus_dispersion::{GRAVITY, wave_number};
//!
//! // 8 s swell in 10 m of water.
//! let k = wave_number(0.125, 10.0, GRAVITY).unwrap();
//! assert!((k - 0.0886).abs() < 1e-3);
//! ```

mod error;
mod hunt;
mod newton;

pub use error::DispersionError;
pub use hunt::{HUNT_COEFFICIENTS, wave_number, wavelength};
pub use newton::wave_number_iterative;

/// Standard gravitational acceleration used by default (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Validates depth and gravity shared by all solvers.
pub(crate) fn validate_inputs(depth: f64, gravity: f64) -> Result<(), DispersionError> {
    if !depth.is_finite() || depth <= 0.0 {
        return Err(DispersionError::InvalidDepth { depth });
    }
    if !gravity.is_finite() || gravity <= 0.0 {
        return Err(DispersionError::InvalidGravity { gravity });
    }
    Ok(())
}
