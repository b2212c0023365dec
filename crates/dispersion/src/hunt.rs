//! Hunt (1979) closed-form approximation of the dispersion relation.

use std::f64::consts::PI;

use crate::error::DispersionError;
use crate::validate_inputs;

/// Coefficients `d1..d6` of Hunt's Padé approximation.
pub const HUNT_COEFFICIENTS: [f64; 6] = [
    0.6666666667,
    0.3555555556,
    0.1608465608,
    0.0632098765,
    0.0217540484,
    0.0065407983,
];

/// Wave number `k` (rad/m) for frequency `frequency` (Hz) in water of depth
/// `depth` (m).
///
/// With `y = ω²h/g`:
///
/// ```text
/// (kh)² = y² + y / (1 + d1·y + d2·y² + … + d6·y⁶)
/// ```
///
/// Zero or negative frequencies return `0.0`: such bins carry no wave
/// motion and receive no correction.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DispersionError::InvalidDepth`] | `depth` not finite or `<= 0` |
/// | [`DispersionError::InvalidGravity`] | `gravity` not finite or `<= 0` |
pub fn wave_number(frequency: f64, depth: f64, gravity: f64) -> Result<f64, DispersionError> {
    validate_inputs(depth, gravity)?;
    if frequency.is_nan() || frequency <= 0.0 {
        return Ok(0.0);
    }

    let omega = 2.0 * PI * frequency;
    let y = omega * omega * depth / gravity;

    // Horner evaluation of 1 + d1 y + ... + d6 y^6.
    let poly = HUNT_COEFFICIENTS
        .iter()
        .rev()
        .fold(0.0, |acc, &d| (acc + d) * y);
    let kh = (y * y + y / (1.0 + poly)).sqrt();

    Ok(kh / depth)
}

/// Wavelength `2π / k` (m). Returns `f64::INFINITY` for `frequency <= 0`.
///
/// # Errors
///
/// Same as [`wave_number`].
pub fn wavelength(frequency: f64, depth: f64, gravity: f64) -> Result<f64, DispersionError> {
    let k = wave_number(frequency, depth, gravity)?;
    if k == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(2.0 * PI / k)
}
