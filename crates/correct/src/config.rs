//! Configuration for the attenuation correction.

use nereus_dispersion::GRAVITY;

use crate::error::CorrectionError;

/// Default correction band `(fmin, fmax)` in Hz.
pub const DEFAULT_BAND: (f64, f64) = (0.05, 0.33);

/// Default ceiling on the correction gain.
pub const DEFAULT_MAX_GAIN: f64 = 5.0;

/// Configuration for [`pr_corr`](crate::pr_corr).
///
/// # Example
///
/// ```
/// use nereus_correct::CorrectionConfig;
///
/// let config = CorrectionConfig::new(0.25)
///     .with_band(0.04, 0.30)
///     .with_max_gain(8.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CorrectionConfig {
    /// Sensor height above the bed (m).
    zpt: f64,
    /// Lower band limit (Hz).
    fmin: f64,
    /// Upper band limit (Hz).
    fmax: f64,
    /// Ceiling on the gain applied to any bin.
    max_gain: f64,
    /// Gravitational acceleration (m/s²).
    gravity: f64,
}

impl CorrectionConfig {
    /// Creates a configuration for a sensor `zpt` metres above the bed.
    ///
    /// Defaults: band 0.05–0.33 Hz, `max_gain = 5.0`, `gravity = 9.81`.
    pub fn new(zpt: f64) -> Self {
        Self {
            zpt,
            fmin: DEFAULT_BAND.0,
            fmax: DEFAULT_BAND.1,
            max_gain: DEFAULT_MAX_GAIN,
            gravity: GRAVITY,
        }
    }

    /// Sets the correction band.
    pub fn with_band(mut self, fmin: f64, fmax: f64) -> Self {
        self.fmin = fmin;
        self.fmax = fmax;
        self
    }

    /// Sets the gain ceiling. `f64::INFINITY` disables saturation.
    pub fn with_max_gain(mut self, max_gain: f64) -> Self {
        self.max_gain = max_gain;
        self
    }

    /// Sets the gravitational acceleration.
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Returns the sensor height above the bed.
    pub fn zpt(&self) -> f64 {
        self.zpt
    }

    /// Returns the band `(fmin, fmax)`.
    pub fn band(&self) -> (f64, f64) {
        (self.fmin, self.fmax)
    }

    /// Returns the gain ceiling.
    pub fn max_gain(&self) -> f64 {
        self.max_gain
    }

    /// Returns the gravitational acceleration.
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Returns `true` if `|f|` lies inside the correction band.
    pub fn in_band(&self, frequency: f64) -> bool {
        let f = frequency.abs();
        f >= self.fmin && f <= self.fmax
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`CorrectionError::InvalidSensorHeight`] | `zpt < 0` or not finite |
    /// | [`CorrectionError::InvalidBand`] | `fmin < 0`, `fmin >= fmax` or non-finite limits |
    /// | [`CorrectionError::InvalidMaxGain`] | `max_gain < 1` or NaN |
    /// | [`CorrectionError::Dispersion`] | `gravity <= 0` |
    pub fn validate(&self) -> Result<(), CorrectionError> {
        if !self.zpt.is_finite() || self.zpt < 0.0 {
            return Err(CorrectionError::InvalidSensorHeight { zpt: self.zpt });
        }
        if !self.fmin.is_finite()
            || !self.fmax.is_finite()
            || self.fmin < 0.0
            || self.fmin >= self.fmax
        {
            return Err(CorrectionError::InvalidBand {
                fmin: self.fmin,
                fmax: self.fmax,
            });
        }
        if self.max_gain.is_nan() || self.max_gain < 1.0 {
            return Err(CorrectionError::InvalidMaxGain {
                max_gain: self.max_gain,
            });
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(nereus_dispersion::DispersionError::InvalidGravity {
                gravity: self.gravity,
            }
            .into());
        }
        Ok(())
    }
}
