//! One-sided spectrum container.

use crate::error::SpectralError;

/// A one-sided power spectrum on a uniform frequency grid.
///
/// - frequencies are strictly positive and ascending (the zero bin is
///   excluded)
/// - `power[i]` is a two-sided density (units²/Hz) evaluated at
///   `frequencies[i]`, so the variance of the record is approximately
///   `Σ 2·power·delta_f`
#[derive(Clone, Debug, PartialEq)]
pub struct SpectrumEstimate {
    frequencies: Vec<f64>,
    power: Vec<f64>,
    delta_f: f64,
}

impl SpectrumEstimate {
    /// Creates a spectrum from matching frequency and power arrays.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SpectralError::LengthMismatch`] | arrays differ in length |
    /// | [`SpectralError::InvalidSpacing`] | `delta_f` not finite or `<= 0` |
    pub fn new(
        frequencies: Vec<f64>,
        power: Vec<f64>,
        delta_f: f64,
    ) -> Result<Self, SpectralError> {
        if frequencies.len() != power.len() {
            return Err(SpectralError::LengthMismatch {
                frequencies: frequencies.len(),
                power: power.len(),
            });
        }
        if !delta_f.is_finite() || delta_f <= 0.0 {
            return Err(SpectralError::InvalidSpacing { delta_f });
        }
        Ok(Self {
            frequencies,
            power,
            delta_f,
        })
    }

    /// Returns the bin frequencies (Hz).
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Returns the power density per bin.
    pub fn power(&self) -> &[f64] {
        &self.power
    }

    /// Returns the bin spacing (Hz).
    pub fn delta_f(&self) -> f64 {
        self.delta_f
    }

    /// Returns the number of bins.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns `true` if the spectrum has no bins.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Iterates over `(frequency, power)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.power.iter().copied())
    }

    /// Returns the `(frequency, power)` of the largest bin.
    ///
    /// Ties resolve to the lowest frequency. Returns `None` if empty.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.iter().fold(None, |best, (f, p)| match best {
            Some((_, bp)) if bp >= p => best,
            _ => Some((f, p)),
        })
    }

    /// Variance implied by the spectrum: `Σ 2·power·delta_f`.
    pub fn variance(&self) -> f64 {
        2.0 * self.power.iter().sum::<f64>() * self.delta_f
    }
}
