//! Least-squares linear detrending against sample index.

use crate::error::SeriesError;

/// Residuals of a least-squares straight-line fit plus the fitted line.
///
/// The line is `intercept + slope * i` for sample index `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Detrended {
    residuals: Vec<f64>,
    intercept: f64,
    slope: f64,
}

impl Detrended {
    /// Returns the residuals (input minus fitted line).
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Consumes the fit and returns the residuals.
    pub fn into_residuals(self) -> Vec<f64> {
        self.residuals
    }

    /// Returns the fitted intercept (value of the line at index 0).
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the fitted slope, in units per sample.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Evaluates the fitted line at every sample index.
    pub fn trend_line(&self) -> Vec<f64> {
        (0..self.residuals.len())
            .map(|i| self.intercept + self.slope * i as f64)
            .collect()
    }
}

/// Removes the least-squares linear trend from `samples`.
///
/// The regression is ordinary least squares against the sample index
/// `0..N`. The returned residuals have zero mean and zero linear trend up to
/// rounding error. The input is not modified.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SeriesError::SeriesTooShort`] | `samples.len() < 2` |
/// | [`SeriesError::NonFiniteData`] | any sample is NaN or infinite |
pub fn detrend(samples: &[f64]) -> Result<Detrended, SeriesError> {
    let n = samples.len();
    if n < 2 {
        return Err(SeriesError::SeriesTooShort { len: n, min: 2 });
    }
    if !samples.iter().all(|v| v.is_finite()) {
        return Err(SeriesError::NonFiniteData);
    }
    Ok(fit_line(samples))
}

/// Least-squares fit on pre-validated samples (length >= 2, all finite).
pub(crate) fn fit_line(samples: &[f64]) -> Detrended {
    let n = samples.len();
    let nf = n as f64;
    let x_mean = (nf - 1.0) / 2.0;
    let y_mean = samples.iter().sum::<f64>() / nf;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, &y) in samples.iter().enumerate() {
        let dx = i as f64 - x_mean;
        sxy += dx * (y - y_mean);
        sxx += dx * dx;
    }

    // sxx = n(n^2 - 1)/12 > 0 for n >= 2.
    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    let residuals = samples
        .iter()
        .enumerate()
        .map(|(i, &y)| y - (intercept + slope * i as f64))
        .collect();

    Detrended {
        residuals,
        intercept,
        slope,
    }
}
