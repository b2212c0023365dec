//! Frequency-domain attenuation correction.

use num_complex::Complex;
use nereus_dispersion::{DispersionError, wave_number};
use nereus_series::ElevationSeries;
use rustfft::FftPlanner;
use tracing::{debug, instrument};

use crate::config::CorrectionConfig;
use crate::error::CorrectionError;

/// Gain that maps pressure head at `zpt` to surface elevation for a component
/// of frequency `frequency` in water of depth `depth`.
///
/// Returns `1.0` outside the configured band. Inside it returns
/// `min(cosh(k·h) / cosh(k·zpt), max_gain)`, evaluated in a form that does not
/// overflow for large `k·h`.
///
/// # Errors
///
/// Returns [`CorrectionError::Dispersion`] if `depth` or the configured
/// gravity is invalid.
pub fn transfer_gain(
    frequency: f64,
    depth: f64,
    zpt: f64,
    config: &CorrectionConfig,
) -> Result<f64, CorrectionError> {
    if !config.in_band(frequency) {
        return Ok(1.0);
    }
    let k = wave_number(frequency.abs(), depth, config.gravity())?;
    Ok(cosh_ratio(k * depth, k * zpt).min(config.max_gain()))
}

/// `cosh(a) / cosh(b)` for `a >= b >= 0`.
fn cosh_ratio(a: f64, b: f64) -> f64 {
    (a - b).exp() * (1.0 + (-2.0 * a).exp()) / (1.0 + (-2.0 * b).exp())
}

/// Frequency in Hz of DFT bin `j` for a record of `n` samples.
fn bin_frequency(j: usize, n: usize, fs: f64) -> f64 {
    let signed = if j <= n / 2 {
        j as f64
    } else {
        j as f64 - n as f64
    };
    signed * fs / n as f64
}

/// Corrects a pressure-derived depth record for depth attenuation.
///
/// The record is detrended, transformed, multiplied bin by bin with
/// [`transfer_gain`] and transformed back. The fitted trend line is added to
/// the result, so the output has the same length, sampling rate and mean as
/// the input, and `corrected − input` carries no energy outside the band.
///
/// The working depth `h` is the mean of the input record.
///
/// A linear drift such as a tidal ramp passes through unchanged.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | config errors | see [`CorrectionConfig::validate`] |
/// | [`CorrectionError::Dispersion`] | mean depth `<= 0` |
/// | [`CorrectionError::SensorAboveSurface`] | `zpt > h` |
/// | [`CorrectionError::NonFiniteResult`] | inverse transform overflowed |
#[instrument(skip_all, fields(n = series.len(), zpt = config.zpt()))]
pub fn pr_corr(
    series: &ElevationSeries,
    config: &CorrectionConfig,
) -> Result<ElevationSeries, CorrectionError> {
    config.validate()?;

    let depth = series.mean();
    if !depth.is_finite() || depth <= 0.0 {
        return Err(DispersionError::InvalidDepth { depth }.into());
    }
    if config.zpt() > depth {
        return Err(CorrectionError::SensorAboveSurface {
            zpt: config.zpt(),
            depth,
        });
    }

    let n = series.len();
    let fs = series.sample_rate();
    let detrended = series.detrend();

    let mut buffer: Vec<Complex<f64>> = detrended
        .residuals()
        .iter()
        .map(|&x| Complex::new(x, 0.0))
        .collect();
    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(n).process(&mut buffer);

    let mut corrected_bins = 0usize;
    let mut peak_gain = 1.0_f64;
    for (j, bin) in buffer.iter_mut().enumerate() {
        let f = bin_frequency(j, n, fs);
        if !config.in_band(f) {
            continue;
        }
        let gain = transfer_gain(f, depth, config.zpt(), config)?;
        *bin *= gain;
        corrected_bins += 1;
        peak_gain = peak_gain.max(gain);
    }

    planner.plan_fft_inverse(n).process(&mut buffer);

    let scale = 1.0 / n as f64;
    let trend = detrended.trend_line();
    let samples: Vec<f64> = buffer
        .iter()
        .zip(&trend)
        .map(|(c, t)| c.re * scale + t)
        .collect();
    if samples.iter().any(|x| !x.is_finite()) {
        return Err(CorrectionError::NonFiniteResult);
    }

    debug!(depth, corrected_bins, peak_gain, "applied attenuation correction");
    Ok(ElevationSeries::new(samples, fs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bin_frequencies_are_signed() {
        assert_relative_eq!(bin_frequency(0, 8, 4.0), 0.0);
        assert_relative_eq!(bin_frequency(1, 8, 4.0), 0.5);
        assert_relative_eq!(bin_frequency(4, 8, 4.0), 2.0);
        assert_relative_eq!(bin_frequency(5, 8, 4.0), -1.5);
        assert_relative_eq!(bin_frequency(7, 8, 4.0), -0.5);
    }

    #[test]
    fn cosh_ratio_matches_direct_form() {
        for &(a, b) in &[(0.5, 0.1), (2.0, 0.0), (3.0, 3.0), (10.0, 4.0)] {
            let direct = f64::cosh(a) / f64::cosh(b);
            assert_relative_eq!(cosh_ratio(a, b), direct, max_relative = 1e-12);
        }
    }

    #[test]
    fn cosh_ratio_is_finite_for_large_arguments() {
        let r = cosh_ratio(800.0, 790.0);
        assert!(r.is_finite());
        assert_relative_eq!(r, 10.0_f64.exp(), max_relative = 1e-12);
    }

    #[test]
    fn gain_reference_value() {
        let config = CorrectionConfig::new(0.5);
        let g = transfer_gain(0.125, 5.0, 0.5, &config).unwrap();
        assert_relative_eq!(g, 1.178_247_289, max_relative = 1e-8);
    }

    #[test]
    fn gain_is_one_out_of_band() {
        let config = CorrectionConfig::new(0.5);
        assert_relative_eq!(transfer_gain(0.0, 5.0, 0.5, &config).unwrap(), 1.0);
        assert_relative_eq!(transfer_gain(0.5, 5.0, 0.5, &config).unwrap(), 1.0);
        assert_relative_eq!(transfer_gain(-0.01, 5.0, 0.5, &config).unwrap(), 1.0);
    }

    #[test]
    fn gain_is_symmetric_in_frequency() {
        let config = CorrectionConfig::new(1.0);
        let pos = transfer_gain(0.2, 3.0, 1.0, &config).unwrap();
        let neg = transfer_gain(-0.2, 3.0, 1.0, &config).unwrap();
        assert_relative_eq!(pos, neg);
    }

    #[test]
    fn gain_saturates_at_ceiling() {
        // Unsaturated gain at 0.33 Hz, 10 m, bed-mounted is about 40.
        let config = CorrectionConfig::new(0.0);
        assert_relative_eq!(transfer_gain(0.33, 10.0, 0.0, &config).unwrap(), 5.0);

        let open = CorrectionConfig::new(0.0).with_max_gain(f64::INFINITY);
        let g = transfer_gain(0.33, 10.0, 0.0, &open).unwrap();
        assert_relative_eq!(g, 40.179_03, max_relative = 1e-5);
    }

    #[test]
    fn gain_is_one_for_sensor_at_surface() {
        let config = CorrectionConfig::new(4.0);
        assert_relative_eq!(
            transfer_gain(0.15, 4.0, 4.0, &config).unwrap(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn gain_rejects_bad_depth() {
        let config = CorrectionConfig::new(0.0);
        assert!(matches!(
            transfer_gain(0.1, 0.0, 0.0, &config).unwrap_err(),
            CorrectionError::Dispersion(DispersionError::InvalidDepth { .. })
        ));
    }

    #[test]
    fn sensor_above_surface_rejected() {
        let series = ElevationSeries::new(vec![2.0, 2.1, 1.9, 2.0], 2.0).unwrap();
        let err = pr_corr(&series, &CorrectionConfig::new(3.0)).unwrap_err();
        assert!(matches!(err, CorrectionError::SensorAboveSurface { .. }));
    }

    #[test]
    fn non_positive_mean_depth_rejected() {
        let series = ElevationSeries::new(vec![-1.0, -0.9, -1.1, -1.0], 2.0).unwrap();
        let err = pr_corr(&series, &CorrectionConfig::new(0.0)).unwrap_err();
        assert!(matches!(
            err,
            CorrectionError::Dispersion(DispersionError::InvalidDepth { .. })
        ));
    }

    #[test]
    fn invalid_config_rejected_before_work() {
        let series = ElevationSeries::new(vec![2.0; 16], 2.0).unwrap();
        let err = pr_corr(&series, &CorrectionConfig::new(0.1).with_max_gain(0.0)).unwrap_err();
        assert!(matches!(err, CorrectionError::InvalidMaxGain { .. }));
    }

    #[test]
    fn constant_record_is_unchanged() {
        let series = ElevationSeries::new(vec![3.5; 64], 4.0).unwrap();
        let out = pr_corr(&series, &CorrectionConfig::new(0.5)).unwrap();
        for &x in out.samples() {
            assert_relative_eq!(x, 3.5, epsilon = 1e-12);
        }
    }
}
