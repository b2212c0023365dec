//! Bulk statistics from spectral moments.

use nereus_series::ElevationSeries;
use nereus_spectral::{SpectrumEstimate, SpectrumEstimator};
use tracing::{debug, instrument};

use crate::config::SpectralStatsConfig;
use crate::error::WaveStatsError;
use crate::moments::SpectralMoments;
use crate::observer::{NoopObserver, StatsObserver};
use crate::result::WaveStatsSPResult;

/// Computes spectral wave statistics for `series`.
///
/// The record is detrended, its spectrum estimated with the configured
/// [`Estimator`](nereus_spectral::Estimator), and moments of order −2..=4 are
/// integrated over the bins with `min_freq <= f <= max_freq`. `h` is the mean
/// of the raw record; `Tp` is taken at the largest bin inside the window.
///
/// # Errors
///
/// | Variant | Kind | Trigger |
/// |---------|------|---------|
/// | [`WaveStatsError::InvalidWindow`] | InvalidInput | malformed window |
/// | [`WaveStatsError::Spectral`] | InvalidInput | record too short or bad estimator settings |
/// | [`WaveStatsError::EmptyIntegrationWindow`] | Computation | no bin inside the window |
/// | [`WaveStatsError::NonFiniteStatistic`] | Computation | `m0 == 0` or any non-finite result |
pub fn wave_stats_sp(
    series: &ElevationSeries,
    config: &SpectralStatsConfig,
) -> Result<WaveStatsSPResult, WaveStatsError> {
    wave_stats_sp_observed(series, config, &mut NoopObserver)
}

/// Like [`wave_stats_sp`], reporting the estimated spectrum to `observer`.
#[instrument(skip_all, fields(n = series.len(), method = config.estimator().name()))]
pub fn wave_stats_sp_observed<O: StatsObserver + ?Sized>(
    series: &ElevationSeries,
    config: &SpectralStatsConfig,
    observer: &mut O,
) -> Result<WaveStatsSPResult, WaveStatsError> {
    config.validate()?;

    let h = series.mean();
    let residuals = series.detrend().into_residuals();
    let spectrum = config
        .estimator()
        .estimate(&residuals, series.sample_rate())?;

    let (lo, hi) = window_bounds(&spectrum, config.min_freq(), config.max_freq()).ok_or(
        WaveStatsError::EmptyIntegrationWindow {
            min_freq: config.min_freq(),
            max_freq: config.max_freq(),
        },
    )?;
    let frequencies = &spectrum.frequencies()[lo..hi];
    let power = &spectrum.power()[lo..hi];
    let moments = SpectralMoments::from_bins(frequencies, power, spectrum.delta_f());

    let m0 = moments.m0();
    if m0.is_nan() || m0 <= 0.0 {
        return Err(WaveStatsError::NonFiniteStatistic { name: "m0" });
    }
    let (m1, m2, m4) = (moments.m1(), moments.m2(), moments.m4());

    let peak = peak_index(power);
    let tp = 1.0 / frequencies[peak];

    let result = WaveStatsSPResult {
        h,
        hm0: 4.0 * m0.sqrt(),
        tp,
        m0,
        t_0_1: m0 / m1,
        t_0_2: (m0 / m2).sqrt(),
        eps2: (m0 * m2 / (m1 * m1) - 1.0).max(0.0).sqrt(),
        eps4: (1.0 - m2 * m2 / (m0 * m4)).max(0.0).sqrt(),
    };
    check_finite(&result)?;

    observer.on_spectrum(&spectrum, tp);
    debug!(
        bins = hi - lo,
        hm0 = result.hm0,
        tp = result.tp,
        "spectral statistics computed"
    );
    Ok(result)
}

/// Half-open index range of the bins inside `[min_freq, max_freq]`, or
/// `None` if there are none. Frequencies are ascending.
fn window_bounds(
    spectrum: &SpectrumEstimate,
    min_freq: f64,
    max_freq: f64,
) -> Option<(usize, usize)> {
    let freqs = spectrum.frequencies();
    let lo = freqs.partition_point(|&f| f < min_freq);
    let hi = freqs.partition_point(|&f| f <= max_freq);
    (lo < hi).then_some((lo, hi))
}

/// Index of the largest value; ties resolve to the first.
fn peak_index(power: &[f64]) -> usize {
    power
        .iter()
        .enumerate()
        .fold(0, |best, (i, &p)| if p > power[best] { i } else { best })
}

fn check_finite(result: &WaveStatsSPResult) -> Result<(), WaveStatsError> {
    let named = [
        ("h", result.h),
        ("Hm0", result.hm0),
        ("Tp", result.tp),
        ("T_0_1", result.t_0_1),
        ("T_0_2", result.t_0_2),
        ("EPS2", result.eps2),
        ("EPS4", result.eps4),
    ];
    match named.iter().find(|(_, v)| !v.is_finite()) {
        Some(&(name, _)) => Err(WaveStatsError::NonFiniteStatistic { name }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nereus_spectral::{Estimator, PeriodogramConfig, SpectralError, WelchConfig};

    fn sine(n: usize, fs: f64, period: f64, amplitude: f64) -> ElevationSeries {
        let samples = (0..n)
            .map(|i| {
                2.0 + amplitude
                    * (2.0 * std::f64::consts::PI * i as f64 / (period * fs) + 0.3).sin()
            })
            .collect();
        ElevationSeries::new(samples, fs).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        calls: usize,
        bins: usize,
        peak_period: f64,
    }

    impl StatsObserver for Recorder {
        fn on_spectrum(&mut self, spectrum: &SpectrumEstimate, peak_period: f64) {
            self.calls += 1;
            self.bins = spectrum.len();
            self.peak_period = peak_period;
        }
    }

    #[test]
    fn window_bounds_inclusive() {
        let s = SpectrumEstimate::new(vec![0.1, 0.2, 0.3, 0.4], vec![0.0; 4], 0.1).unwrap();
        assert_eq!(window_bounds(&s, 0.2, 0.3), Some((1, 3)));
        assert_eq!(window_bounds(&s, 0.0, 1.0), Some((0, 4)));
        assert_eq!(window_bounds(&s, 0.21, 0.29), None);
        assert_eq!(window_bounds(&s, 0.5, 0.9), None);
    }

    #[test]
    fn peak_index_prefers_first() {
        assert_eq!(peak_index(&[1.0, 3.0, 3.0, 2.0]), 1);
        assert_eq!(peak_index(&[5.0]), 0);
    }

    #[test]
    fn mean_depth_reported() {
        let r = wave_stats_sp(&sine(2048, 4.0, 8.0, 0.3), &SpectralStatsConfig::default()).unwrap();
        assert_relative_eq!(r.h, 2.0, epsilon = 1e-2);
    }

    #[test]
    fn bandwidth_parameters_bounded() {
        let r = wave_stats_sp(&sine(2048, 4.0, 8.0, 0.3), &SpectralStatsConfig::default()).unwrap();
        assert!(r.eps2 >= 0.0);
        assert!((0.0..=1.0).contains(&r.eps4));
        assert!(r.t_0_1 > 0.0 && r.t_0_2 > 0.0);
    }

    #[test]
    fn periodogram_estimator_finds_peak() {
        let config =
            SpectralStatsConfig::new(Estimator::Periodogram(PeriodogramConfig::default()));
        let r = wave_stats_sp(&sine(4096, 4.0, 10.0, 0.4), &config).unwrap();
        assert!((r.tp - 10.0).abs() < 1.0, "tp = {}", r.tp);
    }

    #[test]
    fn too_short_for_estimator() {
        let series = ElevationSeries::new(vec![0.1, -0.2, 0.3, -0.1, 0.0, 0.2, -0.3, 0.1], 4.0)
            .unwrap();
        let err = wave_stats_sp(&series, &SpectralStatsConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            WaveStatsError::Spectral(SpectralError::SeriesTooShort { .. })
        ));
        assert_eq!(err.kind(), crate::ErrorKind::InvalidInput);
    }

    #[test]
    fn empty_window_is_computation_error() {
        // 64 samples, 4 segments: bins every 0.25 Hz.
        let config =
            SpectralStatsConfig::new(Estimator::Welch(WelchConfig::new(4))).with_window(0.3, 0.45);
        let err = wave_stats_sp(&sine(64, 4.0, 8.0, 0.3), &config).unwrap_err();
        assert!(matches!(err, WaveStatsError::EmptyIntegrationWindow { .. }));
        assert_eq!(err.kind(), crate::ErrorKind::Computation);
    }

    #[test]
    fn flat_record_has_no_energy() {
        let series = ElevationSeries::new(vec![2.0; 256], 4.0).unwrap();
        let err = wave_stats_sp(&series, &SpectralStatsConfig::default()).unwrap_err();
        assert_eq!(err, WaveStatsError::NonFiniteStatistic { name: "m0" });
    }

    #[test]
    fn observer_sees_full_spectrum_and_peak() {
        let series = sine(2048, 4.0, 8.0, 0.3);
        let config = SpectralStatsConfig::default();
        let mut recorder = Recorder::default();
        let observed = wave_stats_sp_observed(&series, &config, &mut recorder).unwrap();
        let plain = wave_stats_sp(&series, &config).unwrap();

        assert_eq!(observed, plain);
        assert_eq!(recorder.calls, 1);
        // 2048 / 4 segments = 512-sample segments, 256 positive bins.
        assert_eq!(recorder.bins, 256);
        assert_relative_eq!(recorder.peak_period, plain.tp);
    }

    #[test]
    fn observer_not_called_on_failure() {
        let series = ElevationSeries::new(vec![2.0; 256], 4.0).unwrap();
        let mut recorder = Recorder::default();
        assert!(
            wave_stats_sp_observed(&series, &SpectralStatsConfig::default(), &mut recorder)
                .is_err()
        );
        assert_eq!(recorder.calls, 0);
    }
}
