//! Individual waves from zero down-crossings.

use nereus_series::ElevationSeries;
use tracing::{debug, instrument};

use crate::config::ZeroCrossingConfig;
use crate::error::WaveStatsError;
use crate::observer::{NoopObserver, StatsObserver};
use crate::result::WaveStatsZCResult;

/// One wave between consecutive zero down-crossings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveRecord {
    /// Index of the first sample after the opening down-crossing.
    pub start: usize,
    /// Index of the first sample after the closing down-crossing (exclusive).
    pub end: usize,
    /// Highest sample in `[start, end)`.
    pub crest: f64,
    /// Lowest sample in `[start, end)`.
    pub trough: f64,
    /// `crest − trough`.
    pub height: f64,
    /// `(end − start) / fs` in seconds.
    pub period: f64,
}

impl WaveRecord {
    fn from_slice(samples: &[f64], start: usize, end: usize, fs: f64) -> Self {
        let window = &samples[start..end];
        let crest = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let trough = window.iter().copied().fold(f64::INFINITY, f64::min);
        Self {
            start,
            end,
            crest,
            trough,
            height: crest - trough,
            period: (end - start) as f64 / fs,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum ScanState {
    SeekingFirstCrossing,
    InWave { start: usize },
}

/// Splits `samples` into complete waves at zero down-crossings.
///
/// A down-crossing lies between `i` and `i + 1` when `x[i] >= 0` and
/// `x[i + 1] < 0`; the wave boundary is `i + 1`. Samples before the first and
/// after the last crossing are discarded. `samples` is expected to be
/// detrended and `fs` positive.
pub fn segment_waves(samples: &[f64], fs: f64) -> Vec<WaveRecord> {
    let mut state = ScanState::SeekingFirstCrossing;
    let mut waves = Vec::new();

    let crossings = samples
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] >= 0.0 && pair[1] < 0.0)
        .map(|(i, _)| i + 1);

    for crossing in crossings {
        state = match state {
            ScanState::SeekingFirstCrossing => ScanState::InWave { start: crossing },
            ScanState::InWave { start } => {
                waves.push(WaveRecord::from_slice(samples, start, crossing, fs));
                ScanState::InWave { start: crossing }
            }
        };
    }

    waves
}

/// Computes zero-crossing wave statistics for `series`.
///
/// The record is detrended and split with [`segment_waves`]. Waves lower than
/// the configured threshold are then dropped. `Hsig` and `Tsig` average the
/// highest `⌈n/3⌉` waves, `H10` the highest `⌈n/10⌉`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveStatsError::InvalidThreshold`] | negative or non-finite threshold |
/// | [`WaveStatsError::NoCompleteWaves`] | fewer than two down-crossings |
/// | [`WaveStatsError::NoWavesAboveThreshold`] | every wave below the threshold |
pub fn wave_stats_zc(
    series: &ElevationSeries,
    config: &ZeroCrossingConfig,
) -> Result<WaveStatsZCResult, WaveStatsError> {
    wave_stats_zc_observed(series, config, &mut NoopObserver)
}

/// Like [`wave_stats_zc`], reporting every complete wave to `observer`.
#[instrument(skip_all, fields(n = series.len()))]
pub fn wave_stats_zc_observed<O: StatsObserver + ?Sized>(
    series: &ElevationSeries,
    config: &ZeroCrossingConfig,
    observer: &mut O,
) -> Result<WaveStatsZCResult, WaveStatsError> {
    config.validate()?;

    let residuals = series.detrend().into_residuals();
    let waves = segment_waves(&residuals, series.sample_rate());
    if waves.is_empty() {
        return Err(WaveStatsError::NoCompleteWaves);
    }
    observer.on_waves(&waves);

    let result = summarize(&waves, config.threshold())?;
    debug!(
        waves = waves.len(),
        kept = result.wave_count,
        hsig = result.hsig,
        "zero-crossing statistics computed"
    );
    Ok(result)
}

fn summarize(
    waves: &[WaveRecord],
    threshold: Option<f64>,
) -> Result<WaveStatsZCResult, WaveStatsError> {
    let mut kept: Vec<&WaveRecord> = match threshold {
        Some(t) => waves.iter().filter(|w| w.height >= t).collect(),
        None => waves.iter().collect(),
    };
    if kept.is_empty() {
        return Err(WaveStatsError::NoWavesAboveThreshold {
            threshold: threshold.unwrap_or(0.0),
            waves: waves.len(),
        });
    }
    kept.sort_by(|a, b| b.height.total_cmp(&a.height));

    let n = kept.len();
    let third = &kept[..n.div_ceil(3)];
    let tenth = &kept[..n.div_ceil(10)];

    Ok(WaveStatsZCResult {
        hsig: mean_of(third, |w| w.height),
        hmean: mean_of(&kept, |w| w.height),
        h10: mean_of(tenth, |w| w.height),
        hmax: kept[0].height,
        tmean: mean_of(&kept, |w| w.period),
        tsig: mean_of(third, |w| w.period),
        wave_count: n,
    })
}

fn mean_of(waves: &[&WaveRecord], field: impl Fn(&WaveRecord) -> f64) -> f64 {
    waves.iter().map(|w| field(w)).sum::<f64>() / waves.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn wave(height: f64, period: f64) -> WaveRecord {
        WaveRecord {
            start: 0,
            end: 1,
            crest: height / 2.0,
            trough: -height / 2.0,
            height,
            period,
        }
    }

    #[test]
    fn crossing_index_is_after_transition() {
        let waves = segment_waves(&[1.0, -1.0, 1.0, -1.0, 1.0], 2.0);
        assert_eq!(waves.len(), 1);
        let w = waves[0];
        assert_eq!((w.start, w.end), (1, 3));
        assert_relative_eq!(w.crest, 1.0);
        assert_relative_eq!(w.trough, -1.0);
        assert_relative_eq!(w.height, 2.0);
        assert_relative_eq!(w.period, 1.0);
    }

    #[test]
    fn zero_counts_as_non_negative() {
        let waves = segment_waves(&[0.0, -1.0, 2.0, 0.0, -0.5], 1.0);
        assert_eq!(waves.len(), 1);
        assert_eq!((waves[0].start, waves[0].end), (1, 4));
        assert_relative_eq!(waves[0].height, 3.0);
        assert_relative_eq!(waves[0].period, 3.0);
    }

    #[test]
    fn partial_waves_are_discarded() {
        // Crossings at 2 and 6; samples 0..2 and 6.. are partial.
        let x = [0.5, 0.2, -0.3, -0.6, 0.4, 0.9, -0.1, 0.3, 0.8];
        let waves = segment_waves(&x, 1.0);
        assert_eq!(waves.len(), 1);
        assert_eq!((waves[0].start, waves[0].end), (2, 6));
        assert_relative_eq!(waves[0].height, 1.5);
    }

    #[test]
    fn single_crossing_yields_nothing() {
        assert!(segment_waves(&[1.0, 0.5, -0.5, -1.0], 1.0).is_empty());
        assert!(segment_waves(&[-1.0, -0.5, 0.5, 1.0], 1.0).is_empty());
        assert!(segment_waves(&[], 1.0).is_empty());
    }

    #[test]
    fn summary_rounds_subsets_up() {
        let waves = [wave(2.0, 3.0), wave(4.0, 1.0), wave(1.0, 4.0), wave(3.0, 2.0)];
        let r = summarize(&waves, None).unwrap();
        assert_eq!(r.wave_count, 4);
        // ceil(4/3) = 2 highest: 4 and 3.
        assert_relative_eq!(r.hsig, 3.5);
        assert_relative_eq!(r.tsig, 1.5);
        // ceil(4/10) = 1.
        assert_relative_eq!(r.h10, 4.0);
        assert_relative_eq!(r.hmax, 4.0);
        assert_relative_eq!(r.hmean, 2.5);
        assert_relative_eq!(r.tmean, 2.5);
    }

    #[test]
    fn threshold_filters_after_segmentation() {
        let waves = [wave(0.1, 5.0), wave(1.0, 8.0), wave(0.2, 5.0), wave(1.2, 9.0)];
        let r = summarize(&waves, Some(0.5)).unwrap();
        assert_eq!(r.wave_count, 2);
        assert_relative_eq!(r.hmean, 1.1);
        assert_relative_eq!(r.tmean, 8.5);
        assert_relative_eq!(r.hsig, 1.2);
    }

    #[test]
    fn threshold_is_inclusive() {
        let r = summarize(&[wave(0.5, 4.0)], Some(0.5)).unwrap();
        assert_eq!(r.wave_count, 1);
    }

    #[test]
    fn all_below_threshold() {
        let err = summarize(&[wave(0.1, 5.0), wave(0.2, 5.0)], Some(1.0)).unwrap_err();
        assert_eq!(
            err,
            WaveStatsError::NoWavesAboveThreshold {
                threshold: 1.0,
                waves: 2
            }
        );
    }

    #[test]
    fn monotonic_record_has_no_waves() {
        let samples: Vec<f64> = (0..200).map(|i| (i * i) as f64 * 1e-3).collect();
        let series = ElevationSeries::new(samples, 4.0).unwrap();
        let err = wave_stats_zc(&series, &ZeroCrossingConfig::default()).unwrap_err();
        assert_eq!(err, WaveStatsError::NoCompleteWaves);
    }

    #[test]
    fn invalid_threshold_rejected_first() {
        let series = ElevationSeries::new(vec![1.0, -1.0, 1.0, -1.0, 1.0], 1.0).unwrap();
        let err = wave_stats_zc(&series, &ZeroCrossingConfig::new().with_threshold(-1.0))
            .unwrap_err();
        assert!(matches!(err, WaveStatsError::InvalidThreshold { .. }));
    }

    #[test]
    fn observer_receives_unfiltered_waves() {
        struct Count(usize);
        impl StatsObserver for Count {
            fn on_waves(&mut self, waves: &[WaveRecord]) {
                self.0 = waves.len();
            }
        }

        let samples: Vec<f64> = (0..400)
            .map(|i| {
                let step = 2.0 * std::f64::consts::PI / 20.0;
                (step * i as f64 + step / 2.0).sin()
            })
            .collect();
        let series = ElevationSeries::new(samples, 4.0).unwrap();
        let mut count = Count(0);
        let r = wave_stats_zc_observed(&series, &ZeroCrossingConfig::default(), &mut count)
            .unwrap();
        assert_eq!(count.0, 19);
        assert_eq!(r.wave_count, 19);
        assert_relative_eq!(r.tmean, 5.0, epsilon = 1e-9);
    }
}
