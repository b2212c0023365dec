//! Optional sinks for intermediate analysis products.

use nereus_spectral::SpectrumEstimate;

use crate::zero_crossing::WaveRecord;

/// Receives intermediate products of the analyses, e.g. for plotting or
/// archiving. Observers cannot influence the returned statistics.
pub trait StatsObserver {
    /// Called once with the full estimated spectrum and the peak period.
    fn on_spectrum(&mut self, _spectrum: &SpectrumEstimate, _peak_period: f64) {}

    /// Called once with every complete wave, before threshold filtering.
    fn on_waves(&mut self, _waves: &[WaveRecord]) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StatsObserver for NoopObserver {}
