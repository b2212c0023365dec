//! Statistics records returned by the analyses.

/// Bulk statistics from the spectral analysis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveStatsSPResult {
    /// Mean water depth of the raw record (m).
    pub h: f64,
    /// Spectral significant wave height `4√m0` (m).
    pub hm0: f64,
    /// Peak period (s).
    pub tp: f64,
    /// Zeroth spectral moment (m²).
    pub m0: f64,
    /// Mean period `m0/m1` (s).
    pub t_0_1: f64,
    /// Mean zero-crossing period `√(m0/m2)` (s).
    pub t_0_2: f64,
    /// Spectral narrowness `√(m0·m2/m1² − 1)`.
    pub eps2: f64,
    /// Spectral bandwidth `√(1 − m2²/(m0·m4))`.
    pub eps4: f64,
}

/// Bulk statistics from the zero down-crossing analysis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveStatsZCResult {
    /// Mean height of the highest third of waves (m).
    pub hsig: f64,
    /// Mean wave height (m).
    pub hmean: f64,
    /// Mean height of the highest tenth of waves (m).
    pub h10: f64,
    /// Largest wave height (m).
    pub hmax: f64,
    /// Mean wave period (s).
    pub tmean: f64,
    /// Mean period of the highest third of waves (s).
    pub tsig: f64,
    /// Number of waves the statistics are based on.
    pub wave_count: usize,
}
