//! JSON output structures for statistics reports.

use serde::Serialize;

use nereus_wavestats::{WaveStatsSPResult, WaveStatsZCResult};

use crate::error::IoError;

/// Statistics for one input record.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Where the record came from.
    pub source: RecordSummary,
    /// Spectral statistics, or the error that prevented them.
    pub spectral: Outcome<SpectralSummary>,
    /// Zero-crossing statistics, or the error that prevented them.
    pub zero_crossing: Outcome<ZeroCrossingSummary>,
}

impl StatsReport {
    /// True when neither analysis produced statistics.
    pub fn is_failed(&self) -> bool {
        self.spectral.is_error() && self.zero_crossing.is_error()
    }
}

/// Description of the analysed record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordSummary {
    pub path: String,
    pub samples: usize,
    pub sample_rate: f64,
    pub duration_s: f64,
    /// Whether the attenuation correction was applied before analysis.
    pub corrected: bool,
}

/// Either a result or the message of the error that replaced it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    Ok(T),
    Error(String),
}

impl<T> Outcome<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

/// Serialisable form of [`WaveStatsSPResult`].
#[derive(Debug, Clone, Serialize)]
pub struct SpectralSummary {
    pub h: f64,
    pub hm0: f64,
    pub tp: f64,
    pub m0: f64,
    pub t_0_1: f64,
    pub t_0_2: f64,
    pub eps2: f64,
    pub eps4: f64,
}

impl From<WaveStatsSPResult> for SpectralSummary {
    fn from(r: WaveStatsSPResult) -> Self {
        Self {
            h: r.h,
            hm0: r.hm0,
            tp: r.tp,
            m0: r.m0,
            t_0_1: r.t_0_1,
            t_0_2: r.t_0_2,
            eps2: r.eps2,
            eps4: r.eps4,
        }
    }
}

/// Serialisable form of [`WaveStatsZCResult`].
#[derive(Debug, Clone, Serialize)]
pub struct ZeroCrossingSummary {
    pub hsig: f64,
    pub hmean: f64,
    pub h10: f64,
    pub hmax: f64,
    pub tmean: f64,
    pub tsig: f64,
    pub wave_count: usize,
}

impl From<WaveStatsZCResult> for ZeroCrossingSummary {
    fn from(r: WaveStatsZCResult) -> Self {
        Self {
            hsig: r.hsig,
            hmean: r.hmean,
            h10: r.h10,
            hmax: r.hmax,
            tmean: r.tmean,
            tsig: r.tsig,
            wave_count: r.wave_count,
        }
    }
}

/// Serialize reports to a pretty-printed JSON array.
pub fn to_json(reports: &[StatsReport]) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(reports)?)
}
