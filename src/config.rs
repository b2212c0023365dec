use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Nereus configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NereusConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Attenuation correction settings.
    #[serde(default)]
    pub correction: CorrectionToml,

    /// Spectral analysis settings.
    #[serde(default)]
    pub spectral: SpectralToml,

    /// Zero-crossing analysis settings.
    #[serde(default)]
    pub zero_crossing: ZeroCrossingToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Directory for per-record spectra; overridden by `--spectrum-dir`.
    pub spectrum_dir: Option<PathBuf>,
    #[serde(default = "default_column")]
    pub column: String,
    /// Sampling rate (Hz); falls back to the rate stored in each file.
    pub sample_rate: Option<f64>,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            spectrum_dir: None,
            column: default_column(),
            sample_rate: None,
            compression: default_compression(),
            row_group_size: default_row_group_size(),
        }
    }
}

fn default_column() -> String {
    "depth".to_string()
}
fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorrectionToml {
    /// Sensor height above the bed (m); required unless `--zpt` is given.
    pub zpt: Option<f64>,
    #[serde(default = "default_fmin")]
    pub fmin: f64,
    #[serde(default = "default_fmax")]
    pub fmax: f64,
    #[serde(default = "default_max_gain")]
    pub max_gain: f64,
    #[serde(default = "default_gravity")]
    pub gravity: f64,
}

impl Default for CorrectionToml {
    fn default() -> Self {
        Self {
            zpt: None,
            fmin: default_fmin(),
            fmax: default_fmax(),
            max_gain: default_max_gain(),
            gravity: default_gravity(),
        }
    }
}

fn default_fmin() -> f64 {
    0.05
}
fn default_fmax() -> f64 {
    0.33
}
fn default_max_gain() -> f64 {
    5.0
}
fn default_gravity() -> f64 {
    9.81
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpectralToml {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_segments")]
    pub segments: usize,
    #[serde(default = "default_overlap")]
    pub overlap: f64,
    #[serde(default = "default_window")]
    pub window: String,
    #[serde(default = "default_kernel")]
    pub kernel: Vec<usize>,
    #[serde(default = "default_kernel_kind")]
    pub kernel_kind: String,
    #[serde(default = "default_taper")]
    pub taper: f64,
    #[serde(default)]
    pub min_freq: f64,
    #[serde(default = "default_max_freq")]
    pub max_freq: f64,
}

impl Default for SpectralToml {
    fn default() -> Self {
        Self {
            method: default_method(),
            segments: default_segments(),
            overlap: default_overlap(),
            window: default_window(),
            kernel: default_kernel(),
            kernel_kind: default_kernel_kind(),
            taper: default_taper(),
            min_freq: 0.0,
            max_freq: default_max_freq(),
        }
    }
}

fn default_method() -> String {
    "welch".to_string()
}
fn default_segments() -> usize {
    4
}
fn default_overlap() -> f64 {
    0.5
}
fn default_window() -> String {
    "hamming".to_string()
}
fn default_kernel() -> Vec<usize> {
    vec![9, 9, 9]
}
fn default_kernel_kind() -> String {
    "daniell".to_string()
}
fn default_taper() -> f64 {
    0.1
}
fn default_max_freq() -> f64 {
    0.495
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZeroCrossingToml {
    /// Minimum wave height (m) kept after segmentation.
    pub threshold: Option<f64>,
}
