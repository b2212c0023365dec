//! Data windows and tapers.

use std::f64::consts::PI;

/// Window applied to each Welch segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Window {
    /// `0.54 − 0.46·cos(2πi/(L−1))`.
    #[default]
    Hamming,
    /// `0.5·(1 − cos(2πi/(L−1)))`.
    Hann,
    /// All ones.
    Rectangular,
}

impl Window {
    /// Window coefficients for a segment of length `len`.
    pub fn coefficients(self, len: usize) -> Vec<f64> {
        if len < 2 {
            return vec![1.0; len];
        }
        let denom = (len - 1) as f64;
        (0..len)
            .map(|i| {
                let phase = 2.0 * PI * i as f64 / denom;
                match self {
                    Self::Hamming => 0.54 - 0.46 * phase.cos(),
                    Self::Hann => 0.5 * (1.0 - phase.cos()),
                    Self::Rectangular => 1.0,
                }
            })
            .collect()
    }
}

/// Split cosine bell taper applied to proportion `p` of the samples at each
/// end of a record of length `len`.
///
/// The first and last `m = ⌊len·p⌋` samples are weighted by
/// `0.5·(1 − cos(π(2j−1)/(2m)))`, `j = 1..m`; the middle is untouched.
pub fn split_cosine_taper(len: usize, p: f64) -> Vec<f64> {
    let m = (len as f64 * p).floor() as usize;
    let mut weights = vec![1.0; len];
    if m == 0 {
        return weights;
    }
    for j in 1..=m {
        let w = 0.5 * (1.0 - (PI * (2 * j - 1) as f64 / (2 * m) as f64).cos());
        weights[j - 1] = w;
        weights[len - j] = w;
    }
    weights
}
