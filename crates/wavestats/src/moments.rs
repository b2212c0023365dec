//! Spectral moments over an integration window.

use std::ops::RangeInclusive;

/// Moment orders computed by [`SpectralMoments`].
pub const MOMENT_ORDERS: RangeInclusive<i32> = -2..=4;

/// Moments `m_k = Σ f^k · 2·P(f) · Δf` for `k` in [`MOMENT_ORDERS`].
#[derive(Clone, Debug, PartialEq)]
pub struct SpectralMoments {
    values: [f64; 7],
}

impl SpectralMoments {
    /// Integrates the given bins. `frequencies` and `power` must have equal
    /// length; extra entries in either are ignored.
    pub fn from_bins(frequencies: &[f64], power: &[f64], delta_f: f64) -> Self {
        let mut values = [0.0; 7];
        for (slot, order) in values.iter_mut().zip(MOMENT_ORDERS) {
            *slot = frequencies
                .iter()
                .zip(power)
                .map(|(&f, &p)| f.powi(order) * 2.0 * p)
                .sum::<f64>()
                * delta_f;
        }
        Self { values }
    }

    /// Returns the moment of order `k`, or `None` outside [`MOMENT_ORDERS`].
    pub fn get(&self, k: i32) -> Option<f64> {
        if MOMENT_ORDERS.contains(&k) {
            Some(self.values[(k - MOMENT_ORDERS.start()) as usize])
        } else {
            None
        }
    }

    /// Zeroth moment (variance of the windowed spectrum).
    pub fn m0(&self) -> f64 {
        self.values[2]
    }

    /// First moment.
    pub fn m1(&self) -> f64 {
        self.values[3]
    }

    /// Second moment.
    pub fn m2(&self) -> f64 {
        self.values[4]
    }

    /// Fourth moment.
    pub fn m4(&self) -> f64 {
        self.values[6]
    }

    /// All seven moments, lowest order first.
    pub fn as_array(&self) -> &[f64; 7] {
        &self.values
    }
}
