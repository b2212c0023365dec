//! Thin wrappers around `rustfft` for real-valued input.

use num_complex::Complex;
use rustfft::FftPlanner;

/// Squared magnitude `|X_j|²` of the unnormalised DFT of `values` for every
/// bin `j = 0..n`.
pub(crate) fn squared_magnitudes(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut buffer: Vec<Complex<f64>> = values.iter().map(|&x| Complex::new(x, 0.0)).collect();
    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(n).process(&mut buffer);
    buffer.iter().map(|c| c.norm_sqr()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parseval_holds() {
        let x = [0.3, -1.2, 2.5, 0.7, -0.4, 1.1, 0.0, -2.2];
        let energy: f64 = x.iter().map(|v| v * v).sum();
        let spectral: f64 = squared_magnitudes(&x).iter().sum();
        assert_relative_eq!(spectral, x.len() as f64 * energy, epsilon = 1e-10);
    }

    #[test]
    fn constant_signal_lands_in_zero_bin() {
        let mags = squared_magnitudes(&[2.0; 16]);
        assert_relative_eq!(mags[0], (2.0 * 16.0_f64).powi(2), epsilon = 1e-9);
        assert!(mags[1..].iter().all(|&m| m < 1e-18));
    }
}
