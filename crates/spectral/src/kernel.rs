//! Daniell smoothing kernels for the periodogram.

use crate::error::SpectralError;

/// Shape of each Daniell component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KernelKind {
    /// Equal weights `1/(2m+1)` on `[-m, m]`.
    #[default]
    Daniell,
    /// Weights `1/(2m)` inside, `1/(4m)` at `±m`.
    ModifiedDaniell,
}

/// Symmetric smoothing kernel obtained by convolving one Daniell kernel per
/// half-width.
///
/// Half-widths `(9, 9, 9)` give a kernel of total half-width 27 whose weights
/// sum to one.
#[derive(Clone, Debug, PartialEq)]
pub struct DaniellKernel {
    kind: KernelKind,
    half_widths: Vec<usize>,
    /// Weights for offsets `-m..=m`.
    weights: Vec<f64>,
}

impl DaniellKernel {
    /// Builds a kernel of the given kind and component half-widths.
    ///
    /// An empty list of half-widths yields the identity kernel.
    ///
    /// # Errors
    ///
    /// Returns [`SpectralError::InvalidKernel`] if a modified Daniell
    /// component has half-width zero.
    pub fn new(kind: KernelKind, half_widths: &[usize]) -> Result<Self, SpectralError> {
        let components = half_widths
            .iter()
            .map(|&m| component_weights(kind, m))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            kind,
            half_widths: half_widths.to_vec(),
            weights: convolve_all(components),
        })
    }

    fn plain(half_widths: &[usize]) -> Self {
        Self {
            kind: KernelKind::Daniell,
            half_widths: half_widths.to_vec(),
            weights: convolve_all(half_widths.iter().map(|&m| daniell_component(m))),
        }
    }

    /// Plain Daniell kernel with the given half-widths.
    ///
    /// # Errors
    ///
    /// Never fails for [`KernelKind::Daniell`]; the `Result` mirrors [`Self::new`].
    pub fn daniell(half_widths: &[usize]) -> Result<Self, SpectralError> {
        Ok(Self::plain(half_widths))
    }

    /// Modified Daniell kernel with the given half-widths.
    ///
    /// # Errors
    ///
    /// Returns [`SpectralError::InvalidKernel`] if any half-width is zero.
    pub fn modified_daniell(half_widths: &[usize]) -> Result<Self, SpectralError> {
        Self::new(KernelKind::ModifiedDaniell, half_widths)
    }

    /// Returns the component kind.
    pub fn kind(&self) -> KernelKind {
        self.kind
    }

    /// Returns the component half-widths.
    pub fn half_widths(&self) -> &[usize] {
        &self.half_widths
    }

    /// Total half-width `m` (sum of component half-widths).
    pub fn half_width(&self) -> usize {
        self.weights.len() / 2
    }

    /// Kernel length `2m + 1`.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`: a kernel has at least the centre weight.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weights for offsets `-m..=m`.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Circular smoothing: `y[i] = Σ_j w[j]·x[(i + j) mod n]` over
    /// `j = -m..=m`.
    ///
    /// Callers must ensure `x.len() >= self.len()`.
    pub(crate) fn apply_circular(&self, x: &[f64]) -> Vec<f64> {
        let n = x.len();
        let m = self.half_width();
        (0..n)
            .map(|i| {
                self.weights
                    .iter()
                    .enumerate()
                    .map(|(offset, &w)| w * x[(i + n + offset - m) % n])
                    .sum()
            })
            .collect()
    }
}

impl Default for DaniellKernel {
    fn default() -> Self {
        Self::plain(&[9, 9, 9])
    }
}

fn daniell_component(m: usize) -> Vec<f64> {
    vec![1.0 / (2 * m + 1) as f64; 2 * m + 1]
}

fn component_weights(kind: KernelKind, m: usize) -> Result<Vec<f64>, SpectralError> {
    match kind {
        KernelKind::Daniell => Ok(daniell_component(m)),
        KernelKind::ModifiedDaniell => {
            if m == 0 {
                return Err(SpectralError::InvalidKernel(
                    "modified Daniell half-width must be >= 1".to_string(),
                ));
            }
            let inner = 1.0 / (2 * m) as f64;
            let mut w = vec![inner; 2 * m + 1];
            w[0] = inner / 2.0;
            w[2 * m] = inner / 2.0;
            Ok(w)
        }
    }
}

fn convolve_all(components: impl IntoIterator<Item = Vec<f64>>) -> Vec<f64> {
    components
        .into_iter()
        .fold(vec![1.0], |acc, c| convolve(&acc, &c))
}

fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_is_daniell_nine_nine_nine() {
        let k = DaniellKernel::default();
        assert_eq!(k, DaniellKernel::new(KernelKind::Daniell, &[9, 9, 9]).unwrap());
        assert_eq!(k.half_width(), 27);
        assert_eq!(k.len(), 55);
        assert_relative_eq!(k.weights().iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn single_daniell_is_flat() {
        let k = DaniellKernel::daniell(&[2]).unwrap();
        assert_eq!(k.weights(), &[0.2; 5]);
    }

    #[test]
    fn convolved_kernel_is_symmetric_and_peaked() {
        let k = DaniellKernel::daniell(&[3, 3]).unwrap();
        let w = k.weights();
        for i in 0..w.len() {
            assert_relative_eq!(w[i], w[w.len() - 1 - i], epsilon = 1e-15);
        }
        // Two boxes of width 7 give a triangle peaking at 7/49.
        assert_relative_eq!(w[6], 1.0 / 7.0, epsilon = 1e-15);
        assert!(w[6] > w[5] && w[5] > w[4]);
    }

    #[test]
    fn modified_daniell_weights() {
        let k = DaniellKernel::modified_daniell(&[2]).unwrap();
        assert_eq!(k.weights(), &[0.125, 0.25, 0.25, 0.25, 0.125]);
        assert_eq!(k.kind(), KernelKind::ModifiedDaniell);
    }

    #[test]
    fn modified_daniell_zero_width_rejected() {
        assert!(matches!(
            DaniellKernel::modified_daniell(&[0]).unwrap_err(),
            SpectralError::InvalidKernel(_)
        ));
    }

    #[test]
    fn empty_half_widths_give_identity() {
        let k = DaniellKernel::daniell(&[]).unwrap();
        assert_eq!(k.weights(), &[1.0]);
        let x = [1.0, 5.0, 2.0];
        assert_eq!(k.apply_circular(&x), x.to_vec());
    }

    #[test]
    fn circular_smoothing_preserves_sum_and_wraps() {
        let k = DaniellKernel::daniell(&[1]).unwrap();
        let x = [3.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let y = k.apply_circular(&x);
        assert_relative_eq!(y.iter().sum::<f64>(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(y[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(y[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(y[5], 1.0, epsilon = 1e-12);
        assert_relative_eq!(y[3], 0.0, epsilon = 1e-12);
    }
}
