//! Error types for the nereus-dispersion crate.

/// Error type for all fallible operations in the nereus-dispersion crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispersionError {
    /// Returned when the water depth is not a finite positive number.
    #[error("invalid water depth: {depth} m (must be finite and > 0)")]
    InvalidDepth {
        /// Depth that was provided.
        depth: f64,
    },

    /// Returned when gravitational acceleration is not a finite positive number.
    #[error("invalid gravitational acceleration: {gravity} (must be finite and > 0)")]
    InvalidGravity {
        /// Acceleration that was provided.
        gravity: f64,
    },

    /// Returned when the iterative solver is given unusable settings.
    #[error("invalid solver settings: {0}")]
    InvalidSolverSettings(String),

    /// Returned when Newton iteration does not reach the tolerance.
    #[error("dispersion solver did not converge after {iterations} iterations")]
    NotConverged {
        /// Number of iterations performed.
        iterations: usize,
    },
}
