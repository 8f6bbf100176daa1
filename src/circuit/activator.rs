use num_complex::Complex64;

use crate::config::UNITARITY_TOLERANCE;
use crate::engine::Matrix2;
use crate::error::{Error, Result};

/// Single-qubit transform applied to a cell's qubit when its neighborhood
/// matches an active signature.
///
/// Construction verifies unitarity, so a held `Activator` is always safe
/// to hand to a backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activator {
    matrix: Matrix2,
}

impl Activator {
    /// Wrap a 2x2 matrix, verifying `U†U = I` within
    /// [`UNITARITY_TOLERANCE`]
    pub fn new(matrix: Matrix2) -> Result<Self> {
        let deviation = unitarity_deviation(&matrix);
        if deviation > UNITARITY_TOLERANCE {
            return Err(Error::NotUnitary { deviation });
        }
        Ok(Self { matrix })
    }

    /// The Hadamard transform, the classic choice for quantum CA updates:
    /// sends basis states into equal superpositions
    pub fn hadamard() -> Self {
        let scale = Complex64::new(1.0 / 2f64.sqrt(), 0.0);
        Self {
            matrix: [[scale, scale], [scale, -scale]],
        }
    }

    /// Pauli-X as an activator: a plain classical CA bit flip
    pub fn pauli_x() -> Self {
        let one = Complex64::new(1.0, 0.0);
        let zero = Complex64::new(0.0, 0.0);
        Self {
            matrix: [[zero, one], [one, zero]],
        }
    }

    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }
}

/// Max-norm distance of `U†U` from the identity
fn unitarity_deviation(matrix: &Matrix2) -> f64 {
    let mut deviation: f64 = 0.0;
    for row in 0..2 {
        for col in 0..2 {
            // (U†U)[row][col] = sum_k conj(U[k][row]) * U[k][col]
            let mut entry = Complex64::new(0.0, 0.0);
            for k in 0..2 {
                entry += matrix[k][row].conj() * matrix[k][col];
            }
            let expected = if row == col { 1.0 } else { 0.0 };
            deviation = deviation.max((entry - expected).norm());
        }
    }
    deviation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hadamard_is_unitary() {
        let hadamard = Activator::hadamard();
        assert!(Activator::new(*hadamard.matrix()).is_ok());
    }

    #[test]
    fn test_pauli_x_is_unitary() {
        let pauli = Activator::pauli_x();
        assert!(Activator::new(*pauli.matrix()).is_ok());
    }

    #[test]
    fn test_phase_matrix_is_unitary() {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        assert!(Activator::new([[one, zero], [zero, i]]).is_ok());
    }

    #[test]
    fn test_rejects_non_unitary() {
        let one = Complex64::new(1.0, 0.0);
        let result = Activator::new([[one, one], [one, one]]);
        assert!(matches!(result, Err(Error::NotUnitary { .. })));
    }

    #[test]
    fn test_rejects_scaled_identity() {
        let half = Complex64::new(0.5, 0.0);
        let zero = Complex64::new(0.0, 0.0);
        let result = Activator::new([[half, zero], [zero, half]]);
        assert!(matches!(result, Err(Error::NotUnitary { .. })));
    }
}
