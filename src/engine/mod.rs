mod trace;

pub use trace::{GateOp, TraceEngine};

use num_complex::Complex64;

use crate::error::Result;

/// 2x2 single-qubit gate matrix, row-major
pub type Matrix2 = [[Complex64; 2]; 2];

/// External quantum execution backend.
///
/// The compiler only ever issues these two gate shapes, in program order;
/// gates mutate shared register state and generally do not commute, so
/// implementations must apply them sequentially. Register allocation and
/// amplitude storage stay on the implementation's side of this boundary.
pub trait QuantumEngine {
    /// Number of qubits in the register
    fn num_qubits(&self) -> usize;

    /// Flip the computational basis state of one qubit.
    ///
    /// Succeeds for every in-range index.
    fn pauli_x(&mut self, qubit: usize) -> Result<()>;

    /// Apply `matrix` to `target` iff every control qubit is in state 1.
    ///
    /// Fails when operands overlap or fall outside the register.
    fn multi_controlled_unitary(
        &mut self,
        controls: &[usize],
        target: usize,
        matrix: &Matrix2,
    ) -> Result<()>;
}
