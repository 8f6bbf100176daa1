//! Error types for circuit compilation and gate emission

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while compiling a rule into gate calls.
///
/// Configuration problems are all detectable before the first gate is
/// emitted. Engine rejections can surface mid-pass; gates already applied
/// are not rolled back (gate application is not idempotent, so there is
/// no retry policy either).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Lattice dimensions must both be positive
    #[error("lattice dimensions must be positive, got {rows}x{cols}")]
    EmptyLattice { rows: u32, cols: u32 },

    /// Rule code does not fit the neighborhood's bit width
    #[error("rule code {code} out of range for neighborhood size {size} (max {max})")]
    RuleOutOfRange { code: u32, size: u32, max: u32 },

    /// Topology needs at least the center site
    #[error("topology must contain at least the center site")]
    EmptyTopology,

    /// Topology must place the (0, 0) offset at its center slot
    #[error("topology center offset must be (0, 0), found ({row}, {col})")]
    OffCenterTopology { row: i32, col: i32 },

    /// Activator matrix failed the unitarity check
    #[error("activator matrix is not unitary (deviation {deviation:.2e})")]
    NotUnitary { deviation: f64 },

    /// Register is too small for the lattice
    #[error("register has {qubits} qubits but the lattice needs {cells}")]
    RegisterTooSmall { qubits: usize, cells: usize },

    /// Gate operand outside the register
    #[error("qubit index {qubit} out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    /// Control/control or control/target overlap in a single gate call
    #[error("gate operands overlap: qubit {qubit} used more than once")]
    OverlappingOperands { qubit: usize },
}
