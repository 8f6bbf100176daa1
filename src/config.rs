/// Lattice dimensions for the demo pass (one qubit per cell)
pub const GRID_ROWS: u32 = 6;
pub const GRID_COLS: u32 = 6;

/// Demo rule code, read MSB-first over the neighborhood size.
/// 0b00110 activates on exactly 1 or 2 live neighbors.
pub const RULE_CODE: u32 = 0b00110;

/// Probability that a cell starts in |1> when seeding the register
pub const SEED_PROBABILITY: f64 = 0.25;

/// Max-norm tolerance for the activator unitarity check
pub const UNITARITY_TOLERANCE: f64 = 1e-10;
