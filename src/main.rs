use rand::Rng;

use quantum_automata::circuit::{update_lattice, Activator, SweepPattern};
use quantum_automata::config::{GRID_COLS, GRID_ROWS, RULE_CODE, SEED_PROBABILITY};
use quantum_automata::engine::{QuantumEngine, TraceEngine};
use quantum_automata::error::Result;
use quantum_automata::lattice::{Lattice, Layout, Topology};
use quantum_automata::rule::Rule;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("compilation failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    log::info!("Compiling quantum cellular automaton update pass...");
    log::info!("Grid size: {}x{}", GRID_ROWS, GRID_COLS);

    let lattice = Lattice::new(GRID_ROWS, GRID_COLS, Layout::RowMajor)?;
    let topology = Topology::von_neumann();
    let rule = Rule::new(RULE_CODE, topology.size() as u32)?;
    let levels = rule.levels();
    log::info!(
        "Rule {:#07b} over a {}-site neighborhood, active levels {:?}",
        rule.code(),
        topology.size(),
        levels.levels()
    );

    let mut engine = TraceEngine::new(lattice.num_cells());
    seed_register(&mut engine)?;

    let seeded = engine.gate_count();
    log::info!("Seeded {} cells into |1>", seeded);

    update_lattice(
        &mut engine,
        &lattice,
        &topology,
        &levels,
        &Activator::hadamard(),
        SweepPattern::Checkerboard,
    )?;

    log::info!(
        "Emitted {} gate calls ({} multi-controlled activators) for one generation",
        engine.gate_count() - seeded,
        engine.unitary_count()
    );
    Ok(())
}

/// Put a random subset of cells into |1> before the update pass, the
/// classical initial configuration of the automaton
fn seed_register<E: QuantumEngine>(engine: &mut E) -> Result<()> {
    let mut rng = rand::thread_rng();
    for qubit in 0..engine.num_qubits() {
        if rng.gen_bool(SEED_PROBABILITY) {
            engine.pauli_x(qubit)?;
        }
    }
    Ok(())
}
