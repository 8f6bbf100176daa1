use crate::circuit::{Activator, SweepPattern};
use crate::engine::QuantumEngine;
use crate::error::{Error, Result};
use crate::lattice::{Lattice, Neighborhood, Topology};
use crate::rule::{flip_targets, level_signatures, LevelSet};

/// Run one update pass of the rule over the lattice, emitting gates to
/// the engine in program order.
///
/// Per visited cell and active level, every signature of that weight over
/// the cell's controls is realized as Pauli-X on the zero-valued controls,
/// the all-ones multi-controlled activator, then the same Pauli-X set
/// again to restore the controls. Emission order is deterministic; gates
/// do not commute in general, so it must be reproduced exactly.
///
/// An engine rejection aborts the pass immediately. Gates already emitted
/// stay applied: quantum operations are not undoable without inverse
/// application, so there is no rollback and no retry.
pub fn update_lattice<E: QuantumEngine>(
    engine: &mut E,
    lattice: &Lattice,
    topology: &Topology,
    levels: &LevelSet,
    activator: &Activator,
    sweep: SweepPattern,
) -> Result<()> {
    if engine.num_qubits() < lattice.num_cells() {
        return Err(Error::RegisterTooSmall {
            qubits: engine.num_qubits(),
            cells: lattice.num_cells(),
        });
    }

    if levels.is_empty() {
        log::debug!("level set is empty, nothing to emit");
        return Ok(());
    }

    for &parity in sweep.parities() {
        for row in 0..lattice.rows() {
            let first_col = (row + parity) % 2;
            for col in (first_col..lattice.cols()).step_by(2) {
                let neighborhood = Neighborhood::build(lattice, topology, row, col)
                    .expect("sweep visits only in-lattice cells");
                log::debug!("cell ({}, {}): neighborhood {}", row, col, neighborhood);

                let target = neighborhood.target();
                let controls = neighborhood.controls();

                for &level in levels.levels() {
                    // levels above the control count have no signatures;
                    // boundary cells simply skip them
                    for signature in level_signatures(level, controls.len() as u32) {
                        let flips = flip_targets(&signature, &controls);
                        log::trace!(
                            "  level {} signature {} flips {:?}",
                            level,
                            signature,
                            flips
                        );
                        for &qubit in &flips {
                            engine.pauli_x(qubit)?;
                        }
                        engine.multi_controlled_unitary(&controls, target, activator.matrix())?;
                        for &qubit in &flips {
                            engine.pauli_x(qubit)?;
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
