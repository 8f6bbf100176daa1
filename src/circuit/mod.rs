mod activator;
mod sequencer;
mod sweep;

pub use activator::Activator;
pub use sequencer::update_lattice;
pub use sweep::SweepPattern;
