mod grid;
mod neighborhood;

pub use grid::{Lattice, Layout};
pub use neighborhood::{Neighborhood, Topology};
