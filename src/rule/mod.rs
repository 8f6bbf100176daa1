mod decode;
mod signature;

pub use decode::{LevelSet, Rule};
pub use signature::{flip_targets, level_signatures, Signature};
