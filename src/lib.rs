//! Compiles totalistic cellular-automaton rules over a bounded 2-D
//! lattice into quantum gate sequences, one qubit per cell.
//!
//! An integer rule code is decoded into active neighbor-count levels;
//! each level is expanded into every control signature of that Hamming
//! weight, and each signature is realized against an external
//! [`engine::QuantumEngine`] as an all-ones multi-controlled activator
//! conjugated by Pauli-X flips on its zero-valued controls.

pub mod circuit;
pub mod combinatorics;
pub mod config;
pub mod engine;
pub mod error;
pub mod lattice;
pub mod rule;
