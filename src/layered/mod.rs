//! Plane-wave propagation through a stack of homogeneous regions.
//!
//! A [`Stack`] is an incidence half-space, zero or more finite slabs laid
//! end to end from x = 0, and a transmission half-space. [`solve`] returns
//! the complex field at each requested position.
//!
//! # Approximation
//!
//! Each finite slab carries one forward wave and one backward wave produced
//! by a single reflection off the slab's far interface. The infinite series
//! of internal re-reflections is **not** summed. This matches the reference
//! behavior of the interactive demos this solver generalizes; do not compare
//! output against an exact transfer-matrix solution without accounting
//! for it.

mod stack;
mod solver;

pub use stack::{Slab, Stack};
pub use solver::{solve, solve_with_excitation, Excitation, FieldSample, SolveError};
