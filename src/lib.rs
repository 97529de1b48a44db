#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Scalar/complex aliases and phasor helpers.
pub mod math;
/// Error types shared between modules.
pub mod errors;
/// Homogeneous material parameters and their frequency-dependent wave quantities.
pub mod medium;
/// Interface reflection/transmission coefficients shared by the solvers.
pub mod reflection;
/// The layered-medium plane-wave field solver.
pub mod layered;
/// Standing waves on a terminated line with a complex load.
pub mod line;
/// Caller-facing configuration for building and running a layered solve.
pub mod config;
/// Sample-grid construction and output projections.
pub mod grid;
/// Stateless closed-form RF teaching formulas.
pub mod formulas;

/// Common exports for downstream crates.
pub mod prelude;
