//! Stateless closed-form formulas behind the single-plot teaching demos.
//!
//! Each submodule is one demo's physics with the UI stripped away: no
//! shared state, no interaction with the layered solver.

mod antenna;
mod attenuation;
mod coax;
mod multipath;
mod smith;

pub use antenna::AntennaPattern;
pub use attenuation::{absorption_loss_db, free_space_path_loss_db, skin_depth, skin_depth_mu};
pub use coax::{CoaxLine, Rlgc};
pub use multipath::{combined_signal, envelope_db, PathComponent};
pub use smith::{impedance_to_gamma, normalize, reactance_circle, resistance_circle, ChartCircle};
