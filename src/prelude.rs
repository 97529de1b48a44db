//! Convenience re-exports for driving the solvers from a front end.

pub use crate::config::{RegionSpec, SampleRange, SolveConfig};
pub use crate::constants::*;
pub use crate::errors::EmWavesError;
pub use crate::formulas::{
    absorption_loss_db, combined_signal, envelope_db, free_space_path_loss_db, impedance_to_gamma,
    normalize, reactance_circle, resistance_circle, skin_depth, skin_depth_mu, AntennaPattern,
    ChartCircle, CoaxLine, PathComponent, Rlgc,
};
pub use crate::grid::{linspace, logspace, mag, mag_db, phase_rad, project, real_part, Projection};
pub use crate::layered::{
    solve, solve_with_excitation, Excitation, FieldSample, Slab, SolveError, Stack,
};
pub use crate::line::{reflected_wave_real, standing_wave_magnitude, LoadedLine};
pub use crate::math::{cis, phasor, CScalar, Scalar};
pub use crate::medium::Medium;
pub use crate::reflection::{
    load_reflection, reflection_coefficient, transmission_coefficient, vswr,
};
