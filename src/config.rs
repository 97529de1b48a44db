//! Caller-facing configuration for a layered solve.
//!
//! The interactive front ends that drive this solver own their "current
//! parameters" and hand a fresh, immutable [`SolveConfig`] to [`SolveConfig::run`]
//! on every change; the solver keeps no state between calls.

use crate::constants::angular_frequency;
use crate::grid::linspace;
use crate::layered::{solve, FieldSample, Slab, SolveError, Stack};
use crate::math::Scalar;
use crate::medium::Medium;

/// One region as supplied by a front end. Boundary (semi-infinite) regions
/// carry no thickness; interior slabs give theirs in millimeters, the unit
/// the demos' sliders use.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionSpec {
    /// Relative permittivity εr.
    pub epsilon_r: Scalar,
    /// Conductivity σ in S/m.
    pub sigma: Scalar,
    /// Thickness in millimeters for interior slabs; `None` for the two
    /// boundary regions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub thickness_mm: Option<Scalar>,
}

impl RegionSpec {
    /// Semi-infinite boundary region.
    #[must_use]
    pub const fn boundary(epsilon_r: Scalar, sigma: Scalar) -> Self {
        Self {
            epsilon_r,
            sigma,
            thickness_mm: None,
        }
    }

    /// Finite interior slab with thickness in millimeters.
    #[must_use]
    pub const fn slab(epsilon_r: Scalar, sigma: Scalar, thickness_mm: Scalar) -> Self {
        Self {
            epsilon_r,
            sigma,
            thickness_mm: Some(thickness_mm),
        }
    }

    const fn medium(&self) -> Medium {
        Medium::new(self.epsilon_r, self.sigma)
    }
}

/// Position grid request: start/stop in meters and a sample count.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    /// First position in meters.
    pub start_m: Scalar,
    /// Last position in meters.
    pub stop_m: Scalar,
    /// Number of samples.
    pub samples: usize,
}

impl SampleRange {
    /// Materializes the linearly spaced position grid.
    #[must_use]
    pub fn positions(&self) -> Vec<Scalar> {
        linspace(self.start_m, self.stop_m, self.samples)
    }
}

/// A complete solve request: frequency, ordered regions, and sample grid.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolveConfig {
    /// Operating frequency in hertz (> 0); fixes ω for the whole solve.
    pub frequency_hz: Scalar,
    /// Regions in order. The first and last entries must be boundary specs,
    /// everything in between a slab spec.
    pub regions: Vec<RegionSpec>,
    /// Position grid to evaluate.
    pub sample_range: SampleRange,
}

impl SolveConfig {
    /// Validates the region list and builds the [`Stack`].
    ///
    /// # Errors
    ///
    /// [`SolveError::Config`] when fewer than two regions are given, a
    /// boundary region carries a thickness, an interior region lacks one,
    /// or a thickness is non-positive.
    pub fn stack(&self) -> Result<Stack, SolveError> {
        if self.regions.len() < 2 {
            return Err(SolveError::Config(format!(
                "a stack needs at least 2 regions, got {}",
                self.regions.len()
            )));
        }
        let last = self.regions.len() - 1;
        for (index, region) in [(0, &self.regions[0]), (last, &self.regions[last])] {
            if region.thickness_mm.is_some() {
                return Err(SolveError::Config(format!(
                    "region {index} is semi-infinite and must not carry a thickness"
                )));
            }
        }
        let mut slabs = Vec::with_capacity(self.regions.len() - 2);
        for (index, region) in self.regions[1..last].iter().enumerate() {
            let thickness_mm = region.thickness_mm.ok_or_else(|| {
                SolveError::Config(format!(
                    "interior region {} needs a thickness",
                    index + 1
                ))
            })?;
            slabs.push(Slab::new(region.medium(), thickness_mm * 1.0e-3));
        }
        Stack::new(
            self.regions[0].medium(),
            slabs,
            self.regions[last].medium(),
        )
    }

    /// Builds the stack and grid and runs the solve.
    ///
    /// # Errors
    ///
    /// [`SolveError::Config`] for an invalid region list or non-positive
    /// frequency; [`SolveError::Degenerate`] as documented on
    /// [`crate::layered::solve_with_excitation`].
    pub fn run(&self) -> Result<Vec<FieldSample>, SolveError> {
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Err(SolveError::Config(format!(
                "frequency must be positive and finite, got {} Hz",
                self.frequency_hz
            )));
        }
        let stack = self.stack()?;
        solve(
            &stack,
            angular_frequency(self.frequency_hz),
            &self.sample_range.positions(),
        )
    }
}
