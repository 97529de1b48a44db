//! Region stacks and position-to-region mapping.

use crate::math::Scalar;
use crate::medium::Medium;

use super::solver::SolveError;

/// A finite homogeneous slab inside a [`Stack`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    /// Material of the slab.
    pub medium: Medium,
    /// Thickness in meters (> 0).
    pub thickness: Scalar,
}

impl Slab {
    /// Slab of `medium` with the given thickness in meters.
    #[must_use]
    pub const fn new(medium: Medium, thickness: Scalar) -> Self {
        Self { medium, thickness }
    }
}

/// An ordered stack of regions: a semi-infinite incidence medium below
/// x = 0, finite slabs laid end to end from x = 0, and a semi-infinite
/// transmission medium above the last slab.
///
/// The two half-spaces are always present, so a stack has at least two
/// regions and one interface by construction. Nothing in a stack depends on
/// frequency; the same stack can be solved at any ω.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    incidence: Medium,
    slabs: Vec<Slab>,
    transmission: Medium,
}

impl Stack {
    /// Builds a stack, rejecting slabs with non-positive or non-finite
    /// thickness.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Config`] on an invalid slab thickness.
    pub fn new(
        incidence: Medium,
        slabs: Vec<Slab>,
        transmission: Medium,
    ) -> Result<Self, SolveError> {
        for (index, slab) in slabs.iter().enumerate() {
            if !slab.thickness.is_finite() || slab.thickness <= 0.0 {
                return Err(SolveError::Config(format!(
                    "slab {index} has non-positive thickness {} m",
                    slab.thickness
                )));
            }
        }
        Ok(Self {
            incidence,
            slabs,
            transmission,
        })
    }

    /// Single-interface stack: two half-spaces, no slabs.
    #[must_use]
    pub const fn half_spaces(incidence: Medium, transmission: Medium) -> Self {
        Self {
            incidence,
            slabs: Vec::new(),
            transmission,
        }
    }

    /// Incidence half-space medium.
    #[must_use]
    pub const fn incidence(&self) -> &Medium {
        &self.incidence
    }

    /// Transmission half-space medium.
    #[must_use]
    pub const fn transmission(&self) -> &Medium {
        &self.transmission
    }

    /// Interior slabs in order.
    #[must_use]
    pub fn slabs(&self) -> &[Slab] {
        &self.slabs
    }

    /// Total number of regions, half-spaces included (≥ 2).
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.slabs.len() + 2
    }

    /// Number of interfaces (≥ 1).
    #[must_use]
    pub fn interface_count(&self) -> usize {
        self.slabs.len() + 1
    }

    /// Media in region order: incidence, slabs, transmission.
    pub fn media(&self) -> impl Iterator<Item = &Medium> {
        std::iter::once(&self.incidence)
            .chain(self.slabs.iter().map(|s| &s.medium))
            .chain(std::iter::once(&self.transmission))
    }

    /// Interface positions by cumulative thickness: interface i sits between
    /// region i and region i + 1, starting at x = 0.
    #[must_use]
    pub fn interface_positions(&self) -> Vec<Scalar> {
        let mut positions = Vec::with_capacity(self.interface_count());
        let mut x = 0.0;
        positions.push(x);
        for slab in &self.slabs {
            x += slab.thickness;
            positions.push(x);
        }
        positions
    }

    /// Region index owning position `x`: region i covers
    /// `interface[i-1] <= x < interface[i]`, with the incidence region open
    /// below x = 0 and the transmission region open above the last interface.
    #[must_use]
    pub fn region_of(&self, x: Scalar, interfaces: &[Scalar]) -> usize {
        interfaces.iter().take_while(|&&b| x >= b).count()
    }
}
