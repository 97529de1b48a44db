//! Homogeneous material parameters and the wave quantities derived from them.

use crate::constants::{VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use crate::math::{CScalar, Scalar};

/// A homogeneous, isotropic medium described by its relative permittivity
/// and conductivity. Permeability is fixed at μ₀.
///
/// All wave quantities are evaluated at a caller-supplied angular frequency;
/// the medium itself stores nothing frequency-dependent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Medium {
    /// Relative permittivity εr (dimensionless, > 0).
    pub epsilon_r: Scalar,
    /// Electrical conductivity σ in S/m (≥ 0).
    pub sigma: Scalar,
}

impl Medium {
    /// Medium with the given relative permittivity and conductivity.
    #[must_use]
    pub const fn new(epsilon_r: Scalar, sigma: Scalar) -> Self {
        Self { epsilon_r, sigma }
    }

    /// Free space (εr = 1, σ = 0).
    #[must_use]
    pub const fn vacuum() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Lossless dielectric (σ = 0).
    #[must_use]
    pub const fn lossless(epsilon_r: Scalar) -> Self {
        Self::new(epsilon_r, 0.0)
    }

    /// Complex permittivity εc = ε₀·(εr − jσ/(ωε₀)) at angular frequency
    /// `omega` (rad/s). A lossless medium (σ = 0) yields a purely real εc.
    ///
    /// `omega` must be nonzero; ω = 0 with σ > 0 is a degeneracy the solvers
    /// reject before reaching this point.
    #[must_use]
    pub fn complex_permittivity(&self, omega: Scalar) -> CScalar {
        CScalar::new(VACUUM_PERMITTIVITY * self.epsilon_r, -self.sigma / omega)
    }

    /// Complex wavenumber k = ω·√(μ₀·εc) at angular frequency `omega`.
    ///
    /// `num_complex` takes the principal branch of the square root
    /// (non-negative real part), which is what keeps lossy-media wave
    /// amplitudes decaying instead of growing. Any replacement of this
    /// primitive must preserve that branch choice.
    #[must_use]
    pub fn wavenumber(&self, omega: Scalar) -> CScalar {
        (self.complex_permittivity(omega) * VACUUM_PERMEABILITY).sqrt() * omega
    }

    /// Intrinsic impedance η = √(μ₀/εc) at angular frequency `omega`,
    /// principal branch as for [`Self::wavenumber`].
    #[must_use]
    pub fn intrinsic_impedance(&self, omega: Scalar) -> CScalar {
        (CScalar::new(VACUUM_PERMEABILITY, 0.0) / self.complex_permittivity(omega)).sqrt()
    }
}
