//! Standing waves on a finite line terminated in a complex load.
//!
//! This is the single-interface, single-medium special case of the layered
//! solver: one attenuating incidence medium and one reflecting boundary.
//! The reflection coefficient comes from [`crate::reflection`]; this module
//! only adds the spatial profile on top of it.

use crate::math::{CScalar, Scalar};
use crate::reflection::load_reflection;

/// Standing-wave magnitude `e^(−αx)·|1 + Γ·e^(−2jkx)|` at position `x`.
///
/// `k` is the spatial wavenumber and `alpha` the attenuation constant in
/// Np/m. With α = 0 and real Γ ∈ [0, 1] the profile is periodic with period
/// π/k and ranges over [1 − Γ, 1 + Γ].
#[must_use]
pub fn standing_wave_magnitude(gamma: CScalar, k: Scalar, alpha: Scalar, x: Scalar) -> Scalar {
    let interference = CScalar::new(1.0, 0.0) + gamma * CScalar::from_polar(1.0, -2.0 * k * x);
    (-alpha * x).exp() * interference.norm()
}

/// Real part of the reflected wave, `e^(−αx)·|Γ|·cos(2kx + arg Γ)`.
#[must_use]
pub fn reflected_wave_real(gamma: CScalar, k: Scalar, alpha: Scalar, x: Scalar) -> Scalar {
    (-alpha * x).exp() * gamma.norm() * (2.0 * k * x + gamma.arg()).cos()
}

/// A finite line of real characteristic impedance with uniform attenuation,
/// evaluated against a terminating load.
///
/// The wavenumber is fixed by the line length as k = 2π/length, matching
/// the reference demo's normalization (the length plays the role of the
/// wavelength scale).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadedLine {
    /// Characteristic impedance Z₀ in ohms (> 0, real).
    pub z0: Scalar,
    /// Line length in meters (> 0).
    pub length: Scalar,
    /// Attenuation constant α in Np/m (≥ 0).
    pub alpha: Scalar,
}

impl LoadedLine {
    /// Line with the given characteristic impedance, length, and
    /// attenuation.
    #[must_use]
    pub const fn new(z0: Scalar, length: Scalar, alpha: Scalar) -> Self {
        Self { z0, length, alpha }
    }

    /// Spatial wavenumber 2π/length.
    #[must_use]
    pub fn wavenumber(&self) -> Scalar {
        2.0 * std::f64::consts::PI / self.length
    }

    /// Load reflection coefficient Γ = (Z_L − Z₀)/(Z_L + Z₀).
    #[must_use]
    pub fn reflection(&self, z_load: CScalar) -> CScalar {
        load_reflection(self.z0, z_load)
    }

    /// Total voltage magnitude profile over `positions`.
    #[must_use]
    pub fn voltage_profile(&self, z_load: CScalar, positions: &[Scalar]) -> Vec<Scalar> {
        let gamma = self.reflection(z_load);
        let k = self.wavenumber();
        positions
            .iter()
            .map(|&x| standing_wave_magnitude(gamma, k, self.alpha, x))
            .collect()
    }

    /// Real part of the reflected wave over `positions`.
    #[must_use]
    pub fn reflected_profile(&self, z_load: CScalar, positions: &[Scalar]) -> Vec<Scalar> {
        let gamma = self.reflection(z_load);
        let k = self.wavenumber();
        positions
            .iter()
            .map(|&x| reflected_wave_real(gamma, k, self.alpha, x))
            .collect()
    }
}
