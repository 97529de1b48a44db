//! Distributed parameters of a coaxial line.

use crate::constants::{VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use crate::errors::EmWavesError;
use crate::math::{CScalar, Scalar};

/// Distributed RLGC parameters per unit length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rlgc {
    /// Series resistance per meter (Ω/m).
    pub r_per_m: Scalar,
    /// Series inductance per meter (H/m).
    pub l_per_m: Scalar,
    /// Shunt conductance per meter (S/m).
    pub g_per_m: Scalar,
    /// Shunt capacitance per meter (F/m).
    pub c_per_m: Scalar,
}

impl Rlgc {
    /// Characteristic impedance Zc = √((R + jωL)/(G + jωC)).
    #[must_use]
    pub fn characteristic_impedance(&self, omega: Scalar) -> CScalar {
        let series = CScalar::new(self.r_per_m, omega * self.l_per_m);
        let shunt = CScalar::new(self.g_per_m, omega * self.c_per_m);
        (series / shunt).sqrt()
    }

    /// Propagation constant γ = √((R + jωL)(G + jωC)); the real part is the
    /// attenuation in Np/m, the imaginary part the phase constant in rad/m.
    #[must_use]
    pub fn propagation_constant(&self, omega: Scalar) -> CScalar {
        let series = CScalar::new(self.r_per_m, omega * self.l_per_m);
        let shunt = CScalar::new(self.g_per_m, omega * self.c_per_m);
        (series * shunt).sqrt()
    }
}

/// Coaxial line geometry and materials.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoaxLine {
    /// Inner conductor radius in millimeters.
    pub inner_radius_mm: Scalar,
    /// Outer conductor (shield) inner radius in millimeters.
    pub outer_radius_mm: Scalar,
    /// Relative permittivity of the dielectric.
    pub epsilon_r: Scalar,
    /// Dielectric conductivity in S/m.
    pub dielectric_sigma: Scalar,
    /// Conductor conductivity in S/m.
    pub conductor_sigma: Scalar,
}

impl CoaxLine {
    /// Validates the geometry (0 < inner < outer, conductive metal).
    ///
    /// # Errors
    ///
    /// [`EmWavesError::Geometry`] for degenerate radii or a non-conductive
    /// conductor.
    pub fn new(
        inner_radius_mm: Scalar,
        outer_radius_mm: Scalar,
        epsilon_r: Scalar,
        dielectric_sigma: Scalar,
        conductor_sigma: Scalar,
    ) -> Result<Self, EmWavesError> {
        if !(inner_radius_mm > 0.0 && outer_radius_mm > inner_radius_mm) {
            return Err(EmWavesError::Geometry(format!(
                "need 0 < inner < outer radius, got {inner_radius_mm} / {outer_radius_mm} mm"
            )));
        }
        if conductor_sigma <= 0.0 {
            return Err(EmWavesError::Geometry(
                "conductor conductivity must be positive".into(),
            ));
        }
        Ok(Self {
            inner_radius_mm,
            outer_radius_mm,
            epsilon_r,
            dielectric_sigma,
            conductor_sigma,
        })
    }

    /// Distributed parameters at the given frequency. Only R depends on
    /// frequency, through the skin-effect surface resistance.
    #[must_use]
    pub fn rlgc(&self, frequency_hz: Scalar) -> Rlgc {
        let ratio_log = (self.outer_radius_mm / self.inner_radius_mm).ln();
        let two_pi = 2.0 * std::f64::consts::PI;

        let l_per_m = VACUUM_PERMEABILITY * ratio_log / two_pi;
        let g_per_m = two_pi * self.dielectric_sigma / ratio_log;
        let c_per_m = two_pi * self.epsilon_r * VACUUM_PERMITTIVITY / ratio_log;

        // Surface resistance Rs = sqrt(πfμ₀/σc); radii enter in mm, hence
        // the factor 1000 on the per-meter circumference terms.
        let rs = (std::f64::consts::PI * frequency_hz * VACUUM_PERMEABILITY
            / self.conductor_sigma)
            .sqrt();
        let r_per_m =
            1000.0 * (1.0 / self.inner_radius_mm + 1.0 / self.outer_radius_mm) * rs / two_pi;

        Rlgc {
            r_per_m,
            l_per_m,
            g_per_m,
            c_per_m,
        }
    }
}
