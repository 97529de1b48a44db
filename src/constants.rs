//! Baseline physical constants and frequency helpers.
//!
//! Values follow the CODATA recommendations published with the 2019 SI
//! redefinition; the measured constants (ε₀, μ₀) carry 11-12 significant
//! figures, which is ample for the engineering formulas in this crate.

use std::f64::consts::PI;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;
/// Vacuum permeability μ₀ in henries per meter (H/m).
pub const VACUUM_PERMEABILITY: f64 = 1.256_637_062_12e-6;
/// Speed of light in vacuum in meters per second (m/s); exact by SI definition.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Characteristic impedance of free space √(μ₀/ε₀) in ohms (Ω).
pub const FREE_SPACE_IMPEDANCE: f64 = 376.730_313_668;

/// Returns the angular frequency ω = 2πf for a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

/// Returns the free-space wavelength in meters for a frequency in hertz.
#[inline]
#[must_use]
pub fn wavelength_from_frequency(hz: f64) -> f64 {
    SPEED_OF_LIGHT / hz
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn free_space_impedance_is_consistent() {
        let derived = (VACUUM_PERMEABILITY / VACUUM_PERMITTIVITY).sqrt();
        assert_relative_eq!(derived, FREE_SPACE_IMPEDANCE, max_relative = 1.0e-9);
    }

    #[test]
    fn wavelength_matches_reference() {
        assert_relative_eq!(
            wavelength_from_frequency(1.0e9),
            0.299_792_458,
            max_relative = 1.0e-9
        );
    }
}
