//! Normalized far-field radiation patterns.

use crate::math::Scalar;

/// The antenna models offered by the radiation-pattern demo.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntennaPattern {
    /// Uniform gain in every direction.
    Isotropic,
    /// Short (Hertzian) dipole, |sin θ|.
    ShortDipole,
    /// Toy directional beam, |cos θ · sin 2θ|².
    YagiToy,
}

impl AntennaPattern {
    /// Normalized pattern value at elevation angle `theta` (radians).
    #[must_use]
    pub fn gain(&self, theta: Scalar) -> Scalar {
        match self {
            Self::Isotropic => 1.0,
            Self::ShortDipole => theta.sin().abs(),
            Self::YagiToy => (theta.cos() * (2.0 * theta).sin()).abs().powi(2),
        }
    }

    /// Evaluates the pattern over a slice of angles.
    #[must_use]
    pub fn over(&self, thetas: &[Scalar]) -> Vec<Scalar> {
        thetas.iter().map(|&t| self.gain(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use super::*;

    #[test]
    fn isotropic_is_flat() {
        for theta in [0.0, 1.0, 3.0, 6.0] {
            assert_relative_eq!(AntennaPattern::Isotropic.gain(theta), 1.0);
        }
    }

    #[test]
    fn dipole_peaks_broadside_and_nulls_axially() {
        assert_relative_eq!(AntennaPattern::ShortDipole.gain(FRAC_PI_2), 1.0);
        assert_relative_eq!(AntennaPattern::ShortDipole.gain(0.0), 0.0);
    }

    #[test]
    fn yagi_toy_nulls_on_axis_and_broadside() {
        assert_relative_eq!(AntennaPattern::YagiToy.gain(0.0), 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(
            AntennaPattern::YagiToy.gain(FRAC_PI_2),
            0.0,
            epsilon = 1.0e-12
        );
        assert!(AntennaPattern::YagiToy.gain(FRAC_PI_4) > 0.2);
    }
}
