//! Skin depth, shielding absorption loss, and free-space path loss.

use crate::constants::VACUUM_PERMEABILITY;
use crate::math::Scalar;

/// Skin depth δ = √(2/(μ₀·σ·ω)) in meters for a non-magnetic conductor.
#[must_use]
pub fn skin_depth(frequency_hz: Scalar, conductivity: Scalar) -> Scalar {
    skin_depth_mu(frequency_hz, conductivity, 1.0)
}

/// Skin depth for a conductor with relative permeability `mu_r`.
#[must_use]
pub fn skin_depth_mu(frequency_hz: Scalar, conductivity: Scalar, mu_r: Scalar) -> Scalar {
    let omega = 2.0 * std::f64::consts::PI * frequency_hz;
    (2.0 / (VACUUM_PERMEABILITY * mu_r * conductivity * omega)).sqrt()
}

/// Shielding absorption loss in dB for a shield of thickness `thickness_m`:
/// SE = 8.7·t/δ.
#[must_use]
pub fn absorption_loss_db(
    frequency_hz: Scalar,
    conductivity: Scalar,
    mu_r: Scalar,
    thickness_m: Scalar,
) -> Scalar {
    8.7 * thickness_m / skin_depth_mu(frequency_hz, conductivity, mu_r)
}

/// Free-space path loss in dB:
/// 20·log10(d) + 20·log10(f) − 147.55, with d in meters and f in hertz.
#[must_use]
pub fn free_space_path_loss_db(distance_m: Scalar, frequency_hz: Scalar) -> Scalar {
    20.0 * distance_m.log10() + 20.0 * frequency_hz.log10() - 147.55
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn copper_skin_depth_at_one_megahertz() {
        // Textbook value for copper (σ = 5.8e7 S/m): about 66 µm.
        let delta = skin_depth(1.0e6, 5.8e7);
        assert_relative_eq!(delta, 6.61e-5, max_relative = 1.0e-3);
    }

    #[test]
    fn skin_depth_falls_with_sqrt_frequency() {
        let d1 = skin_depth(1.0e6, 5.8e7);
        let d2 = skin_depth(4.0e6, 5.8e7);
        assert_relative_eq!(d1 / d2, 2.0, max_relative = 1.0e-12);
    }

    #[test]
    fn one_skin_depth_absorbs_8_7_db() {
        let delta = skin_depth_mu(1.0e6, 5.0e3, 1.0);
        let se = absorption_loss_db(1.0e6, 5.0e3, 1.0, delta);
        assert_relative_eq!(se, 8.7, max_relative = 1.0e-12);
    }

    #[test]
    fn path_loss_at_one_meter_one_gigahertz() {
        // 20·log10(1e9) − 147.55 = 32.45 dB.
        assert_relative_eq!(
            free_space_path_loss_db(1.0, 1.0e9),
            32.45,
            epsilon = 1.0e-9
        );
    }

    #[test]
    fn path_loss_gains_6_db_per_doubled_distance() {
        let a = free_space_path_loss_db(100.0, 2.4e9);
        let b = free_space_path_loss_db(200.0, 2.4e9);
        assert_relative_eq!(b - a, 20.0 * 2.0f64.log10(), epsilon = 1.0e-12);
    }
}
