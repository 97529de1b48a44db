//! Reflection and transmission at the boundary between two media.
//!
//! The same pair of formulas covers a wave interface (arguments are
//! intrinsic impedances) and a terminated line (arguments are the reference
//! and load impedances), so every solver in this crate funnels through here
//! rather than restating them.

use crate::math::{CScalar, Scalar};

/// Reflection coefficient Γ = (Z_b − Z_a)/(Z_b + Z_a) seen from side `a`.
///
/// For passive media both arguments lie in the right half plane and
/// |Γ| ≤ 1 follows; identical impedances give exactly Γ = 0.
#[must_use]
pub fn reflection_coefficient(z_a: CScalar, z_b: CScalar) -> CScalar {
    (z_b - z_a) / (z_b + z_a)
}

/// Transmission coefficient T = 2·Z_b/(Z_b + Z_a) into side `b`.
///
/// Satisfies T = 1 + Γ, which is what makes the layered solver's field
/// continuous at the far boundary of each slab.
#[must_use]
pub fn transmission_coefficient(z_a: CScalar, z_b: CScalar) -> CScalar {
    z_b * 2.0 / (z_b + z_a)
}

/// Reflection coefficient of a load `z_load` on a line of real
/// characteristic impedance `z0`.
#[must_use]
pub fn load_reflection(z0: Scalar, z_load: CScalar) -> CScalar {
    reflection_coefficient(CScalar::new(z0, 0.0), z_load)
}

/// Voltage standing-wave ratio (1 + |Γ|)/(1 − |Γ|).
///
/// Returns infinity for total reflection (|Γ| = 1).
#[must_use]
pub fn vswr(gamma: CScalar) -> Scalar {
    let m = gamma.norm();
    (1.0 + m) / (1.0 - m)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::constants::angular_frequency;
    use crate::medium::Medium;

    use super::*;

    #[test]
    fn matched_interface_has_no_reflection() {
        let omega = angular_frequency(50.0e9);
        let eta = Medium::vacuum().intrinsic_impedance(omega);
        let gamma = reflection_coefficient(eta, eta);
        let t = transmission_coefficient(eta, eta);
        assert_relative_eq!(gamma.norm(), 0.0, epsilon = 1.0e-15);
        assert_relative_eq!(t.re, 1.0, epsilon = 1.0e-15);
        assert_relative_eq!(t.im, 0.0, epsilon = 1.0e-15);
    }

    #[test]
    fn transmission_is_one_plus_reflection() {
        let omega = angular_frequency(2.4e9);
        let a = Medium::lossless(1.0).intrinsic_impedance(omega);
        let b = Medium::new(6.0, 30.0).intrinsic_impedance(omega);
        let gamma = reflection_coefficient(a, b);
        let t = transmission_coefficient(a, b);
        assert_relative_eq!(t.re, 1.0 + gamma.re, epsilon = 1.0e-12);
        assert_relative_eq!(t.im, gamma.im, epsilon = 1.0e-12);
    }

    #[test]
    fn passive_media_never_amplify() {
        // |Γ| <= 1 for every pairing across the full parameter range the
        // interactive demos expose.
        let omega = angular_frequency(50.0e9);
        let eps_values = [1.0, 2.0, 4.0, 6.0, 9.0, 12.0];
        let sigma_values = [0.0, 1.0e-12, 1.0e-3, 1.0, 1.0e2, 1.0e4];
        for &eps_a in &eps_values {
            for &sig_a in &sigma_values {
                for &eps_b in &eps_values {
                    for &sig_b in &sigma_values {
                        let eta_a = Medium::new(eps_a, sig_a).intrinsic_impedance(omega);
                        let eta_b = Medium::new(eps_b, sig_b).intrinsic_impedance(omega);
                        let gamma = reflection_coefficient(eta_a, eta_b);
                        assert!(
                            gamma.norm() <= 1.0 + 1.0e-12,
                            "|Γ| = {} for εr=({eps_a},{eps_b}) σ=({sig_a},{sig_b})",
                            gamma.norm()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn load_reflection_matches_hand_calculation() {
        // ZL = 100 + 40j on a 50 Ω line, the complex-load demo default.
        let gamma = load_reflection(50.0, CScalar::new(100.0, 40.0));
        let expected = CScalar::new(50.0, 40.0) / CScalar::new(150.0, 40.0);
        assert_relative_eq!(gamma.re, expected.re, epsilon = 1.0e-12);
        assert_relative_eq!(gamma.im, expected.im, epsilon = 1.0e-12);
    }

    #[test]
    fn vswr_of_matched_load_is_unity() {
        assert_relative_eq!(vswr(CScalar::new(0.0, 0.0)), 1.0, epsilon = 1.0e-15);
        assert_relative_eq!(vswr(CScalar::new(0.5, 0.0)), 3.0, epsilon = 1.0e-12);
    }
}
