//! Shared numerical aliases and small helpers.

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors and wave amplitudes.
pub type CScalar = num_complex::Complex<Scalar>;

/// Returns the complex exponential `e^(j·theta)` for a real angle.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    CScalar::from_polar(1.0, theta)
}

/// Returns `e^(j·z)` for a complex argument `z`.
///
/// This is the workhorse of the field solver: forward waves are
/// `cis(k·x)` and backward waves `cis(-k·x)` with complex `k`.
#[must_use]
pub fn cis(z: CScalar) -> CScalar {
    (CScalar::i() * z).exp()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn phasor_quarter_turn_is_imaginary_unit() {
        let p = phasor(FRAC_PI_2);
        assert_relative_eq!(p.re, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(p.im, 1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn cis_of_real_argument_matches_phasor() {
        let z = CScalar::new(0.75, 0.0);
        let a = cis(z);
        let b = phasor(0.75);
        assert_relative_eq!(a.re, b.re, epsilon = 1.0e-12);
        assert_relative_eq!(a.im, b.im, epsilon = 1.0e-12);
    }

    #[test]
    fn cis_of_imaginary_argument_decays() {
        // e^(j·(-j)) = e^1; e^(j·(j)) = e^-1
        let grow = cis(CScalar::new(0.0, -1.0));
        let decay = cis(CScalar::new(0.0, 1.0));
        assert_relative_eq!(grow.re, 1.0f64.exp(), max_relative = 1.0e-12);
        assert_relative_eq!(decay.re, (-1.0f64).exp(), max_relative = 1.0e-12);
    }
}
