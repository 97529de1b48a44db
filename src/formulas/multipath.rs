//! Narrowband multipath channel synthesis.
//!
//! The urban-fading demo draws random Rayleigh path amplitudes; here the
//! path set is caller-supplied so the synthesis stays deterministic and
//! testable. Front ends that want randomized channels generate the
//! components themselves.

use crate::math::{CScalar, Scalar};

/// One propagation path of a multipath channel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathComponent {
    /// Path amplitude (linear).
    pub amplitude: Scalar,
    /// Extra phase offset in radians.
    pub phase: Scalar,
    /// Path delay in seconds.
    pub delay: Scalar,
}

/// Coherent sum of all paths at time `t`:
/// Σ aᵢ·e^(j·(2πf·(t − τᵢ) + φᵢ)).
#[must_use]
pub fn combined_signal(paths: &[PathComponent], carrier_hz: Scalar, t: Scalar) -> CScalar {
    let two_pi_f = 2.0 * std::f64::consts::PI * carrier_hz;
    paths
        .iter()
        .map(|p| CScalar::from_polar(p.amplitude, two_pi_f * (t - p.delay) + p.phase))
        .sum()
}

/// Received envelope in dB over a time grid, 20·log10(|Σ paths|) with very
/// small magnitudes clamped.
#[must_use]
pub fn envelope_db(paths: &[PathComponent], carrier_hz: Scalar, times: &[Scalar]) -> Vec<Scalar> {
    const MIN: Scalar = 1e-300;
    times
        .iter()
        .map(|&t| {
            let s = combined_signal(paths, carrier_hz, t);
            20.0 * s.norm().max(MIN).log10()
        })
        .collect()
}
