//! Field reconstruction across a region stack.

use std::f64::consts::FRAC_PI_2;

use thiserror::Error;

use crate::math::{cis, CScalar, Scalar};
use crate::reflection::{reflection_coefficient, transmission_coefficient};

use super::stack::Stack;

/// Errors raised while validating or running a solve.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The stack, grid, or frequency was rejected before any computation.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A numeric degeneracy (zero impedance sum, non-finite intermediate)
    /// was detected; no partial output is returned.
    #[error("numeric degeneracy: {0}")]
    Degenerate(String),
}

/// Reference amplitude and phase of the incident wave in the incidence
/// region.
///
/// These are display-normalization constants inherited from the interactive
/// demos, not physical inputs: they scale and shift the incidence-region
/// trace only and do not propagate into the transmitted regions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Excitation {
    /// Incident amplitude A.
    pub amplitude: Scalar,
    /// Incident phase offset φ in radians.
    pub phase: Scalar,
}

impl Default for Excitation {
    /// The values the reference demos ship with: A = 2, φ = π/2.
    fn default() -> Self {
        Self {
            amplitude: 2.0,
            phase: FRAC_PI_2,
        }
    }
}

impl Excitation {
    /// Unit amplitude, zero phase. Convenient when comparing against
    /// closed-form expressions.
    #[must_use]
    pub const fn unit() -> Self {
        Self {
            amplitude: 1.0,
            phase: 0.0,
        }
    }
}

/// One solved sample: a position and the complex field there.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Position in meters.
    pub position: Scalar,
    /// Complex field amplitude.
    pub field: CScalar,
}

impl FieldSample {
    /// Real part of the field, the usual quantity plotted.
    #[must_use]
    pub fn real(&self) -> Scalar {
        self.field.re
    }

    /// Field magnitude, used for envelope displays.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        self.field.norm()
    }
}

/// Solves the stack at angular frequency `omega` with the demos' default
/// [`Excitation`]. See [`solve_with_excitation`].
///
/// # Errors
///
/// See [`solve_with_excitation`].
pub fn solve(
    stack: &Stack,
    omega: Scalar,
    positions: &[Scalar],
) -> Result<Vec<FieldSample>, SolveError> {
    solve_with_excitation(stack, omega, Excitation::default(), positions)
}

/// Computes the complex field at every position, one sample per entry of
/// `positions` (which need not be sorted; samples are independent).
///
/// Per region the solver evaluates, with k and η on the principal square
/// root branch:
///
/// - incidence region: `A·(e^(j(k₀x+φ)) + Γ₀·e^(−j(k₀x+φ)))`;
/// - slab i, in the slab's local coordinate ξ with thickness d:
///   `Aᵢ·(e^(jkᵢξ) + Γᵢ·e^(2jkᵢd)·e^(−jkᵢξ))`, where Aᵢ carries the
///   product of the transmission coefficients and internal propagation
///   phases accumulated reaching the slab — one internal round trip only;
/// - transmission region: `A_N·e^(jk_Nξ)`.
///
/// # Errors
///
/// [`SolveError::Config`] when `omega` is not a positive finite number;
/// [`SolveError::Degenerate`] when an impedance sum vanishes or any
/// intermediate or output value is non-finite (e.g. ω → 0 combined with
/// σ > 0), so that a failed solve never leaks NaN into a plot.
pub fn solve_with_excitation(
    stack: &Stack,
    omega: Scalar,
    excitation: Excitation,
    positions: &[Scalar],
) -> Result<Vec<FieldSample>, SolveError> {
    if !omega.is_finite() || omega <= 0.0 {
        return Err(SolveError::Config(format!(
            "angular frequency must be positive and finite, got {omega}"
        )));
    }

    let n = stack.region_count();
    let media: Vec<_> = stack.media().collect();

    let mut ks = Vec::with_capacity(n);
    let mut etas = Vec::with_capacity(n);
    for (index, medium) in media.iter().enumerate() {
        let k = medium.wavenumber(omega);
        let eta = medium.intrinsic_impedance(omega);
        if !k.is_finite() || !eta.is_finite() {
            return Err(SolveError::Degenerate(format!(
                "region {index} produced a non-finite wavenumber or impedance"
            )));
        }
        ks.push(k);
        etas.push(eta);
    }

    let mut gammas = Vec::with_capacity(n - 1);
    let mut ts = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        if (etas[i] + etas[i + 1]).norm() == 0.0 {
            return Err(SolveError::Degenerate(format!(
                "impedance sum vanishes at interface {i}"
            )));
        }
        gammas.push(reflection_coefficient(etas[i], etas[i + 1]));
        ts.push(transmission_coefficient(etas[i], etas[i + 1]));
    }

    // Forward amplitude at each region's local origin: transmission
    // coefficients crossed so far times the phase accumulated through
    // earlier slabs.
    let mut amps = vec![CScalar::new(1.0, 0.0); n];
    for r in 1..n {
        let mut a = amps[r - 1] * ts[r - 1];
        if r >= 2 {
            let d = stack.slabs()[r - 2].thickness;
            a *= cis(ks[r - 1] * d);
        }
        amps[r] = a;
    }

    let interfaces = stack.interface_positions();
    let mut samples = Vec::with_capacity(positions.len());
    for &x in positions {
        let r = stack.region_of(x, &interfaces);
        let field = if r == 0 {
            let ph = ks[0] * x + excitation.phase;
            excitation.amplitude * (cis(ph) + gammas[0] * cis(-ph))
        } else if r < n - 1 {
            let xi = x - interfaces[r - 1];
            let d = stack.slabs()[r - 1].thickness;
            amps[r] * (cis(ks[r] * xi) + gammas[r] * cis(ks[r] * (2.0 * d)) * cis(-ks[r] * xi))
        } else {
            let xi = x - interfaces[r - 1];
            amps[r] * cis(ks[r] * xi)
        };
        if !field.is_finite() {
            return Err(SolveError::Degenerate(format!(
                "field is non-finite at x = {x} m"
            )));
        }
        samples.push(FieldSample { position: x, field });
    }
    Ok(samples)
}
