//! Sample-grid construction and projections of complex output.

use num_complex::Complex;

use crate::layered::FieldSample;
use crate::math::Scalar;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop`.
/// Requires start > 0 and stop > 0.
#[must_use]
pub fn logspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start > 0.0 && stop > 0.0);
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let log_start = start.log10();
            let log_stop = stop.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}

/// Real part of a complex sequence.
#[must_use]
pub fn real_part(values: impl IntoIterator<Item = Complex<Scalar>>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.re).collect()
}

/// Magnitude of a complex sequence.
#[must_use]
pub fn mag(values: impl IntoIterator<Item = Complex<Scalar>>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.norm()).collect()
}

/// Magnitude in dB (20·log10(|x|)), clamping very small values.
#[must_use]
pub fn mag_db(values: impl IntoIterator<Item = Complex<Scalar>>) -> Vec<Scalar> {
    const MIN: Scalar = 1e-300;
    values
        .into_iter()
        .map(|v| 20.0 * (v.norm().max(MIN)).log10())
        .collect()
}

/// Phase in radians of a complex sequence.
#[must_use]
pub fn phase_rad(values: impl IntoIterator<Item = Complex<Scalar>>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.arg()).collect()
}

/// Caller-selected scalar view of a solved field.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Re{E}, the usual plotted trace.
    Real,
    /// |E|, for envelope displays.
    Magnitude,
    /// 20·log10(|E|).
    MagnitudeDb,
    /// arg(E) in radians.
    PhaseRad,
}

impl Projection {
    /// Applies the projection to one complex value.
    #[must_use]
    pub fn apply(&self, value: Complex<Scalar>) -> Scalar {
        match self {
            Self::Real => value.re,
            Self::Magnitude => value.norm(),
            Self::MagnitudeDb => 20.0 * value.norm().max(1e-300).log10(),
            Self::PhaseRad => value.arg(),
        }
    }
}

/// Projects solved samples to (position, scalar) pairs for plotting.
#[must_use]
pub fn project(samples: &[FieldSample], projection: Projection) -> Vec<(Scalar, Scalar)> {
    samples
        .iter()
        .map(|s| (s.position, projection.apply(s.field)))
        .collect()
}
