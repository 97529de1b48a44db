//! Smith-chart circle geometry in the reflection-coefficient plane.

use crate::math::{CScalar, Scalar};
use crate::reflection::reflection_coefficient;

/// Normalizes an impedance to a real reference: z = Z/Z₀.
#[must_use]
pub fn normalize(z: CScalar, z0: Scalar) -> CScalar {
    z / z0
}

/// Maps a normalized impedance to the Γ plane: Γ = (z − 1)/(z + 1).
#[must_use]
pub fn impedance_to_gamma(z_normalized: CScalar) -> CScalar {
    reflection_coefficient(CScalar::new(1.0, 0.0), z_normalized)
}

/// A circle in the Γ plane, as drawn on a Smith chart.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartCircle {
    /// Circle center in the Γ plane.
    pub center: CScalar,
    /// Circle radius.
    pub radius: Scalar,
}

impl ChartCircle {
    /// Samples `n` points around the circle.
    #[must_use]
    pub fn points(&self, n: usize) -> Vec<CScalar> {
        (0..n)
            .map(|i| {
                let theta = 2.0 * std::f64::consts::PI * i as Scalar / n as Scalar;
                self.center + CScalar::from_polar(self.radius, theta)
            })
            .collect()
    }

    /// Samples the circle and keeps only points inside the unit chart
    /// (|Γ| ≤ 1); reactance circles extend past the chart edge.
    #[must_use]
    pub fn points_on_chart(&self, n: usize) -> Vec<CScalar> {
        let mut points = self.points(n);
        points.retain(|g| g.norm() <= 1.0);
        points
    }
}

/// Constant-resistance circle for normalized resistance `r` (≥ 0):
/// center (r/(1 + r), 0), radius 1/(1 + r).
#[must_use]
pub fn resistance_circle(r: Scalar) -> ChartCircle {
    ChartCircle {
        center: CScalar::new(r / (1.0 + r), 0.0),
        radius: 1.0 / (1.0 + r),
    }
}

/// Constant-reactance circle for normalized reactance `x`:
/// center (1, 1/x), radius |1/x|. Returns `None` for x = 0 (the real axis,
/// a circle of infinite radius).
#[must_use]
pub fn reactance_circle(x: Scalar) -> Option<ChartCircle> {
    if x == 0.0 {
        return None;
    }
    Some(ChartCircle {
        center: CScalar::new(1.0, 1.0 / x),
        radius: (1.0 / x).abs(),
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn matched_impedance_maps_to_origin() {
        let gamma = impedance_to_gamma(normalize(CScalar::new(50.0, 0.0), 50.0));
        assert_relative_eq!(gamma.norm(), 0.0, epsilon = 1.0e-15);
    }

    #[test]
    fn short_and_open_map_to_chart_edge() {
        let short = impedance_to_gamma(CScalar::new(0.0, 0.0));
        assert_relative_eq!(short.re, -1.0, epsilon = 1.0e-12);
        let open = impedance_to_gamma(CScalar::new(1.0e12, 0.0));
        assert_relative_eq!(open.re, 1.0, max_relative = 1.0e-9);
    }

    #[test]
    fn every_chart_circle_passes_through_the_open_point() {
        // Both families meet at Γ = 1 + 0j.
        for r in [0.0, 0.5, 1.0, 3.0] {
            let c = resistance_circle(r);
            let dist = (CScalar::new(1.0, 0.0) - c.center).norm();
            assert_relative_eq!(dist, c.radius, epsilon = 1.0e-12);
        }
        for x in [-2.0, -0.5, 0.5, 2.0] {
            let c = reactance_circle(x).expect("nonzero reactance");
            let dist = (CScalar::new(1.0, 0.0) - c.center).norm();
            assert_relative_eq!(dist, c.radius, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn zero_reactance_has_no_circle() {
        assert!(reactance_circle(0.0).is_none());
    }

    #[test]
    fn reactance_points_are_clipped_to_the_chart() {
        let c = reactance_circle(0.5).expect("nonzero reactance");
        let on_chart = c.points_on_chart(360);
        assert!(!on_chart.is_empty());
        assert!(on_chart.len() < 360);
        assert!(on_chart.iter().all(|g| g.norm() <= 1.0 + 1.0e-12));
    }

    #[test]
    fn unit_resistance_circle_touches_origin() {
        let c = resistance_circle(1.0);
        assert_relative_eq!(c.center.re - c.radius, 0.0, epsilon = 1.0e-12);
    }
}
