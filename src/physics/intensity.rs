//! Far-field intensity of two coherent point sources.

use super::{AngleGrid, Parameters};
use ndarray::Array1;
use std::f64::consts::PI;

/// Intensities above this count as a bright fringe.
const PEAK_THRESHOLD: f64 = 0.99;

/// Normalized intensity at angle `t` (θ/π).
///
/// `I = cos²(π·d·(sin(π·t) − sin(π·θ0)))`, always within `[0, 1]`.
pub fn intensity_at(d: f64, theta0: f64, t: f64) -> f64 {
    let x = PI * d * ((PI * t).sin() - (PI * theta0).sin());
    let c = x.cos();
    c * c
}

/// Intensity over every sample of `grid`.
pub fn intensity(d: f64, theta0: f64, grid: &AngleGrid) -> Array1<f64> {
    // Incidence term is constant across the grid
    let offset = (PI * theta0).sin();
    grid.samples().mapv(|t| {
        let c = (PI * d * ((PI * t).sin() - offset)).cos();
        c * c
    })
}

/// An intensity curve together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct InterferencePattern {
    /// Parameters of the curve.
    pub params: Parameters,
    /// Angle samples (θ/π).
    pub angles: Array1<f64>,
    /// Intensity at each angle.
    pub samples: Array1<f64>,
}

impl InterferencePattern {
    /// Compute the pattern for `params` on `grid`.
    pub fn compute(params: Parameters, grid: &AngleGrid) -> Self {
        Self {
            params,
            angles: grid.samples().clone(),
            samples: intensity(params.d, params.theta0, grid),
        }
    }

    /// `(θ/π, I)` pairs in grid order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.angles
            .iter()
            .zip(self.samples.iter())
            .map(|(&t, &i)| (t, i))
            .collect()
    }

    /// Endpoints of the vertical incidence marker spanning `[y_min, y_max]`.
    pub fn marker(&self, y_min: f64, y_max: f64) -> [(f64, f64); 2] {
        [(self.params.theta0, y_min), (self.params.theta0, y_max)]
    }

    /// Points of the incidence marker, one every `spacing` in y.
    pub fn marker_dots(&self, y_min: f64, y_max: f64, spacing: f64) -> Vec<(f64, f64)> {
        if spacing <= 0.0 || y_max < y_min {
            return self.marker(y_min, y_max).to_vec();
        }
        let count = ((y_max - y_min) / spacing).floor() as usize;
        (0..=count)
            .map(|i| (self.params.theta0, y_min + i as f64 * spacing))
            .collect()
    }

    /// Number of bright fringes strictly inside the grid.
    ///
    /// A fringe is a local maximum above the peak threshold; the two end
    /// samples are never counted.
    pub fn peak_count(&self) -> usize {
        let s = &self.samples;
        if s.len() < 3 {
            return 0;
        }
        (1..s.len() - 1)
            .filter(|&i| s[i] >= PEAK_THRESHOLD && s[i] >= s[i - 1] && s[i] > s[i + 1])
            .count()
    }

    /// Intensity at the sample nearest to `t`.
    pub fn value_near(&self, t: f64) -> Option<f64> {
        self.angles
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - t).abs().total_cmp(&(*b - t).abs()))
            .map(|(i, _)| self.samples[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(d: f64, theta0: f64) -> InterferencePattern {
        InterferencePattern::compute(Parameters { d, theta0 }, &AngleGrid::standard())
    }

    #[test]
    fn intensity_stays_normalized() {
        for d in [0.0, 0.3, 1.0, 2.5, 5.0, 7.7, 10.0] {
            for theta0 in [-0.5, -0.25, -0.1, 0.0, 0.13, 0.4, 0.5] {
                let p = pattern(d, theta0);
                assert!(
                    p.samples.iter().all(|&i| (0.0..=1.0).contains(&i)),
                    "out of range at d={} theta0={}",
                    d,
                    theta0
                );
            }
        }
    }

    #[test]
    fn zero_spacing_is_uniform() {
        let p = pattern(0.0, 0.3);
        assert!(p.samples.iter().all(|&i| i == 1.0));
    }

    #[test]
    fn mirrored_angles_give_equal_intensity() {
        let grid = AngleGrid::standard();
        let forward = intensity(3.7, 0.2, &grid);
        let mirrored = intensity(3.7, -0.2, &grid);
        // t_i = -t_{n-i} for 1 <= i < n
        let n = grid.len();
        for i in 1..n {
            assert!(
                (forward[i] - mirrored[n - i]).abs() < 1e-9,
                "asymmetry at sample {}",
                i
            );
        }
    }

    #[test]
    fn intensity_is_periodic_in_path_difference() {
        // sin(π/2) = 1, so d = 1 shifts the phase by exactly π
        assert!((intensity_at(1.0, 0.0, 0.5) - intensity_at(1.0, 0.0, 0.0)).abs() < 1e-12);
        // Half-integer path difference is dark, integer is bright
        assert!(intensity_at(0.5, 0.0, 0.5) < 1e-12);
        assert!((intensity_at(1.0, 0.0, 0.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn central_fringe_follows_incidence_angle() {
        let p = pattern(5.0, 0.2);
        assert!((p.value_near(0.2).unwrap() - 1.0).abs() < 1e-9);
        assert!((intensity_at(5.0, 0.2, 0.2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn grid_and_pointwise_agree() {
        let grid = AngleGrid::standard();
        let curve = intensity(5.0, -0.1, &grid);
        for (&t, &i) in grid.samples().iter().zip(curve.iter()) {
            assert!((intensity_at(5.0, -0.1, t) - i).abs() < 1e-12);
        }
    }

    #[test]
    fn marker_sits_at_incidence_angle() {
        let p = pattern(5.0, -0.3);
        assert_eq!(p.marker(0.0, 1.1), [(-0.3, 0.0), (-0.3, 1.1)]);

        let dots = p.marker_dots(0.0, 1.0, 0.25);
        assert_eq!(dots.len(), 5);
        assert!(dots.iter().all(|&(x, _)| x == -0.3));
        assert_eq!(dots.last().map(|&(_, y)| y), Some(1.0));
    }

    #[test]
    fn points_follow_grid_order() {
        let p = pattern(5.0, 0.0);
        let points = p.points();
        assert_eq!(points.len(), 1000);
        assert_eq!(points[0].0, -0.5);
        assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn peak_count_grows_with_spacing() {
        // Bright fringes where d·sin(πt) is an integer strictly inside (-1, 1)
        assert_eq!(pattern(0.0, 0.0).peak_count(), 0);
        assert_eq!(pattern(1.0, 0.0).peak_count(), 1);
        assert_eq!(pattern(2.0, 0.0).peak_count(), 3);
        assert_eq!(pattern(5.0, 0.0).peak_count(), 9);
    }
}
