//! Composite Gauss-Legendre integration of arbitrary scalar functions
//!
//! Used for the load vector, where the integrand is a basis function times an
//! externally supplied forcing term and cannot be integrated symbolically.

use super::gauss::{QuadraturePoint, gauss_legendre_1d};

/// Composite rule: `resolution` equal panels, each with a Gauss-Legendre rule
#[derive(Debug, Clone)]
pub struct CompositeRule {
    /// Points per panel
    pub order: usize,
    points: Vec<QuadraturePoint>,
}

impl CompositeRule {
    pub fn new(order: usize) -> Self {
        Self {
            order,
            points: gauss_legendre_1d(order),
        }
    }

    /// Integrate `g` over [left, right] split into `resolution` panels
    ///
    /// Returns 0 for an empty or reversed interval; a zero resolution is
    /// treated as a single panel.
    pub fn integrate<G>(&self, left: f64, right: f64, resolution: usize, g: G) -> f64
    where
        G: Fn(f64) -> f64,
    {
        if right <= left {
            return 0.0;
        }
        let panels = resolution.max(1);
        let width = (right - left) / panels as f64;
        let half = 0.5 * width;

        (0..panels)
            .map(|p| {
                let mid = left + (p as f64 + 0.5) * width;
                self.points
                    .iter()
                    .map(|qp| qp.weight * g(mid + half * qp.xi))
                    .sum::<f64>()
                    * half
            })
            .sum()
    }
}

impl Default for CompositeRule {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Integrate `g` over [left, right] with `resolution` three-point panels
pub fn integrate<G>(left: f64, right: f64, resolution: usize, g: G) -> f64
where
    G: Fn(f64) -> f64,
{
    CompositeRule::default().integrate(left, right, resolution, g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polynomial_exact() {
        // ∫_0^1 x^4 dx = 1/5, exact for 3-point panels
        let value = integrate(0.0, 1.0, 2, |x| x.powi(4));
        assert_relative_eq!(value, 0.2, epsilon = 1e-14);
    }

    #[test]
    fn test_smooth_function_converges() {
        let exact = 1.0 - 1.0_f64.cos();
        let coarse = integrate(0.0, 1.0, 1, f64::sin);
        let fine = integrate(0.0, 1.0, 8, f64::sin);
        assert!((fine - exact).abs() < (coarse - exact).abs());
        assert_relative_eq!(fine, exact, epsilon = 1e-10);
    }

    #[test]
    fn test_empty_interval() {
        assert_eq!(integrate(0.5, 0.5, 4, |_| 1.0), 0.0);
        assert_eq!(integrate(0.7, 0.2, 4, |_| 1.0), 0.0);
    }

    #[test]
    fn test_zero_resolution_is_single_panel() {
        let rule = CompositeRule::new(2);
        assert_relative_eq!(rule.integrate(1.0, 3.0, 0, |x| x), 4.0, epsilon = 1e-14);
    }
}
