//! Gauss-Legendre quadrature points and weights on [-1, 1]

/// A single quadrature point with weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraturePoint {
    /// Reference coordinate in [-1, 1]
    pub xi: f64,
    /// Integration weight
    pub weight: f64,
}

impl QuadraturePoint {
    pub fn new(xi: f64, weight: f64) -> Self {
        Self { xi, weight }
    }
}

/// 1D Gauss-Legendre rule with `order` points, exact up to degree 2*order - 1
pub fn gauss_legendre_1d(order: usize) -> Vec<QuadraturePoint> {
    match order {
        0 | 1 => vec![QuadraturePoint::new(0.0, 2.0)],
        2 => {
            let x = 1.0 / 3.0_f64.sqrt();
            vec![QuadraturePoint::new(-x, 1.0), QuadraturePoint::new(x, 1.0)]
        }
        3 => {
            let x = (3.0 / 5.0_f64).sqrt();
            vec![
                QuadraturePoint::new(-x, 5.0 / 9.0),
                QuadraturePoint::new(0.0, 8.0 / 9.0),
                QuadraturePoint::new(x, 5.0 / 9.0),
            ]
        }
        4 => {
            let a = (3.0 / 7.0 - 2.0 / 7.0 * (6.0 / 5.0_f64).sqrt()).sqrt();
            let b = (3.0 / 7.0 + 2.0 / 7.0 * (6.0 / 5.0_f64).sqrt()).sqrt();
            let wa = (18.0 + 30.0_f64.sqrt()) / 36.0;
            let wb = (18.0 - 30.0_f64.sqrt()) / 36.0;
            vec![
                QuadraturePoint::new(-b, wb),
                QuadraturePoint::new(-a, wa),
                QuadraturePoint::new(a, wa),
                QuadraturePoint::new(b, wb),
            ]
        }
        5 => {
            let a = (5.0 - 2.0 * (10.0 / 7.0_f64).sqrt()).sqrt() / 3.0;
            let b = (5.0 + 2.0 * (10.0 / 7.0_f64).sqrt()).sqrt() / 3.0;
            let wa = (322.0 + 13.0 * 70.0_f64.sqrt()) / 900.0;
            let wb = (322.0 - 13.0 * 70.0_f64.sqrt()) / 900.0;
            vec![
                QuadraturePoint::new(-b, wb),
                QuadraturePoint::new(-a, wa),
                QuadraturePoint::new(0.0, 128.0 / 225.0),
                QuadraturePoint::new(a, wa),
                QuadraturePoint::new(b, wb),
            ]
        }
        _ => {
            log::warn!("Gauss-Legendre order {} not tabulated, using 5", order);
            gauss_legendre_1d(5)
        }
    }
}
