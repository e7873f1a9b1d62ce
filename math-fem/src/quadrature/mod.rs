//! Numerical quadrature for load vector integration
//!
//! Provides Gauss-Legendre rules on [-1, 1] and a composite integrator over
//! arbitrary intervals.

mod composite;
mod gauss;

pub use composite::*;
pub use gauss::*;
