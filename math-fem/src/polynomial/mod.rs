//! Exact polynomial algebra for inner products
//!
//! Provides dense polynomials and their compactly supported counterparts,
//! so stiffness and mass entries are integrated algebraically instead of
//! by quadrature.

mod dense;
mod supported;

pub use dense::*;
pub use supported::*;
