//! Finite element system assembly
//!
//! Assembles the pentadiagonal Galerkin matrix (exact polynomial integrals)
//! and the load vector (numerical integration against a forcing term).

mod bands;
mod load;

pub use bands::*;
pub use load::*;
pub use solvers::Pentadiagonal;
