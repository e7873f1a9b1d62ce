//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`pentadiagonal_solve`]: banded LU decomposition with partial pivoting

mod banded_lu;

pub use banded_lu::{BandedLu, pentadiagonal_solve};
