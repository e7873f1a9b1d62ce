//! Boundary condition handling for the 1D problem
//!
//! The assembled system encodes `u(0) + u'(0) = 0` at the left end and
//! `u(1) = 0` at the right end by overwriting the corresponding rows.

mod stamp;

pub use stamp::*;
