//! Grid on the unit interval
//!
//! The 1D problem lives on [0, 1] partitioned into N equal elements.

mod grid;

pub use grid::*;
