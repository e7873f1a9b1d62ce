//! Banded matrix structures
//!
//! This module provides explicit-band storage for pentadiagonal matrices
//! produced by 1D finite element assembly with quadratic elements.

mod pentadiagonal;

pub use pentadiagonal::Pentadiagonal;
