//! Quadratic hat/bump basis on the unit interval
//!
//! Every basis function exists in two equivalent forms: an evaluable
//! function with compact support (used against arbitrary forcing terms) and
//! an exact supported polynomial (used for stiffness and mass entries).

mod closed_form;
mod evaluable;
mod index;

pub use closed_form::*;
pub use evaluable::*;
pub use index::*;
