//! Load vector assembly
//!
//! `f[k] = ∫ φ_k(x) g(x) dx` over the support of φ_k, for an arbitrary
//! forcing term `g`. The basis function already vanishes outside its
//! support, so the integration bounds only affect efficiency.

use crate::basis::{BasisFunction, BasisIndex};
use crate::config::AssemblyConfig;
use crate::error::Result;
use crate::mesh::Grid;
use crate::quadrature::CompositeRule;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Integration bounds of basis function `k`, from element arithmetic
///
/// Left is `(k/2 - 1)/N`, moved one element right for bumps; right is
/// `(k/2 + 1)/N`. Both are clamped to [0, 1].
pub fn load_bounds(k: usize, grid: Grid) -> (f64, f64) {
    let n = grid.n() as f64;
    let half = (k / 2) as f64;
    let shift = if k % 2 == 0 { 0.0 } else { 1.0 / n };
    let left = ((half - 1.0) / n + shift).max(0.0);
    let right = ((half + 1.0) / n).min(1.0);
    (left, right)
}

fn load_entry<F>(k: usize, grid: Grid, rule: &CompositeRule, forcing: &F) -> f64
where
    F: Fn(f64) -> f64,
{
    let basis = BasisFunction::from_index(BasisIndex::classify(k), grid);
    let (left, right) = load_bounds(k, grid);
    rule.integrate(left, right, grid.n(), |x| basis.eval(x) * forcing(x))
}

/// Assemble the load vector for a grid with `n` elements
pub fn assemble_load<F>(n: usize, forcing: F) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64 + Sync,
{
    assemble_load_with(Grid::new(n)?, forcing, &AssemblyConfig::default())
}

/// Assemble the load vector with an explicit configuration
pub fn assemble_load_with<F>(grid: Grid, forcing: F, config: &AssemblyConfig) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64 + Sync,
{
    config.validate()?;
    let rule = CompositeRule::new(config.quadrature_order);
    log::debug!(
        "Assembling load: N = {}, {}-point panels",
        grid.n(),
        rule.order
    );

    #[cfg(feature = "parallel")]
    let load = (0..grid.num_basis())
        .into_par_iter()
        .map(|k| load_entry(k, grid, &rule, &forcing))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let load = (0..grid.num_basis())
        .map(|k| load_entry(k, grid, &rule, &forcing))
        .collect();

    Ok(load)
}
