//! JSON configuration for band and load assembly

use crate::error::{FemError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Scaling applied to the two exact integrals of a band entry
///
/// `stiffness` multiplies the derivative-product term (the "weighted"
/// integral), `mass` multiplies the value-product term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Factor on ∫ φ_k' φ_l'
    #[serde(default = "default_coefficient")]
    pub stiffness: f64,
    /// Factor on ∫ φ_k φ_l
    #[serde(default = "default_coefficient")]
    pub mass: f64,
}

fn default_coefficient() -> f64 {
    1.0
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            stiffness: 1.0,
            mass: 1.0,
        }
    }
}

impl Coefficients {
    pub fn new(stiffness: f64, mass: f64) -> Self {
        Self { stiffness, mass }
    }

    /// Factor selected by the integration flag
    #[inline]
    pub fn select(&self, weighted: bool) -> f64 {
        if weighted { self.stiffness } else { self.mass }
    }
}

/// Assembly configuration loaded from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyConfig {
    /// Stiffness/mass scaling
    #[serde(default)]
    pub coefficients: Coefficients,
    /// Gauss-Legendre points per panel for the load integrator (1..=5)
    #[serde(default = "default_quadrature_order")]
    pub quadrature_order: usize,
}

fn default_quadrature_order() -> usize {
    3
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            coefficients: Coefficients::default(),
            quadrature_order: default_quadrature_order(),
        }
    }
}

impl AssemblyConfig {
    /// Check the configuration before any assembly starts
    pub fn validate(&self) -> Result<()> {
        let Coefficients { stiffness, mass } = self.coefficients;
        if !stiffness.is_finite() || !mass.is_finite() {
            return Err(FemError::Config(format!(
                "coefficients must be finite (stiffness = {}, mass = {})",
                stiffness, mass
            )));
        }
        if !(1..=5).contains(&self.quadrature_order) {
            return Err(FemError::Config(format!(
                "quadrature_order must be in 1..=5, got {}",
                self.quadrature_order
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AssemblyConfig = serde_json::from_str(json)
            .map_err(|e| FemError::Config(format!("Failed to parse JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FemError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_json(&contents)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| FemError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, json)
            .map_err(|e| FemError::Config(format!("Failed to write config file: {}", e)))?;
        Ok(())
    }
}
