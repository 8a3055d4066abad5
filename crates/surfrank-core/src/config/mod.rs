//! Configuration management

use crate::error::{Result, SurfRankError};
use crate::rank::{
    check_damping, IterativeSolver, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES,
    DEFAULT_TOLERANCE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ranking parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Probability of following a link
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Random-surfer steps for sampling
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Convergence tolerance for iteration
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Round cap for iteration (null disables the cap)
    #[serde(default = "default_max_iterations")]
    pub max_iterations: Option<usize>,

    /// Seed for the sampler; unseeded runs draw from OS entropy
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            seed: default_seed(),
        }
    }
}

fn default_damping() -> f64 {
    std::env::var("SURFRANK_DAMPING")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DAMPING)
}

fn default_samples() -> usize {
    std::env::var("SURFRANK_SAMPLES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SAMPLES)
}

fn default_seed() -> Option<u64> {
    std::env::var("SURFRANK_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> Option<usize> {
    Some(DEFAULT_MAX_ITERATIONS)
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(SurfRankError::invalid("samples must be at least 1"));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(SurfRankError::invalid(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == Some(0) {
            return Err(SurfRankError::invalid("max_iterations must be at least 1"));
        }
        Ok(())
    }

    /// Iterative solver configured from these parameters
    pub fn solver(&self) -> IterativeSolver {
        IterativeSolver::new()
            .with_damping(self.damping)
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations)
    }
}
