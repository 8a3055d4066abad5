//! CLI command handlers

pub mod links;
pub mod rank;

use crate::app::RankParams;
use surfrank_core::Config;

/// Apply command-line overrides on top of the loaded config
pub fn resolve_config(params: &RankParams, base: &Config) -> surfrank_core::Result<Config> {
    let mut config = base.clone();

    if let Some(damping) = params.damping {
        config.damping = damping;
    }
    if let Some(samples) = params.samples {
        config.samples = samples;
    }
    if let Some(seed) = params.seed {
        config.seed = Some(seed);
    }
    if let Some(tolerance) = params.tolerance {
        config.tolerance = tolerance;
    }
    if params.no_max_iterations {
        config.max_iterations = None;
    } else if let Some(max) = params.max_iterations {
        config.max_iterations = Some(max);
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            damping: 0.85,
            samples: 10_000,
            tolerance: 0.001,
            max_iterations: Some(100),
            seed: None,
        }
    }

    #[test]
    fn test_overrides_apply() {
        let params = RankParams {
            damping: Some(0.5),
            seed: Some(3),
            no_max_iterations: true,
            ..RankParams::default()
        };
        let config = resolve_config(&params, &base()).unwrap();

        assert_eq!(config.damping, 0.5);
        assert_eq!(config.samples, 10_000);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.max_iterations, None);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let params = RankParams {
            samples: Some(0),
            ..RankParams::default()
        };
        assert!(resolve_config(&params, &base()).is_err());
    }
}
