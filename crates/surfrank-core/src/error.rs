//! Error types for surfrank

use thiserror::Error;

/// Result type alias using SurfRankError
pub type Result<T> = std::result::Result<T, SurfRankError>;

/// Error type alias for convenience
pub type Error = SurfRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for surfrank
#[derive(Debug, Error)]
pub enum SurfRankError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Iteration did not converge after {iterations} rounds (last max change {max_change:.6})")]
    NotConverged { iterations: usize, max_change: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SurfRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PageNotFound(_) => exit_codes::NOT_FOUND,
            Self::InvalidArgument(_) | Self::GlobPattern(_) | Self::Yaml(_) => {
                exit_codes::INVALID_INPUT
            }
            _ => exit_codes::GENERAL_ERROR,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            SurfRankError::invalid("damping").exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(
            SurfRankError::PageNotFound("a.html".into()).exit_code(),
            exit_codes::NOT_FOUND
        );
        let err = SurfRankError::NotConverged {
            iterations: 3,
            max_change: 0.5,
        };
        assert_eq!(err.exit_code(), exit_codes::GENERAL_ERROR);
        assert!(err.to_string().contains("3 rounds"));
    }
}
