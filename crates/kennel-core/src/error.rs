//! Error types for the kennel
//!
//! Dog operations themselves never fail. Errors come from:
//! - Resolving a handle that is not (or no longer) in the kennel
//! - Loading a roster file

use crate::types::DogId;
use std::path::PathBuf;

/// Result alias for kennel operations
pub type Result<T, E = KennelError> = std::result::Result<T, E>;

/// Main kennel error type
#[derive(Debug, thiserror::Error)]
pub enum KennelError {
    /// Handle does not resolve to a dog
    #[error("unknown dog: {0}")]
    UnknownDog(DogId),

    /// Roster could not be loaded or applied
    #[error("roster error: {0}")]
    Config(#[from] ConfigError),
}

impl KennelError {
    /// Check whether the caller can carry on with the same kennel
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::UnknownDog(_) => true,
            Self::Config(_) => false,
        }
    }
}

/// Roster loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Roster file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Roster is not valid TOML or does not match the schema
    #[error("invalid roster: {0}")]
    Parse(#[from] toml::de::Error),

    /// A buddy pair names a dog missing from the roster
    #[error("buddy pair names unknown dog: {0}")]
    UnknownBuddy(String),

    /// Two roster entries share a name
    #[error("duplicate dog name in roster: {0}")]
    DuplicateName(String),
}
