//! Roster configuration
//!
//! A roster lists the dogs to adopt and the buddy pairs to link, in TOML:
//!
//! ```toml
//! log_filter = "debug"
//!
//! [[dogs]]
//! name = "Rex"
//! age = 3
//! birthdays = 1
//!
//! [[buddies]]
//! pair = ["Rex", "Fido"]
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default tracing filter when neither the roster nor the environment sets one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Kennel configuration, usually loaded from a roster file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KennelConfig {
    /// Tracing filter directive
    pub log_filter: String,
    /// Dogs to adopt, in order
    pub dogs: Vec<DogEntry>,
    /// Buddy pairs to link, applied after every dog is adopted
    pub buddies: Vec<BuddyPair>,
}

/// One dog in a roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DogEntry {
    /// Dog name, unique within the roster
    pub name: String,
    /// Age at adoption
    pub age: u32,
    /// Birthdays to celebrate right after adoption
    #[serde(default)]
    pub birthdays: u32,
}

/// Two dog names to link as buddies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuddyPair {
    /// Names of the two dogs
    pub pair: [String; 2],
}

impl KennelConfig {
    /// Create empty configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster used by the walkthrough: Rex and Fido, buddies
    #[must_use]
    pub fn demo() -> Self {
        Self::new()
            .with_dog("Rex", 3)
            .with_dog("Fido", 5)
            .with_buddies("Rex", "Fido")
    }

    /// Parse a roster from TOML text
    ///
    /// # Errors
    /// [`ConfigError::Parse`] if the text is not valid TOML or does not match
    /// the roster schema.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a roster file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
    /// if its contents are not a valid roster.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded roster from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// With one more dog
    #[must_use]
    pub fn with_dog(mut self, name: impl Into<String>, age: u32) -> Self {
        self.dogs.push(DogEntry {
            name: name.into(),
            age,
            birthdays: 0,
        });
        self
    }

    /// With one more buddy pair
    #[must_use]
    pub fn with_buddies(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.buddies.push(BuddyPair {
            pair: [a.into(), b.into()],
        });
        self
    }

    /// With tracing filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}

impl Default for KennelConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            dogs: Vec::new(),
            buddies: Vec::new(),
        }
    }
}
