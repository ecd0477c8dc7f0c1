//! Kennel Core
//!
//! Dogs with a name, an age and a buddy, owned by a [`Kennel`].
//!
//! # Core Concepts
//!
//! - [`Dog`]: the record; bark, info line, birthday
//! - [`DogId`]: non-owning handle to a dog in a kennel
//! - [`Kennel`]: registry that owns dogs and links buddies in both directions
//! - [`KennelConfig`]: roster of dogs and buddy pairs, loaded from TOML
//!
//! # Example
//!
//! ```
//! use kennel_core::Kennel;
//!
//! let mut kennel = Kennel::new();
//! let rex = kennel.adopt("Rex", 3);
//! let fido = kennel.adopt("Fido", 5);
//!
//! kennel.set_buddy(rex, fido)?;
//! assert_eq!(kennel.buddy_of(fido)?, Some(rex));
//!
//! kennel.birthday(rex)?;
//! assert_eq!(kennel.info(rex)?, "Rex is 4 year(s) old.");
//! # Ok::<(), kennel_core::KennelError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod dog;
pub mod error;
pub mod kennel;
pub mod types;

// Re-exports
pub use config::{BuddyPair, DogEntry, KennelConfig, DEFAULT_LOG_FILTER};
pub use dog::{Dog, BARK};
pub use error::{ConfigError, KennelError, Result};
pub use kennel::Kennel;
pub use types::{DogId, DogSnapshot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
