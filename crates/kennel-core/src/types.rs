//! Identifier and snapshot types shared across the kennel.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Handle to a dog owned by a [`Kennel`](crate::Kennel)
///
/// Handles are non-owning: holding one does not keep the dog alive, and a
/// handle to a released dog resolves to
/// [`KennelError::UnknownDog`](crate::KennelError::UnknownDog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DogId(pub Uuid);

impl DogId {
    /// Generate a fresh random handle
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dog-{}", self.0.simple())
    }
}

/// Serializable view of one dog, with the buddy resolved to a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogSnapshot {
    /// Handle of the dog
    pub id: DogId,
    /// Name as given at adoption
    pub name: String,
    /// Current age in years
    pub age: u32,
    /// Name of the buddy, if one is set
    pub buddy_name: Option<String>,
    /// Info line, `"<name> is <age> year(s) old."`
    pub info: String,
}
