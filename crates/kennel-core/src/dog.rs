//! Dog - the record at the heart of the kennel
//!
//! A [`Dog`] carries a name, an age and an optional buddy handle. All of its
//! operations are total: nothing here validates input or fails.

use crate::types::DogId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The sound every dog makes
pub const BARK: &str = "bark bark!";

/// A single dog
///
/// # Example
/// ```
/// use kennel_core::Dog;
///
/// let mut rex = Dog::new("Rex", 3);
/// rex.birthday();
/// assert_eq!(rex.info(), "Rex is 4 year(s) old.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    name: String,
    age: u32,
    buddy: Option<DogId>,
}

impl Dog {
    /// Create a dog with the given name and age, stored verbatim
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            buddy: None,
        }
    }

    /// Name as given at construction
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current age in years
    #[inline]
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Handle of this dog's buddy, if any
    #[inline]
    #[must_use]
    pub fn buddy(&self) -> Option<DogId> {
        self.buddy
    }

    /// Always [`BARK`], whatever the dog's state
    #[inline]
    #[must_use]
    pub fn bark(&self) -> &'static str {
        BARK
    }

    /// `"<name> is <age> year(s) old."`
    #[must_use]
    pub fn info(&self) -> String {
        self.to_string()
    }

    /// Add one year to the age and return the new age
    ///
    /// Saturates at `u32::MAX`; the age never decreases.
    pub fn birthday(&mut self) -> u32 {
        self.birthdays(1)
    }

    /// Add `count` years at once and return the new age
    ///
    /// Same result as `count` calls to [`Dog::birthday`], saturating at `u32::MAX`.
    pub fn birthdays(&mut self, count: u32) -> u32 {
        self.age = self.age.saturating_add(count);
        self.age
    }

    /// Link only this side of a buddy relation.
    ///
    /// The symmetric operation lives on [`Kennel::set_buddy`](crate::Kennel::set_buddy),
    /// which owns both dogs.
    pub(crate) fn set_buddy_handle(&mut self, buddy: Option<DogId>) {
        self.buddy = buddy;
    }
}

impl Display for Dog {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {} year(s) old.", self.name, self.age)
    }
}
