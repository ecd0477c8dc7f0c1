//! Kennel - registry owning every dog
//!
//! Dogs refer to each other through [`DogId`] handles resolved here, so the
//! buddy relation never forms an ownership cycle. `set_buddy` writes exactly
//! the two named dogs; a previous partner keeps pointing at its old buddy.

use crate::config::KennelConfig;
use crate::dog::Dog;
use crate::error::{ConfigError, KennelError, Result};
use crate::types::{DogId, DogSnapshot};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Registry of dogs in adoption order
#[derive(Debug, Default, Clone)]
pub struct Kennel {
    config: KennelConfig,
    dogs: IndexMap<DogId, Dog>,
}

impl Kennel {
    /// Create an empty kennel with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(KennelConfig::default())
    }

    /// Create an empty kennel carrying the given configuration
    ///
    /// The roster in `config` is not applied; use [`Kennel::from_config`] for that.
    #[must_use]
    pub fn with_config(config: KennelConfig) -> Self {
        Self {
            config,
            dogs: IndexMap::new(),
        }
    }

    /// Build a kennel from a roster
    ///
    /// Adopts every dog, celebrates its birthdays, then links buddy pairs in
    /// roster order.
    ///
    /// # Errors
    /// [`ConfigError::DuplicateName`] if two dogs share a name,
    /// [`ConfigError::UnknownBuddy`] if a pair names a dog not in the roster.
    pub fn from_config(config: &KennelConfig) -> Result<Self> {
        let mut kennel = Self::with_config(config.clone());
        let mut by_name: HashMap<&str, DogId> = HashMap::with_capacity(config.dogs.len());

        for entry in &config.dogs {
            if by_name.contains_key(entry.name.as_str()) {
                return Err(ConfigError::DuplicateName(entry.name.clone()).into());
            }
            let id = kennel.adopt(entry.name.clone(), entry.age);
            kennel.birthdays(id, entry.birthdays)?;
            by_name.insert(entry.name.as_str(), id);
        }

        for pair in &config.buddies {
            let [a, b] = &pair.pair;
            let lookup = |name: &String| {
                by_name
                    .get(name.as_str())
                    .copied()
                    .ok_or_else(|| ConfigError::UnknownBuddy(name.clone()))
            };
            let (a, b) = (lookup(a)?, lookup(b)?);
            kennel.set_buddy(a, b)?;
        }

        tracing::info!(
            "Kennel ready: {} dogs, {} buddy pairs",
            kennel.len(),
            config.buddies.len()
        );
        Ok(kennel)
    }

    /// Configuration this kennel was built with
    #[inline]
    #[must_use]
    pub fn config(&self) -> &KennelConfig {
        &self.config
    }

    /// Construct a dog and take ownership of it
    pub fn adopt(&mut self, name: impl Into<String>, age: u32) -> DogId {
        let dog = Dog::new(name, age);
        let id = DogId::new();
        tracing::debug!(%id, name = dog.name(), age = dog.age(), "Adopted dog");
        self.dogs.insert(id, dog);
        id
    }

    /// Resolve a handle
    ///
    /// # Errors
    /// [`KennelError::UnknownDog`] if the handle is not in this kennel.
    pub fn get(&self, id: DogId) -> Result<&Dog> {
        self.dogs.get(&id).ok_or(KennelError::UnknownDog(id))
    }

    fn get_mut(&mut self, id: DogId) -> Result<&mut Dog> {
        self.dogs.get_mut(&id).ok_or(KennelError::UnknownDog(id))
    }

    /// First dog with the given name, in adoption order
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<DogId> {
        self.dogs
            .iter()
            .find(|(_, dog)| dog.name() == name)
            .map(|(id, _)| *id)
    }

    /// Bark text of a dog
    ///
    /// # Errors
    /// [`KennelError::UnknownDog`] if the handle is not in this kennel.
    pub fn bark(&self, id: DogId) -> Result<&'static str> {
        Ok(self.get(id)?.bark())
    }

    /// Info line of a dog
    ///
    /// # Errors
    /// [`KennelError::UnknownDog`] if the handle is not in this kennel.
    pub fn info(&self, id: DogId) -> Result<String> {
        Ok(self.get(id)?.info())
    }

    /// Celebrate one birthday, returning the new age
    ///
    /// # Errors
    /// [`KennelError::UnknownDog`] if the handle is not in this kennel.
    pub fn birthday(&mut self, id: DogId) -> Result<u32> {
        self.birthdays(id, 1)
    }

    /// Celebrate `count` birthdays, returning the new age
    ///
    /// # Errors
    /// [`KennelError::UnknownDog`] if the handle is not in this kennel.
    pub fn birthdays(&mut self, id: DogId, count: u32) -> Result<u32> {
        let dog = self.get_mut(id)?;
        let age = dog.birthdays(count);
        if count > 0 {
            tracing::debug!(%id, name = dog.name(), age, count, "Birthday");
        }
        Ok(age)
    }

    /// Buddy handle of a dog
    ///
    /// # Errors
    /// [`KennelError::UnknownDog`] if the handle is not in this kennel.
    pub fn buddy_of(&self, id: DogId) -> Result<Option<DogId>> {
        Ok(self.get(id)?.buddy())
    }

    /// Make `id` and `other` buddies of each other
    ///
    /// Only `id` and `other` are written. A dog that was the previous buddy of
    /// either still names it afterwards. Passing the same handle twice makes
    /// the dog its own buddy.
    ///
    /// # Errors
    /// [`KennelError::UnknownDog`] if either handle is not in this kennel;
    /// nothing is changed in that case.
    pub fn set_buddy(&mut self, id: DogId, other: DogId) -> Result<()> {
        self.get(id)?;
        self.get(other)?;

        self.get_mut(id)?.set_buddy_handle(Some(other));
        self.get_mut(other)?.set_buddy_handle(Some(id));

        tracing::info!(
            "{} and {} are now buddies",
            self.get(id)?.name(),
            self.get(other)?.name()
        );
        Ok(())
    }

    /// Remove a dog from the kennel
    ///
    /// Every dog still naming it as buddy is cleared, and the returned dog has
    /// no buddy.
    ///
    /// # Errors
    /// [`KennelError::UnknownDog`] if the handle is not in this kennel.
    pub fn release(&mut self, id: DogId) -> Result<Dog> {
        let mut dog = self
            .dogs
            .shift_remove(&id)
            .ok_or(KennelError::UnknownDog(id))?;
        for (other, remaining) in &mut self.dogs {
            if remaining.buddy() == Some(id) {
                remaining.set_buddy_handle(None);
                tracing::debug!(id = %other, released = %id, "Cleared buddy");
            }
        }
        dog.set_buddy_handle(None);
        tracing::info!(%id, name = dog.name(), "Released dog");
        Ok(dog)
    }

    /// Number of dogs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.dogs.len()
    }

    /// Check if kennel is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dogs.is_empty()
    }

    /// Iterate over dogs in adoption order
    pub fn iter(&self) -> impl Iterator<Item = (DogId, &Dog)> {
        self.dogs.iter().map(|(id, dog)| (*id, dog))
    }

    /// Serializable view of every dog, in adoption order
    #[must_use]
    pub fn snapshot(&self) -> Vec<DogSnapshot> {
        self.iter()
            .map(|(id, dog)| DogSnapshot {
                id,
                name: dog.name().to_string(),
                age: dog.age(),
                buddy_name: dog
                    .buddy()
                    .and_then(|buddy| self.dogs.get(&buddy))
                    .map(|buddy| buddy.name().to_string()),
                info: dog.info(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rex_and_fido() -> (Kennel, DogId, DogId) {
        let mut kennel = Kennel::new();
        let rex = kennel.adopt("Rex", 3);
        let fido = kennel.adopt("Fido", 5);
        (kennel, rex, fido)
    }

    #[test]
    fn adopt_and_get() {
        let (kennel, rex, _) = rex_and_fido();
        assert_eq!(kennel.len(), 2);
        assert_eq!(kennel.get(rex).unwrap().name(), "Rex");
        assert_eq!(kennel.info(rex).unwrap(), "Rex is 3 year(s) old.");
        assert_eq!(kennel.bark(rex).unwrap(), "bark bark!");
    }

    #[test]
    fn set_buddy_is_symmetric() {
        let (mut kennel, rex, fido) = rex_and_fido();
        kennel.set_buddy(rex, fido).unwrap();
        assert_eq!(kennel.buddy_of(rex).unwrap(), Some(fido));
        assert_eq!(kennel.buddy_of(fido).unwrap(), Some(rex));
    }

    #[test]
    fn rebuddy_leaves_old_partner_untouched() {
        let (mut kennel, rex, fido) = rex_and_fido();
        let bella = kennel.adopt("Bella", 2);

        kennel.set_buddy(rex, fido).unwrap();
        kennel.set_buddy(rex, bella).unwrap();

        assert_eq!(kennel.buddy_of(rex).unwrap(), Some(bella));
        assert_eq!(kennel.buddy_of(bella).unwrap(), Some(rex));
        assert_eq!(kennel.buddy_of(fido).unwrap(), Some(rex));
    }

    #[test]
    fn self_buddy_is_allowed() {
        let (mut kennel, rex, fido) = rex_and_fido();
        kennel.set_buddy(rex, fido).unwrap();
        kennel.set_buddy(rex, rex).unwrap();

        assert_eq!(kennel.buddy_of(rex).unwrap(), Some(rex));
        assert_eq!(kennel.buddy_of(fido).unwrap(), Some(rex));
    }

    #[test]
    fn set_buddy_unknown_changes_nothing() {
        let (mut kennel, rex, fido) = rex_and_fido();
        kennel.set_buddy(rex, fido).unwrap();

        let ghost = DogId::new();
        let err = kennel.set_buddy(rex, ghost).unwrap_err();
        assert!(matches!(err, KennelError::UnknownDog(id) if id == ghost));
        assert_eq!(kennel.buddy_of(rex).unwrap(), Some(fido));
    }

    #[test]
    fn release_clears_back_reference() {
        let (mut kennel, rex, fido) = rex_and_fido();
        kennel.set_buddy(rex, fido).unwrap();

        let released = kennel.release(fido).unwrap();
        assert_eq!(released.name(), "Fido");
        assert!(released.buddy().is_none());
        assert_eq!(kennel.buddy_of(rex).unwrap(), None);
        assert!(kennel.get(fido).is_err());
    }

    #[test]
    fn release_clears_stale_partner_too() {
        let (mut kennel, rex, fido) = rex_and_fido();
        let bella = kennel.adopt("Bella", 2);
        kennel.set_buddy(rex, fido).unwrap();
        kennel.set_buddy(rex, bella).unwrap();

        kennel.release(rex).unwrap();
        assert_eq!(kennel.buddy_of(fido).unwrap(), None);
        assert_eq!(kennel.buddy_of(bella).unwrap(), None);
    }

    #[test]
    fn release_self_buddy() {
        let (mut kennel, rex, _) = rex_and_fido();
        kennel.set_buddy(rex, rex).unwrap();
        let released = kennel.release(rex).unwrap();
        assert!(released.buddy().is_none());
        assert_eq!(kennel.len(), 1);
    }

    #[test]
    fn birthdays_count() {
        let (mut kennel, rex, _) = rex_and_fido();
        assert_eq!(kennel.birthdays(rex, 0).unwrap(), 3);
        assert_eq!(kennel.birthday(rex).unwrap(), 4);
        assert_eq!(kennel.birthdays(rex, 6).unwrap(), 10);
    }

    #[test]
    fn birthdays_large_count_saturates() {
        let (mut kennel, rex, _) = rex_and_fido();
        assert_eq!(kennel.birthdays(rex, 2_000_000_000).unwrap(), 2_000_000_003);
        assert_eq!(kennel.birthdays(rex, u32::MAX).unwrap(), u32::MAX);
        assert_eq!(kennel.info(rex).unwrap(), format!("Rex is {} year(s) old.", u32::MAX));
    }

    #[test]
    fn empty_until_adopt() {
        let mut kennel = Kennel::new();
        assert!(kennel.is_empty());
        let rex = kennel.adopt("Rex", 3);
        assert!(!kennel.is_empty());
        kennel.release(rex).unwrap();
        assert!(kennel.is_empty());
    }

    #[test]
    fn find_by_name_first_match() {
        let (mut kennel, rex, _) = rex_and_fido();
        kennel.adopt("Rex", 9);
        assert_eq!(kennel.find_by_name("Rex"), Some(rex));
        assert_eq!(kennel.find_by_name("Nobody"), None);
    }

    #[test]
    fn snapshot_resolves_buddy_names() {
        let (mut kennel, rex, fido) = rex_and_fido();
        kennel.set_buddy(rex, fido).unwrap();
        let snapshot = kennel.snapshot();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].name, "Rex");
        assert_eq!(snapshot[0].buddy_name.as_deref(), Some("Fido"));
        assert_eq!(snapshot[1].info, "Fido is 5 year(s) old.");
    }
}
