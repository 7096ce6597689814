//! # Keyed Entity Repository
//!
//! An in-memory store mapping a unique key to an entity.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Invariants                            │
//! │                                                                     │
//! │  add(item)                duplicate key  → DuplicateKey, unchanged  │
//! │  get / get_mut / remove   absent key     → NotFound                 │
//! │  update_quantity(id, q)   q < 0          → InvalidQuantity, the     │
//! │                                            stored quantity survives │
//! │                                                                     │
//! │  At no point do two entities share a key within one instance.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Notes
//! - Generic over the key type: the warehouse exercise keys by `u32`,
//!   the healthcare exercise by `String`.
//! - Backed by a `BTreeMap`, so iteration order is deterministic and
//!   stable for a given sequence of operations. Callers must not rely
//!   on any particular order beyond that.
//! - Single-owner, single-threaded access. No interior mutability.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::error::{RepoError, RepoResult};

// =============================================================================
// Entity Traits
// =============================================================================

/// The minimal structural constraint on a stored entity: it can name
/// its own key.
pub trait Keyed<K> {
    /// Returns the entity's unique key.
    fn key(&self) -> K;
}

/// Entities carrying a mutable, non-negative stock quantity.
///
/// Only required by [`Repository::update_quantity`]; entities without a
/// quantity-like field (patients, prescriptions) simply don't implement it.
pub trait Stocked {
    /// Current quantity on hand.
    fn quantity(&self) -> i64;

    /// Overwrites the quantity in place.
    fn set_quantity(&mut self, quantity: i64);
}

// =============================================================================
// Repository
// =============================================================================

/// An in-memory keyed store of entities.
///
/// ## Usage
/// ```rust
/// use tally_core::repository::{Keyed, Repository};
///
/// #[derive(Clone)]
/// struct Widget {
///     id: u32,
///     name: String,
/// }
///
/// impl Keyed<u32> for Widget {
///     fn key(&self) -> u32 {
///         self.id
///     }
/// }
///
/// let mut repo = Repository::new();
/// repo.add(Widget { id: 1, name: "gear".into() }).unwrap();
/// assert_eq!(repo.get(&1).unwrap().name, "gear");
/// ```
#[derive(Debug, Clone)]
pub struct Repository<K, T> {
    items: BTreeMap<K, T>,
}

impl<K, T> Repository<K, T>
where
    K: Ord + Display,
    T: Keyed<K>,
{
    /// Creates an empty repository.
    pub fn new() -> Self {
        Repository {
            items: BTreeMap::new(),
        }
    }

    /// Inserts an entity under its own key.
    ///
    /// Fails with [`RepoError::DuplicateKey`] when an entity with the
    /// same key is already stored; the store is untouched in that case.
    pub fn add(&mut self, item: T) -> RepoResult<()> {
        let key = item.key();
        if self.items.contains_key(&key) {
            return Err(RepoError::duplicate(&key));
        }
        self.items.insert(key, item);
        Ok(())
    }

    /// Returns the stored entity for a key.
    pub fn get(&self, key: &K) -> RepoResult<&T> {
        self.items.get(key).ok_or_else(|| RepoError::not_found(key))
    }

    /// Returns the stored entity for mutation in place.
    ///
    /// This is the reference-semantics access path: changes through the
    /// returned reference are reflected in the store.
    pub fn get_mut(&mut self, key: &K) -> RepoResult<&mut T> {
        self.items
            .get_mut(key)
            .ok_or_else(|| RepoError::not_found(key))
    }

    /// Removes and returns the entity for a key.
    pub fn remove(&mut self, key: &K) -> RepoResult<T> {
        self.items
            .remove(key)
            .ok_or_else(|| RepoError::not_found(key))
    }

    /// Checks whether a key is present.
    pub fn contains(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over stored entities without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }
}

impl<K, T> Repository<K, T>
where
    K: Ord + Display,
    T: Keyed<K> + Clone,
{
    /// Returns a snapshot copy of all stored entities.
    ///
    /// Order follows the underlying map and is stable for a given
    /// sequence of operations; it carries no further meaning.
    pub fn all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }
}

impl<K, T> Repository<K, T>
where
    K: Ord + Display,
    T: Keyed<K> + Stocked,
{
    /// Overwrites an entity's quantity.
    ///
    /// The quantity check runs before the existence check, so a negative
    /// quantity on an absent key reports [`RepoError::InvalidQuantity`].
    pub fn update_quantity(&mut self, key: &K, quantity: i64) -> RepoResult<()> {
        if quantity < 0 {
            return Err(RepoError::InvalidQuantity { quantity });
        }
        self.get_mut(key)?.set_quantity(quantity);
        Ok(())
    }
}

impl<K, T> Default for Repository<K, T>
where
    K: Ord + Display,
    T: Keyed<K>,
{
    fn default() -> Self {
        Repository::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Crate {
        id: u32,
        name: String,
        quantity: i64,
    }

    impl Crate {
        fn new(id: u32, name: &str, quantity: i64) -> Self {
            Crate {
                id,
                name: name.to_string(),
                quantity,
            }
        }
    }

    impl Keyed<u32> for Crate {
        fn key(&self) -> u32 {
            self.id
        }
    }

    impl Stocked for Crate {
        fn quantity(&self) -> i64 {
            self.quantity
        }

        fn set_quantity(&mut self, quantity: i64) {
            self.quantity = quantity;
        }
    }

    fn seeded() -> Repository<u32, Crate> {
        let mut repo = Repository::new();
        repo.add(Crate::new(1, "bolts", 40)).unwrap();
        repo.add(Crate::new(2, "nuts", 25)).unwrap();
        repo
    }

    #[test]
    fn test_add_then_get_returns_entity_unchanged() {
        let repo = seeded();
        assert_eq!(repo.get(&1).unwrap(), &Crate::new(1, "bolts", 40));
    }

    #[test]
    fn test_add_duplicate_rejected_and_store_unchanged() {
        let mut repo = seeded();
        let err = repo.add(Crate::new(1, "washers", 99)).unwrap_err();
        assert_eq!(
            err,
            RepoError::DuplicateKey {
                key: "1".to_string()
            }
        );
        // The original entity survives.
        assert_eq!(repo.get(&1).unwrap().name, "bolts");
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_remove_then_get_is_not_found() {
        let mut repo = seeded();
        let removed = repo.remove(&2).unwrap();
        assert_eq!(removed.name, "nuts");
        assert_eq!(
            repo.get(&2).unwrap_err(),
            RepoError::NotFound {
                key: "2".to_string()
            }
        );
    }

    #[test]
    fn test_remove_absent_is_not_found() {
        let mut repo = seeded();
        assert!(matches!(
            repo.remove(&99),
            Err(RepoError::NotFound { .. })
        ));
    }

    #[test]
    fn test_update_quantity_in_place() {
        let mut repo = seeded();
        repo.update_quantity(&1, 55).unwrap();
        assert_eq!(repo.get(&1).unwrap().quantity, 55);
    }

    #[test]
    fn test_negative_quantity_rejected_and_value_unchanged() {
        let mut repo = seeded();
        let err = repo.update_quantity(&1, -5).unwrap_err();
        assert_eq!(err, RepoError::InvalidQuantity { quantity: -5 });
        assert_eq!(repo.get(&1).unwrap().quantity, 40);
    }

    #[test]
    fn test_negative_quantity_checked_before_existence() {
        let mut repo = seeded();
        assert_eq!(
            repo.update_quantity(&99, -1).unwrap_err(),
            RepoError::InvalidQuantity { quantity: -1 }
        );
    }

    #[test]
    fn test_get_mut_mutation_is_reflected_in_store() {
        let mut repo = seeded();
        repo.get_mut(&1).unwrap().quantity += 10;
        assert_eq!(repo.get(&1).unwrap().quantity, 50);
    }

    #[test]
    fn test_keys_stay_unique_across_add_remove_cycles() {
        let mut repo = seeded();
        repo.remove(&1).unwrap();
        repo.add(Crate::new(1, "bolts v2", 7)).unwrap();
        assert!(repo.add(Crate::new(1, "bolts v3", 8)).is_err());

        let snapshot = repo.all();
        assert_eq!(snapshot.len(), repo.len());
        let mut ids: Vec<u32> = snapshot.iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), snapshot.len());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut repo = seeded();
        let snapshot = repo.all();
        repo.update_quantity(&1, 0).unwrap();
        // Snapshot taken before the update is unaffected.
        assert_eq!(snapshot[0].quantity, 40);
    }

    #[test]
    fn test_string_keys() {
        #[derive(Clone)]
        struct Tag {
            code: String,
        }

        impl Keyed<String> for Tag {
            fn key(&self) -> String {
                self.code.clone()
            }
        }

        let mut repo = Repository::new();
        repo.add(Tag {
            code: "A1".to_string(),
        })
        .unwrap();
        assert!(repo.contains(&"A1".to_string()));
        assert!(matches!(
            repo.get(&"B2".to_string()),
            Err(RepoError::NotFound { .. })
        ));
    }
}
