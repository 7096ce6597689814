//! # Warehouse Items
//!
//! Entity types for the warehouse exercise: two product families stored
//! in separate [`Repository`] instances keyed by integer id.
//!
//! Both families satisfy the repository's structural constraints:
//! [`Keyed`] for identity and [`Stocked`] for quantity updates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RepoResult;
use crate::repository::{Keyed, Repository, Stocked};

// =============================================================================
// Electronic Item
// =============================================================================

/// An electronic product with a manufacturer warranty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    pub id: u32,
    pub name: String,
    pub quantity: i64,
    pub brand: String,
    pub warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(id: u32, name: &str, quantity: i64, brand: &str, warranty_months: u32) -> Self {
        ElectronicItem {
            id,
            name: name.to_string(),
            quantity,
            brand: brand.to_string(),
            warranty_months,
        }
    }
}

impl Keyed<u32> for ElectronicItem {
    fn key(&self) -> u32 {
        self.id
    }
}

impl Stocked for ElectronicItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

// =============================================================================
// Grocery Item
// =============================================================================

/// A perishable product with an expiry date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i64,
    pub expires_on: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: u32, name: &str, quantity: i64, expires_on: NaiveDate) -> Self {
        GroceryItem {
            id,
            name: name.to_string(),
            quantity,
            expires_on,
        }
    }
}

impl Keyed<u32> for GroceryItem {
    fn key(&self) -> u32 {
        self.id
    }
}

impl Stocked for GroceryItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

// =============================================================================
// Stock Helpers
// =============================================================================

/// Raises an item's stock by `delta`, reading the current quantity first.
///
/// Composes `get` + `update_quantity`, so it fails with `NotFound` for an
/// absent id and leaves the store unchanged on any failure.
pub fn increase_stock<T>(repo: &mut Repository<u32, T>, id: u32, delta: i64) -> RepoResult<i64>
where
    T: Keyed<u32> + Stocked,
{
    let current = repo.get(&id)?.quantity();
    let updated = current + delta;
    repo.update_quantity(&id, updated)?;
    Ok(updated)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepoError;

    fn electronics() -> Repository<u32, ElectronicItem> {
        let mut repo = Repository::new();
        repo.add(ElectronicItem::new(1, "Laptop", 5, "Dell", 24))
            .unwrap();
        repo.add(ElectronicItem::new(2, "Smartphone", 10, "Samsung", 12))
            .unwrap();
        repo
    }

    #[test]
    fn test_increase_stock() {
        let mut repo = electronics();
        assert_eq!(increase_stock(&mut repo, 1, 3).unwrap(), 8);
        assert_eq!(repo.get(&1).unwrap().quantity, 8);
    }

    #[test]
    fn test_increase_stock_absent_id() {
        let mut repo = electronics();
        assert!(matches!(
            increase_stock(&mut repo, 99, 3),
            Err(RepoError::NotFound { .. })
        ));
    }

    #[test]
    fn test_decrease_below_zero_rejected() {
        let mut repo = electronics();
        let err = increase_stock(&mut repo, 1, -10).unwrap_err();
        assert_eq!(err, RepoError::InvalidQuantity { quantity: -5 });
        assert_eq!(repo.get(&1).unwrap().quantity, 5);
    }

    #[test]
    fn test_grocery_repository_roundtrip() {
        let mut repo = Repository::new();
        let expiry = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        repo.add(GroceryItem::new(1, "Rice", 50, expiry)).unwrap();

        let stored = repo.get(&1).unwrap();
        assert_eq!(stored.name, "Rice");
        assert_eq!(stored.expires_on, expiry);
    }
}
