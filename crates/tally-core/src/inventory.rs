//! # Inventory Journal Entities
//!
//! The entity shape persisted by the inventory exercise.
//!
//! ## JSON Shape (pinned)
//! The journal file is a pretty-printed JSON array of objects with
//! PascalCase field names:
//! ```json
//! [
//!   {
//!     "Id": 1,
//!     "Name": "Hammer",
//!     "Quantity": 10,
//!     "DateAdded": "2026-08-30T09:15:00Z"
//!   }
//! ]
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repository::Keyed;

/// A tool or part tracked by the file-backed inventory journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i64,
    pub date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(id: u32, name: &str, quantity: i64, date_added: DateTime<Utc>) -> Self {
        InventoryItem {
            id,
            name: name.to_string(),
            quantity,
            date_added,
        }
    }
}

impl Keyed<u32> for InventoryItem {
    fn key(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names_are_pascal_case() {
        let item = InventoryItem::new(1, "Hammer", 10, Utc::now());
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"Id\":1"));
        assert!(json.contains("\"Name\":\"Hammer\""));
        assert!(json.contains("\"Quantity\":10"));
        assert!(json.contains("\"DateAdded\""));
    }

    #[test]
    fn test_items_store_in_an_integer_keyed_repository() {
        use crate::repository::Repository;

        let mut repo = Repository::new();
        repo.add(InventoryItem::new(1, "Hammer", 10, Utc::now()))
            .unwrap();
        assert!(repo.add(InventoryItem::new(1, "Mallet", 2, Utc::now())).is_err());
        assert_eq!(repo.get(&1).unwrap().name, "Hammer");
    }
}
