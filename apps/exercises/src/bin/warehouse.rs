//! # Warehouse Exercise
//!
//! Seeds two integer-keyed repositories (electronics and groceries),
//! prints both, then walks the failure cases: a duplicate add, a remove
//! of an absent id and a negative quantity update. Every rejection is a
//! warning; the final inventory is printed afterwards.

use chrono::{Duration, Utc};
use tracing::{info, warn};

use tally_core::repository::{Keyed, Repository};
use tally_core::warehouse::{increase_stock, ElectronicItem, GroceryItem};

fn seed() -> Result<
    (Repository<u32, ElectronicItem>, Repository<u32, GroceryItem>),
    Box<dyn std::error::Error>,
> {
    let mut electronics = Repository::new();
    electronics.add(ElectronicItem::new(1, "Laptop", 5, "Dell", 24))?;
    electronics.add(ElectronicItem::new(2, "Smartphone", 10, "Samsung", 12))?;
    electronics.add(ElectronicItem::new(3, "TV", 3, "LG", 36))?;

    let today = Utc::now().date_naive();
    let mut groceries = Repository::new();
    groceries.add(GroceryItem::new(1, "Rice", 50, today + Duration::days(365)))?;
    groceries.add(GroceryItem::new(2, "Milk", 20, today + Duration::days(7)))?;
    groceries.add(GroceryItem::new(3, "Bread", 15, today + Duration::days(2)))?;

    Ok((electronics, groceries))
}

fn show<T>(title: &str, repo: &Repository<u32, T>, line: impl Fn(&T) -> String)
where
    T: Keyed<u32>,
{
    println!("\n{title}:");
    for item in repo.iter() {
        println!("{}", line(item));
    }
}

fn show_inventory(
    electronics: &Repository<u32, ElectronicItem>,
    groceries: &Repository<u32, GroceryItem>,
) {
    show("Electronics", electronics, |item| {
        format!(
            "ID: {}, Name: {}, Quantity: {}, Brand: {}, Warranty: {} months",
            item.id, item.name, item.quantity, item.brand, item.warranty_months
        )
    });
    show("Groceries", groceries, |item| {
        format!(
            "ID: {}, Name: {}, Quantity: {}, Expires: {}",
            item.id, item.name, item.quantity, item.expires_on
        )
    });
}

fn demo_operations(
    electronics: &mut Repository<u32, ElectronicItem>,
    groceries: &mut Repository<u32, GroceryItem>,
) {
    // Duplicate id: the Laptop under id 1 must survive.
    if let Err(err) = electronics.add(ElectronicItem::new(1, "Tablet", 5, "Apple", 12)) {
        warn!(%err, "add rejected");
    }

    if let Err(err) = groceries.remove(&99) {
        warn!(%err, "remove rejected");
    }

    if let Err(err) = groceries.update_quantity(&1, -5) {
        warn!(%err, "quantity update rejected");
    }

    match increase_stock(electronics, 2, 5) {
        Ok(quantity) => info!(id = 2, quantity, "stock increased"),
        Err(err) => warn!(%err, "stock increase rejected"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tally_exercises::init_tracing();

    let (mut electronics, mut groceries) = seed()?;
    show_inventory(&electronics, &groceries);

    demo_operations(&mut electronics, &mut groceries);

    println!("\nFinal Inventory:");
    show_inventory(&electronics, &groceries);

    Ok(())
}
