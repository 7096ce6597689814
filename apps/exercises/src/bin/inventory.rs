//! # Inventory Exercise
//!
//! Seeds a file-backed journal, saves it to JSON, reloads it through a
//! fresh journal instance and prints the result. Save/load failures are
//! warnings, never process aborts.

use std::env;

use chrono::Utc;
use tracing::warn;

use tally_core::inventory::InventoryItem;
use tally_store::journal::Journal;

const DEFAULT_PATH: &str = "inventory.json";

fn main() {
    tally_exercises::init_tracing();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_PATH.to_string());

    let mut journal = Journal::new(&path);
    let now = Utc::now();
    journal.add(InventoryItem::new(1, "Hammer", 10, now));
    journal.add(InventoryItem::new(2, "Screwdriver", 15, now));
    journal.add(InventoryItem::new(3, "Pliers", 8, now));
    journal.add(InventoryItem::new(4, "Wrench", 5, now));
    journal.add(InventoryItem::new(5, "Drill", 3, now));

    if let Err(err) = journal.save() {
        warn!(%err, "could not save inventory journal");
    }

    // A fresh instance proves the data survives the file round-trip.
    let mut reloaded: Journal<InventoryItem> = Journal::new(&path);
    if let Err(err) = reloaded.load() {
        warn!(%err, "could not load inventory journal");
    }

    if reloaded.is_empty() {
        println!("No items found.");
        return;
    }
    for item in reloaded.entries() {
        println!(
            "ID: {}, Name: {}, Quantity: {}, Date Added: {}",
            item.id,
            item.name,
            item.quantity,
            item.date_added.format("%Y-%m-%d")
        );
    }
    println!("\nInventory file saved at: {path}");
}
