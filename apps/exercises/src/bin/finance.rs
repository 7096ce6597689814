//! # Finance Exercise
//!
//! Routes a handful of transactions through their payment channels and
//! applies them to a single guarded account. Overdrafts are reported
//! and skipped; the run always completes.

use chrono::Utc;
use tracing::warn;

use tally_core::finance::{Account, Channel, Transaction};
use tally_core::money::Money;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tally_exercises::init_tracing();

    let mut account = Account::open("Ha7927363jk", Money::from_major_minor(50_000, 0))?;
    println!(
        "Opened account {} with balance {}",
        account.number(),
        account.balance()
    );

    let ledger = vec![
        (
            Channel::MobileMoney,
            Transaction::new(1, Utc::now(), Money::from_major_minor(150, 0), "Food stuff"),
        ),
        (
            Channel::BankTransfer,
            Transaction::new(2, Utc::now(), Money::from_major_minor(200, 0), "Electricity"),
        ),
        (
            Channel::Crypto,
            Transaction::new(3, Utc::now(), Money::from_major_minor(300, 0), "Savings"),
        ),
    ];

    for (channel, transaction) in &ledger {
        println!("{}", channel.process(transaction));

        match account.apply(transaction) {
            Ok(balance) => println!(
                "Applied to account {}. New balance: {balance}",
                account.number()
            ),
            Err(err) => warn!(transaction = transaction.id, %err, "transaction skipped"),
        }
    }

    println!("\nLedger ({} transactions):", ledger.len());
    for (_, transaction) in &ledger {
        println!(
            "  #{} {} {} on {}",
            transaction.id,
            transaction.category,
            transaction.amount,
            transaction.date.format("%Y-%m-%d")
        );
    }
    println!("Closing balance: {}", account.balance());

    Ok(())
}
