//! # Finance Exercise Types
//!
//! Transactions, payment channels and the account debit policy.
//!
//! ## Channel Dispatch
//! The source modeled bank/mobile-money/crypto processors as three
//! classes implementing one interface, differing only in message text.
//! There is no runtime extension point, so here they are a closed enum
//! with a single `process` method.
//!
//! ## Account Policy
//! The source guarded savings accounts against overdrafts but let the
//! base account go negative. That inconsistency is treated as a bug:
//! every account here applies the guarded policy and rejects a debit
//! that exceeds the current balance, leaving the balance unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::money::Money;

// =============================================================================
// Transaction
// =============================================================================

/// An immutable transaction record. Held in a plain `Vec` ledger; there
/// is no keyed repository for transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub date: DateTime<Utc>,
    pub amount: Money,
    pub category: String,
}

impl Transaction {
    pub fn new(id: u32, date: DateTime<Utc>, amount: Money, category: &str) -> Self {
        Transaction {
            id,
            date,
            amount,
            category: category.to_string(),
        }
    }
}

// =============================================================================
// Payment Channel
// =============================================================================

/// The closed set of payment channels a transaction can be routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    BankTransfer,
    MobileMoney,
    Crypto,
}

impl Channel {
    /// Human-readable channel label.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::BankTransfer => "Bank Transfer",
            Channel::MobileMoney => "Mobile Money",
            Channel::Crypto => "Crypto",
        }
    }

    /// Processes a transaction through this channel.
    ///
    /// Channels share one contract and differ only in wording, so the
    /// confirmation line is returned for the caller to print or log.
    pub fn process(&self, transaction: &Transaction) -> String {
        format!(
            "Processed transaction {} ({}, {}) via {}",
            transaction.id,
            transaction.category,
            transaction.amount,
            self.label()
        )
    }
}

// =============================================================================
// Account
// =============================================================================

/// A balance-holding account debited by transactions.
///
/// One uniform overdraft policy: debits above the current balance fail
/// with [`FinanceError::InsufficientFunds`] and leave the balance as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: String,
    balance: Money,
}

impl Account {
    /// Opens an account, rejecting a negative opening balance.
    pub fn open(number: &str, opening_balance: Money) -> FinanceResult<Self> {
        if opening_balance.is_negative() {
            return Err(FinanceError::NegativeOpeningBalance {
                balance: opening_balance,
            });
        }
        Ok(Account {
            number: number.to_string(),
            balance: opening_balance,
        })
    }

    /// The account number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Debits the transaction amount and returns the new balance.
    pub fn apply(&mut self, transaction: &Transaction) -> FinanceResult<Money> {
        if transaction.amount > self.balance {
            return Err(FinanceError::InsufficientFunds {
                balance: self.balance,
                requested: transaction.amount,
            });
        }
        self.balance -= transaction.amount;
        Ok(self.balance)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: u32, cents: i64, category: &str) -> Transaction {
        Transaction::new(id, Utc::now(), Money::from_cents(cents), category)
    }

    #[test]
    fn test_debit_reduces_balance() {
        let mut account = Account::open("Ha7927363jk", Money::from_cents(50_000)).unwrap();
        let new_balance = account.apply(&tx(1, 150, "Food stuff")).unwrap();
        assert_eq!(new_balance, Money::from_cents(49_850));
        assert_eq!(account.balance(), Money::from_cents(49_850));
    }

    #[test]
    fn test_overdraft_rejected_and_balance_unchanged() {
        let mut account = Account::open("Ha7927363jk", Money::from_cents(100)).unwrap();
        let err = account.apply(&tx(2, 250, "Electricity")).unwrap_err();
        assert_eq!(
            err,
            FinanceError::InsufficientFunds {
                balance: Money::from_cents(100),
                requested: Money::from_cents(250),
            }
        );
        assert_eq!(account.balance(), Money::from_cents(100));
    }

    #[test]
    fn test_debit_to_exactly_zero_is_allowed() {
        let mut account = Account::open("A1", Money::from_cents(250)).unwrap();
        assert_eq!(
            account.apply(&tx(3, 250, "Savings")).unwrap(),
            Money::zero()
        );
    }

    #[test]
    fn test_negative_opening_balance_rejected() {
        assert!(matches!(
            Account::open("A1", Money::from_cents(-1)),
            Err(FinanceError::NegativeOpeningBalance { .. })
        ));
    }

    #[test]
    fn test_channel_confirmation_lines() {
        let transaction = tx(1, 15_000, "Food stuff");
        assert_eq!(
            Channel::MobileMoney.process(&transaction),
            "Processed transaction 1 (Food stuff, 150.00) via Mobile Money"
        );
        assert!(Channel::BankTransfer
            .process(&transaction)
            .ends_with("via Bank Transfer"));
        assert!(Channel::Crypto.process(&transaction).ends_with("via Crypto"));
    }
}
