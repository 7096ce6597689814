//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  tally-core errors (this file)                                      │
//! │  ├── RepoError     - Keyed repository invariant violations          │
//! │  ├── ParseError    - Malformed student record lines                 │
//! │  └── FinanceError  - Account policy violations                      │
//! │                                                                     │
//! │  tally-store errors (separate crate)                                │
//! │  └── StoreError    - File I/O and JSON failures                     │
//! │                                                                     │
//! │  Every error is locally recoverable: binaries log it and continue.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (key, line number, amount)
//! 3. Errors are enum variants, never String

use std::fmt::Display;

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Repository Error
// =============================================================================

/// Keyed repository errors.
///
/// Repositories are generic over their key type, so the offending key is
/// rendered to a `String` at construction time rather than carried
/// generically through the error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    /// An entity with this key is already stored.
    #[error("duplicate key: '{key}' already exists")]
    DuplicateKey { key: String },

    /// No entity with this key is stored.
    #[error("key not found: '{key}'")]
    NotFound { key: String },

    /// Quantity updates below zero are rejected.
    #[error("invalid quantity: {quantity} (must not be negative)")]
    InvalidQuantity { quantity: i64 },
}

impl RepoError {
    /// Creates a DuplicateKey error for any displayable key.
    pub fn duplicate(key: impl Display) -> Self {
        RepoError::DuplicateKey {
            key: key.to_string(),
        }
    }

    /// Creates a NotFound error for any displayable key.
    pub fn not_found(key: impl Display) -> Self {
        RepoError::NotFound {
            key: key.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// Record Parse Error
// =============================================================================

/// Errors raised while parsing a comma-separated student record line.
///
/// ## Field Rules
/// - Exactly three fields: id, name, score
/// - id must be an integer (a bad id counts as a missing field,
///   matching the grading exercise's taxonomy)
/// - score must be an integer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong field count, or the id field is not a valid integer.
    #[error("missing or invalid field: {reason}")]
    MissingField { reason: String },

    /// The score field is not a valid integer.
    #[error("invalid score format: '{value}'")]
    InvalidScore { value: String },
}

/// Result type for record parsing.
pub type ParseResult<T> = Result<T, ParseError>;

// =============================================================================
// Finance Error
// =============================================================================

/// Account policy errors for the finance exercise.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinanceError {
    /// A debit larger than the current balance was rejected.
    ///
    /// The balance is left unchanged; callers report the rejection and
    /// continue with the next transaction.
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Money, requested: Money },

    /// Accounts cannot be opened with a negative balance.
    #[error("opening balance cannot be negative: {balance}")]
    NegativeOpeningBalance { balance: Money },
}

/// Result type for account operations.
pub type FinanceResult<T> = Result<T, FinanceError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_messages() {
        assert_eq!(
            RepoError::duplicate(1).to_string(),
            "duplicate key: '1' already exists"
        );
        assert_eq!(
            RepoError::not_found("F12").to_string(),
            "key not found: 'F12'"
        );
        assert_eq!(
            RepoError::InvalidQuantity { quantity: -5 }.to_string(),
            "invalid quantity: -5 (must not be negative)"
        );
    }

    #[test]
    fn test_finance_error_messages() {
        let err = FinanceError::InsufficientFunds {
            balance: Money::from_cents(100),
            requested: Money::from_cents(250),
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: balance 1.00, requested 2.50"
        );
    }
}
