//! # tally-core: Pure Business Logic for the Tally Exercises
//!
//! This crate holds all domain logic as pure types and functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Tally Architecture                            │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  apps/exercises (binaries)                    │  │
//! │  │  finance · healthcare · inventory · school · warehouse        │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐  │
//! │  │                ★ tally-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │  ┌────────────┐ ┌───────┐ ┌─────────┐ ┌─────────┐ ┌────────┐  │  │
//! │  │  │ repository │ │ money │ │ grading │ │ health  │ │finance │  │  │
//! │  │  └────────────┘ └───────┘ └─────────┘ └─────────┘ └────────┘  │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐  │
//! │  │                 tally-store (File I/O Layer)                  │  │
//! │  │            JSON journal, record files, text reports           │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`repository`] - Generic keyed entity store (the shared abstraction)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`finance`] - Transactions, channels and the account debit policy
//! - [`grading`] - Student records, parsing and grade bands
//! - [`health`] - Patients, prescriptions and grouping
//! - [`inventory`] - The journal entity shape
//! - [`warehouse`] - Electronic and grocery stock items
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic
//! 2. **No I/O**: file and console access live in tally-store and the binaries
//! 3. **Integer Money**: all monetary values are cents (i64)
//! 4. **Explicit Errors**: typed enums, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod finance;
pub mod grading;
pub mod health;
pub mod inventory;
pub mod money;
pub mod repository;
pub mod warehouse;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{FinanceError, ParseError, RepoError};
pub use money::Money;
pub use repository::{Keyed, Repository, Stocked};
