//! # tally-store: File Persistence Layer
//!
//! Every file operation in the workspace lives here: the JSON inventory
//! journal, the student record file and the grade report. Business
//! logic stays in `tally-core`; console orchestration stays in the
//! exercise binaries.
//!
//! ## Modules
//! - [`journal`] - File-backed entity journal (JSON array on disk)
//! - [`report`] - Student record reading and report writing
//! - [`error`] - Store error taxonomy

pub mod error;
pub mod journal;
pub mod report;

pub use error::{StoreError, StoreResult};
pub use journal::Journal;
