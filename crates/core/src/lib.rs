//! Error types and absent-collection handling for seqops.
//!
//! Foundation crate -- no I/O, no shared state.

pub mod error;
pub mod nullable;

pub use error::{SeqError, SeqResult};
pub use nullable::{is_empty, Nullable};
