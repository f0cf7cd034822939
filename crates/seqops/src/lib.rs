//! Fluent combinators over slices, collections and iterators.
//!
//! Layout:
//! - [`collection`] -- borrowed queries and taps over any `&C: IntoIterator`
//! - [`mutate`] -- in-place helpers (`push_*`) on `Vec`
//! - [`iter`] -- lazy append adapters
//! - [`array`] -- slice helpers producing fresh `Vec`s
//! - [`fluent`] -- tap / pipe on arbitrary values
//!
//! `use seqops::prelude::*;` brings every extension trait into scope.

pub mod array;
pub mod collection;
pub mod fluent;
pub mod iter;
pub mod mutate;

pub use array::{item_concat, prepend, SliceExt};
pub use collection::CollectionExt;
pub use fluent::Fluent;
pub use iter::IteratorExt;
pub use mutate::VecExt;
pub use seqops_core::{is_empty, Nullable, SeqError, SeqResult};

pub mod prelude {
    pub use crate::{CollectionExt, Fluent, IteratorExt, Nullable, SliceExt, VecExt};
}
