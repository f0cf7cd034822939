//! Absent-collection handling.
//!
//! `None` stands in for a null collection. Only the emptiness check
//! tolerates it; every other caller has to resolve it through
//! [`Nullable::or_missing`] first.

use crate::error::{SeqError, SeqResult};

/// `true` if `collection` is `None` or yields no elements.
///
/// ```
/// assert!(seqops_core::is_empty::<Vec<u8>>(None));
/// assert!(!seqops_core::is_empty(Some(&vec![1])));
/// ```
pub fn is_empty<C>(collection: Option<&C>) -> bool
where
    C: ?Sized,
    for<'b> &'b C: IntoIterator,
{
    match collection {
        None => true,
        Some(c) => c.into_iter().next().is_none(),
    }
}

/// Method form of [`is_empty`] plus the typed null fault.
pub trait Nullable {
    /// What `or_missing` resolves to, e.g. `&Vec<T>` for `Option<&Vec<T>>`.
    type Collection;

    fn is_none_or_empty(&self) -> bool;

    /// Resolve to the collection, or fail with
    /// [`SeqError::MissingSequence`] naming `operation`.
    fn or_missing(self, operation: &'static str) -> SeqResult<Self::Collection>;
}

impl<'a, C> Nullable for Option<&'a C>
where
    C: ?Sized,
    for<'b> &'b C: IntoIterator,
{
    type Collection = &'a C;

    #[inline]
    fn is_none_or_empty(&self) -> bool {
        is_empty(*self)
    }

    fn or_missing(self, operation: &'static str) -> SeqResult<&'a C> {
        self.ok_or_else(|| {
            tracing::debug!(operation, "missing sequence");
            SeqError::MissingSequence { operation }
        })
    }
}
