//! In-place helpers. Every method here takes `&mut self` and is prefixed
//! `push_` so the mutation is visible at the call site.

/// Mutating helpers on `Vec`.
pub trait VecExt<T> {
    /// Append `item` unless an equal element is already present.
    ///
    /// Returns the same vector so calls can be chained. Idempotent: a
    /// second call with an equal item is a no-op.
    fn push_if_absent(&mut self, item: T) -> &mut Self
    where
        T: PartialEq;
}

impl<T> VecExt<T> for Vec<T> {
    fn push_if_absent(&mut self, item: T) -> &mut Self
    where
        T: PartialEq,
    {
        if self.contains(&item) {
            tracing::trace!(len = self.len(), "push_if_absent: item already present");
        } else {
            self.push(item);
        }
        self
    }
}
