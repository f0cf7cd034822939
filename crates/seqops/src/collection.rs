//! Borrowed queries and side-effecting taps over any collection.
//!
//! Everything here is implemented once for every `C` where `&C` iterates
//! over `&T`: slices, arrays, `Vec`, `VecDeque`, the std sets, and so on.
//! None of these methods alter the collection.

/// Queries and taps over a borrowed collection.
pub trait CollectionExt<T> {
    /// `true` if any element equals any of `candidates`.
    ///
    /// `T: PartialEq<Q>` lets a `Vec<String>` be probed with `&str`s.
    fn contains_any<Q>(&self, candidates: &[Q]) -> bool
    where
        T: PartialEq<Q>;

    /// `true` if no element satisfies `predicate`. Vacuously true when empty.
    fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Fallible [`none_match`](Self::none_match). The first `Err` from
    /// `predicate` stops iteration and is returned as-is.
    fn try_none_match<P, E>(&self, predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>;

    /// Run `action` on every element in iteration order, then hand back
    /// the collection for chaining.
    fn tap_each<F>(&self, action: F) -> &Self
    where
        F: FnMut(&T);

    /// Like [`tap_each`](Self::tap_each) with a zero-based index.
    fn tap_each_indexed<F>(&self, action: F) -> &Self
    where
        F: FnMut(&T, usize);

    /// Fallible [`tap_each`](Self::tap_each); stops at the first `Err`.
    fn try_tap_each<F, E>(&self, action: F) -> Result<&Self, E>
    where
        F: FnMut(&T) -> Result<(), E>;
}

impl<C, T> CollectionExt<T> for C
where
    C: ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
{
    fn contains_any<Q>(&self, candidates: &[Q]) -> bool
    where
        T: PartialEq<Q>,
    {
        self.into_iter()
            .any(|item| candidates.iter().any(|candidate| item == candidate))
    }

    #[inline]
    fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.into_iter().any(predicate)
    }

    fn try_none_match<P, E>(&self, mut predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        for item in self {
            if predicate(item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn tap_each<F>(&self, mut action: F) -> &Self
    where
        F: FnMut(&T),
    {
        for item in self {
            action(item);
        }
        self
    }

    fn tap_each_indexed<F>(&self, mut action: F) -> &Self
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.into_iter().enumerate() {
            action(item, index);
        }
        self
    }

    fn try_tap_each<F, E>(&self, mut action: F) -> Result<&Self, E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        for item in self {
            action(item)?;
        }
        Ok(self)
    }
}
