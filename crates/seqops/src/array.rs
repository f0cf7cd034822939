//! Slice helpers that build a fresh `Vec`. Inputs are only read.

use std::collections::HashSet;
use std::hash::Hash;

pub trait SliceExt<T> {
    /// Drop repeated elements, keeping the first occurrence of each.
    fn distinct(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone;

    /// `self` followed by everything in `other`.
    fn concat_with<I>(&self, other: I) -> Vec<T>
    where
        T: Clone,
        I: IntoIterator<Item = T>;

    /// `self` followed by `item`.
    fn concat_item(&self, item: T) -> Vec<T>
    where
        T: Clone;

    /// The first two elements, padding with `T::default()` when short.
    fn first_two(&self) -> (T, T)
    where
        T: Default + Clone;
}

impl<T> SliceExt<T> for [T] {
    fn distinct(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen: HashSet<&T> = HashSet::with_capacity(self.len());
        let out: Vec<T> = self
            .iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect();

        if out.len() < self.len() {
            tracing::trace!(
                input = self.len(),
                removed = self.len() - out.len(),
                "distinct: dropped duplicates"
            );
        }
        out
    }

    fn concat_with<I>(&self, other: I) -> Vec<T>
    where
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        let other = other.into_iter();
        let mut out = Vec::with_capacity(self.len() + other.size_hint().0);
        out.extend_from_slice(self);
        out.extend(other);
        out
    }

    fn concat_item(&self, item: T) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len() + 1);
        out.extend_from_slice(self);
        out.push(item);
        out
    }

    fn first_two(&self) -> (T, T)
    where
        T: Default + Clone,
    {
        let mut it = self.iter().cloned();
        let first = it.next().unwrap_or_default();
        let second = it.next().unwrap_or_default();
        (first, second)
    }
}

/// `[item]` followed by `rest`.
pub fn prepend<T: Clone>(item: T, rest: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(rest.len() + 1);
    out.push(item);
    out.extend_from_slice(rest);
    out
}

/// `[item]` followed by everything in `rest`. Unlike [`prepend`] the tail
/// may be any iterable, consumed by value.
pub fn item_concat<T, I>(item: T, rest: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    std::iter::once(item).chain(rest).collect()
}
