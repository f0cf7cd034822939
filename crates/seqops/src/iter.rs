//! Lazy append adapters.
//!
//! These never touch their source and never allocate. The result is a
//! `Chain` that runs once per consumption; it can be replayed only when the
//! underlying iterator is `Clone` (e.g. `slice::Iter`, not `vec::Drain`).

use std::iter::{Chain, Once};

pub trait IteratorExt: Iterator + Sized {
    /// Yield everything from `self`, then `item`.
    #[inline]
    fn append_item(self, item: Self::Item) -> Chain<Self, Once<Self::Item>> {
        self.chain(std::iter::once(item))
    }

    /// Yield everything from `self`, then everything from `items`.
    #[inline]
    fn append_items<I>(self, items: I) -> Chain<Self, I::IntoIter>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        self.chain(items)
    }
}

impl<I: Iterator> IteratorExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_item_is_last() {
        let out: Vec<_> = [1, 2].into_iter().append_item(3).collect();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn append_items_keeps_order() {
        let out: Vec<&str> = ["a"].into_iter().append_items(vec!["b", "c"]).collect();
        assert_eq!(out, vec!["a", "b", "c"]);
    }

    #[test]
    fn source_untouched() {
        let source = vec![1, 2];
        let extended: Vec<i32> = source.iter().copied().append_item(9).collect();
        assert_eq!(source, vec![1, 2]);
        assert_eq!(extended, vec![1, 2, 9]);
    }

    #[test]
    fn lazy_until_consumed() {
        let mut pulled = 0;
        let chained = (0..3)
            .inspect(|_| pulled += 1)
            .append_item(10);
        let first_two: Vec<i32> = chained.take(2).collect();
        assert_eq!(first_two, vec![0, 1]);
        assert_eq!(pulled, 2);
    }

    #[test]
    fn replayable_when_clone() {
        let source = [4, 5];
        let chained = source.iter().append_items(&[6]);
        let a: Vec<_> = chained.clone().collect();
        let b: Vec<_> = chained.collect();
        assert_eq!(a, b);
        assert_eq!(a, vec![&4, &5, &6]);
    }

    #[test]
    fn one_shot_source_runs_once() {
        let mut source = vec![1, 2, 3];
        let mut chained = source.drain(..).append_item(4);
        assert_eq!(chained.by_ref().count(), 4);
        assert_eq!(chained.next(), None);
    }
}
