// Sun Jan 25 2026 - Alex

use std::fmt::Display;
use std::hash::Hash;

use ahash::AHashMap;
use itertools::Itertools;

pub struct IterUtils;

impl IterUtils {
    /// Lazy flat-map: the mapper runs only when the consumer pulls, one
    /// source item at a time. See [`FlatMapLazy`].
    pub fn flat_map_lazy<I, F, J>(source: I, mapper: F) -> FlatMapLazy<I::IntoIter, F, J>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> J,
        J: IntoIterator,
    {
        FlatMapLazy {
            source: source.into_iter(),
            mapper,
            current: None,
            done: false,
        }
    }

    pub fn nth_or_none<I: IntoIterator>(iter: I, n: usize) -> Option<I::Item> {
        iter.into_iter().nth(n)
    }

    pub fn size<I: IntoIterator>(iter: I) -> usize {
        iter.into_iter().count()
    }

    pub fn chunked<I>(iter: I, size: usize) -> Vec<Vec<I::Item>>
    where
        I: IntoIterator,
    {
        if size == 0 {
            return Vec::new();
        }
        let chunks = iter.into_iter().chunks(size);
        (&chunks).into_iter().map(|chunk| chunk.collect()).collect()
    }

    pub fn zip_with_index<I: IntoIterator>(iter: I) -> Vec<(usize, I::Item)> {
        iter.into_iter().enumerate().collect()
    }

    pub fn join_display<I>(iter: I, sep: &str) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        iter.into_iter().map(|x| x.to_string()).join(sep)
    }

    pub fn frequency_map<I>(iter: I) -> AHashMap<I::Item, usize>
    where
        I: IntoIterator,
        I::Item: Eq + Hash,
    {
        let mut counts = AHashMap::new();
        for item in iter {
            *counts.entry(item).or_insert(0) += 1;
        }
        counts
    }

    pub fn dedup_preserving_order<I>(iter: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Eq + Hash + Clone,
    {
        iter.into_iter().unique().collect()
    }
}

/// Hand-rolled flat-map adapter. Unlike a collected intermediate, nothing is
/// mapped until `next` is called, the mapper runs at most once per source
/// item, and the adapter is fused once both the source and the current inner
/// iterator are exhausted.
pub struct FlatMapLazy<I, F, J: IntoIterator> {
    source: I,
    mapper: F,
    current: Option<J::IntoIter>,
    done: bool,
}

impl<I, F, J> Iterator for FlatMapLazy<I, F, J>
where
    I: Iterator,
    F: FnMut(I::Item) -> J,
    J: IntoIterator,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.current = None;
            }
            match self.source.next() {
                Some(item) => self.current = Some((self.mapper)(item).into_iter()),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let inner_lower = self
            .current
            .as_ref()
            .map_or(0, |c| c.size_hint().0);
        match self.source.size_hint() {
            // Source exhausted, so the current inner iterator is all that
            // remains.
            (0, Some(0)) => {
                let upper = self.current.as_ref().and_then(|c| c.size_hint().1);
                (inner_lower, upper)
            }
            _ => (inner_lower, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_flat_map_lazy_output() {
        let out: Vec<i32> = IterUtils::flat_map_lazy(vec![1, 2, 3], |x| vec![x, x * 10]).collect();
        assert_eq!(out, vec![1, 10, 2, 20, 3, 30]);
    }

    #[test]
    fn test_flat_map_skips_empty_inner() {
        let out: Vec<i32> =
            IterUtils::flat_map_lazy(vec![0, 2, 0, 1], |n| vec![n; n as usize]).collect();
        assert_eq!(out, vec![2, 2, 1]);
    }

    #[test]
    fn test_flat_map_is_lazy() {
        let calls = Cell::new(0);
        let mut iter = IterUtils::flat_map_lazy(vec![1, 2, 3], |x| {
            calls.set(calls.get() + 1);
            vec![x]
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(calls.get(), 1);
        assert_eq!(iter.next(), Some(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_flat_map_is_fused() {
        let mut iter = IterUtils::flat_map_lazy(vec![1], |x| vec![x]);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_chunked() {
        assert_eq!(
            IterUtils::chunked(1..=7, 3),
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]
        );
        assert!(IterUtils::chunked(1..=3, 0).is_empty());
    }

    #[test]
    fn test_misc_helpers() {
        assert_eq!(IterUtils::nth_or_none(10..20, 2), Some(12));
        assert_eq!(IterUtils::nth_or_none(0..3, 9), None);
        assert_eq!(IterUtils::size(0..5), 5);
        assert_eq!(IterUtils::join_display([1, 2, 3], ", "), "1, 2, 3");
        assert_eq!(
            IterUtils::dedup_preserving_order([3, 1, 3, 2, 1]),
            vec![3, 1, 2]
        );
        let freq = IterUtils::frequency_map(["a", "b", "a"]);
        assert_eq!(freq.get("a"), Some(&2));
    }
}
