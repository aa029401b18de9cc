// Sat Jan 24 2026 - Alex

use std::hash::Hash;

use ahash::AHashMap;

use super::error::CollectionError;

/// Bag-semantics helpers over plain sequences. Union, intersection and the
/// rest respect element multiplicity, so `union([a, a], [a]) == [a, a]`.
pub struct CollectionUtils;

impl CollectionUtils {
    pub fn is_empty<T>(items: Option<&[T]>) -> bool {
        items.map_or(true, |s| s.is_empty())
    }

    pub fn is_not_empty<T>(items: Option<&[T]>) -> bool {
        !Self::is_empty(items)
    }

    pub fn size<T>(items: Option<&[T]>) -> usize {
        items.map_or(0, |s| s.len())
    }

    pub fn cardinality_map<T: Eq + Hash + Clone>(items: &[T]) -> AHashMap<T, usize> {
        let mut counts = AHashMap::with_capacity(items.len());
        for item in items {
            *counts.entry(item.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn cardinality<T: Eq + Hash>(items: &[T], target: &T) -> usize {
        items.iter().filter(|x| *x == target).count()
    }

    /// Each element appears max(count_a, count_b) times, iterating `a`'s
    /// elements first.
    pub fn union<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
        log::trace!("union over {} + {} elements", a.len(), b.len());
        let counts_a = Self::cardinality_map(a);
        let counts_b = Self::cardinality_map(b);
        let mut out = Vec::new();
        let mut emitted: AHashMap<&T, usize> = AHashMap::new();
        for item in a.iter().chain(b.iter()) {
            let want = counts_a.get(item).copied().unwrap_or(0)
                .max(counts_b.get(item).copied().unwrap_or(0));
            let seen = emitted.entry(item).or_insert(0);
            if *seen < want {
                *seen += 1;
                out.push(item.clone());
            }
        }
        out
    }

    /// Each element appears min(count_a, count_b) times.
    pub fn intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
        let mut counts_b = Self::cardinality_map(b);
        let mut out = Vec::new();
        for item in a {
            if let Some(count) = counts_b.get_mut(item) {
                if *count > 0 {
                    *count -= 1;
                    out.push(item.clone());
                }
            }
        }
        out
    }

    /// Symmetric difference with multiplicity: |count_a - count_b| copies.
    pub fn disjunction<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
        let counts_a = Self::cardinality_map(a);
        let counts_b = Self::cardinality_map(b);
        let mut out = Vec::new();
        let mut emitted: AHashMap<&T, usize> = AHashMap::new();
        for item in a.iter().chain(b.iter()) {
            let ca = counts_a.get(item).copied().unwrap_or(0);
            let cb = counts_b.get(item).copied().unwrap_or(0);
            let want = ca.max(cb) - ca.min(cb);
            let seen = emitted.entry(item).or_insert(0);
            if *seen < want {
                *seen += 1;
                out.push(item.clone());
            }
        }
        out
    }

    /// `a` minus `b`, removing one occurrence per match.
    pub fn subtract<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
        let mut counts_b = Self::cardinality_map(b);
        let mut out = Vec::new();
        for item in a {
            match counts_b.get_mut(item) {
                Some(count) if *count > 0 => *count -= 1,
                _ => out.push(item.clone()),
            }
        }
        out
    }

    pub fn is_sub_collection<T: Eq + Hash + Clone>(sub: &[T], sup: &[T]) -> bool {
        let counts_sup = Self::cardinality_map(sup);
        Self::cardinality_map(sub)
            .iter()
            .all(|(item, count)| counts_sup.get(item).copied().unwrap_or(0) >= *count)
    }

    pub fn is_equal_collection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> bool {
        a.len() == b.len() && Self::cardinality_map(a) == Self::cardinality_map(b)
    }

    pub fn contains_any<T: Eq + Hash>(haystack: &[T], needles: &[T]) -> bool {
        let set: ahash::AHashSet<&T> = haystack.iter().collect();
        needles.iter().any(|n| set.contains(n))
    }

    pub fn contains_all<T: Eq + Hash + Clone>(haystack: &[T], needles: &[T]) -> bool {
        Self::is_sub_collection(needles, haystack)
    }

    pub fn partition<T: Clone, F: Fn(&T) -> bool>(items: &[T], pred: F) -> (Vec<T>, Vec<T>) {
        let mut matched = Vec::new();
        let mut rest = Vec::new();
        for item in items {
            if pred(item) {
                matched.push(item.clone());
            } else {
                rest.push(item.clone());
            }
        }
        (matched, rest)
    }

    pub fn count_matches<T, F: Fn(&T) -> bool>(items: &[T], pred: F) -> usize {
        items.iter().filter(|x| pred(x)).count()
    }

    pub fn find<'a, T, F: Fn(&T) -> bool>(items: &'a [T], pred: F) -> Option<&'a T> {
        items.iter().find(|x| pred(x))
    }

    pub fn extract_singleton<T: Clone>(items: &[T]) -> Result<T, CollectionError> {
        match items {
            [only] => Ok(only.clone()),
            _ => Err(CollectionError::NotSingleton(items.len())),
        }
    }
}
