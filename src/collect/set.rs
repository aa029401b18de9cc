// Sat Jan 24 2026 - Alex

use std::collections::HashSet;
use std::hash::Hash;

pub struct SetUtils;

impl SetUtils {
    pub fn hash_set_of<T: Eq + Hash + Clone>(items: &[T]) -> HashSet<T> {
        items.iter().cloned().collect()
    }

    pub fn disjoint<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> bool {
        let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        !small.iter().any(|x| large.contains(x))
    }

    pub fn is_subset<T: Eq + Hash>(sub: &HashSet<T>, sup: &HashSet<T>) -> bool {
        sub.is_subset(sup)
    }

    pub fn union<'a, T: Eq + Hash>(a: &'a HashSet<T>, b: &'a HashSet<T>) -> SetView<'a, T> {
        SetView { kind: ViewKind::Union, left: a, right: b }
    }

    pub fn intersection<'a, T: Eq + Hash>(a: &'a HashSet<T>, b: &'a HashSet<T>) -> SetView<'a, T> {
        SetView { kind: ViewKind::Intersection, left: a, right: b }
    }

    pub fn difference<'a, T: Eq + Hash>(a: &'a HashSet<T>, b: &'a HashSet<T>) -> SetView<'a, T> {
        SetView { kind: ViewKind::Difference, left: a, right: b }
    }

    pub fn symmetric_difference<'a, T: Eq + Hash>(
        a: &'a HashSet<T>,
        b: &'a HashSet<T>,
    ) -> SetView<'a, T> {
        SetView { kind: ViewKind::SymmetricDifference, left: a, right: b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewKind {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
}

/// A live, unmaterialized view over two sets. Iteration walks the left
/// operand first and never yields an element twice. The view borrows both
/// sets, so it always reflects them as passed in.
pub struct SetView<'a, T> {
    kind: ViewKind,
    left: &'a HashSet<T>,
    right: &'a HashSet<T>,
}

impl<'a, T: Eq + Hash> SetView<'a, T> {
    pub fn contains(&self, item: &T) -> bool {
        match self.kind {
            ViewKind::Union => self.left.contains(item) || self.right.contains(item),
            ViewKind::Intersection => self.left.contains(item) && self.right.contains(item),
            ViewKind::Difference => self.left.contains(item) && !self.right.contains(item),
            ViewKind::SymmetricDifference => {
                self.left.contains(item) != self.right.contains(item)
            }
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &'a T> + '_> {
        match self.kind {
            ViewKind::Union => Box::new(
                self.left
                    .iter()
                    .chain(self.right.iter().filter(|x| !self.left.contains(x))),
            ),
            ViewKind::Intersection => {
                Box::new(self.left.iter().filter(|x| self.right.contains(x)))
            }
            ViewKind::Difference => {
                Box::new(self.left.iter().filter(|x| !self.right.contains(x)))
            }
            ViewKind::SymmetricDifference => Box::new(
                self.left
                    .iter()
                    .filter(|x| !self.right.contains(x))
                    .chain(self.right.iter().filter(|x| !self.left.contains(x))),
            ),
        }
    }

    pub fn len(&self) -> usize {
        match self.kind {
            // Distinct count, cheaper than walking the chain for union.
            ViewKind::Union => {
                self.left.len() + self.right.iter().filter(|x| !self.left.contains(x)).count()
            }
            _ => self.iter().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn to_set(&self) -> HashSet<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[i32]) -> HashSet<i32> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_union_view() {
        let a = set(&[1, 2, 3]);
        let b = set(&[3, 4]);
        let view = SetUtils::union(&a, &b);
        assert_eq!(view.len(), 4);
        assert!(view.contains(&1));
        assert!(view.contains(&4));
        assert!(!view.contains(&9));
        assert_eq!(view.to_set(), set(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_intersection_view() {
        let a = set(&[1, 2, 3]);
        let b = set(&[2, 3, 4]);
        let view = SetUtils::intersection(&a, &b);
        assert_eq!(view.to_set(), set(&[2, 3]));
        assert!(!view.contains(&1));
    }

    #[test]
    fn test_difference_views() {
        let a = set(&[1, 2, 3]);
        let b = set(&[3, 4]);
        assert_eq!(SetUtils::difference(&a, &b).to_set(), set(&[1, 2]));
        assert_eq!(
            SetUtils::symmetric_difference(&a, &b).to_set(),
            set(&[1, 2, 4])
        );
    }

    #[test]
    fn test_view_is_live() {
        let a = set(&[1]);
        let b = set(&[]);
        let view = SetUtils::union(&a, &b);
        assert!(!view.is_empty());
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_disjoint_and_subset() {
        assert!(SetUtils::disjoint(&set(&[1, 2]), &set(&[3])));
        assert!(!SetUtils::disjoint(&set(&[1, 2]), &set(&[2])));
        assert!(SetUtils::is_subset(&set(&[1]), &set(&[1, 2])));
        assert_eq!(SetUtils::hash_set_of(&[1, 1, 2]).len(), 2);
    }
}
