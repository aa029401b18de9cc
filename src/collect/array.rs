// Fri Jan 23 2026 - Alex

use rand::seq::SliceRandom;
use rand::thread_rng;

use super::error::CollectionError;

pub struct ArrayUtils;

impl ArrayUtils {
    pub fn is_empty<T>(slice: Option<&[T]>) -> bool {
        slice.map_or(true, |s| s.is_empty())
    }

    pub fn is_not_empty<T>(slice: Option<&[T]>) -> bool {
        !Self::is_empty(slice)
    }

    pub fn is_same_length<T, U>(a: Option<&[T]>, b: Option<&[U]>) -> bool {
        a.map_or(0, |s| s.len()) == b.map_or(0, |s| s.len())
    }

    pub fn index_of<T: PartialEq>(slice: &[T], item: &T) -> Option<usize> {
        slice.iter().position(|x| x == item)
    }

    /// Search starting at `from`; a start past the end finds nothing.
    pub fn index_of_from<T: PartialEq>(slice: &[T], item: &T, from: usize) -> Option<usize> {
        if from >= slice.len() {
            return None;
        }
        slice[from..].iter().position(|x| x == item).map(|i| i + from)
    }

    pub fn last_index_of<T: PartialEq>(slice: &[T], item: &T) -> Option<usize> {
        slice.iter().rposition(|x| x == item)
    }

    pub fn contains<T: PartialEq>(slice: &[T], item: &T) -> bool {
        slice.iter().any(|x| x == item)
    }

    /// Clamping subarray: out-of-range indices are pulled back into the
    /// slice, start past end yields empty. Never panics.
    pub fn subarray<T: Clone>(slice: &[T], start: usize, end: usize) -> Vec<T> {
        let len = slice.len();
        let start = start.min(len);
        let end = end.min(len);
        if start >= end {
            return Vec::new();
        }
        slice[start..end].to_vec()
    }

    pub fn first_n<T: Clone>(slice: &[T], n: usize) -> Vec<T> {
        slice[..n.min(slice.len())].to_vec()
    }

    pub fn last_n<T: Clone>(slice: &[T], n: usize) -> Vec<T> {
        slice[slice.len() - n.min(slice.len())..].to_vec()
    }

    pub fn insert<T>(vec: &mut Vec<T>, index: usize, item: T) -> Result<(), CollectionError> {
        if index > vec.len() {
            return Err(CollectionError::IndexOutOfBounds { index, len: vec.len() });
        }
        vec.insert(index, item);
        Ok(())
    }

    pub fn remove<T>(vec: &mut Vec<T>, index: usize) -> Result<T, CollectionError> {
        if index >= vec.len() {
            return Err(CollectionError::IndexOutOfBounds { index, len: vec.len() });
        }
        Ok(vec.remove(index))
    }

    /// Removes the first occurrence of `item`, reporting whether one existed.
    pub fn remove_item<T: PartialEq>(vec: &mut Vec<T>, item: &T) -> bool {
        match vec.iter().position(|x| x == item) {
            Some(i) => {
                vec.remove(i);
                true
            }
            None => false,
        }
    }

    /// Out-of-range indices make this a no-op rather than an error.
    pub fn swap<T>(slice: &mut [T], a: usize, b: usize) {
        if a < slice.len() && b < slice.len() {
            slice.swap(a, b);
        }
    }

    pub fn reverse<T>(slice: &mut [T]) {
        slice.reverse();
    }

    /// Reverse a clamped subrange in place.
    pub fn reverse_range<T>(slice: &mut [T], start: usize, end: usize) {
        let len = slice.len();
        let start = start.min(len);
        let end = end.min(len);
        if start < end {
            slice[start..end].reverse();
        }
    }

    /// Rotate right by `offset` positions; negative offsets rotate left.
    /// Offsets larger than the length wrap around.
    pub fn rotate<T>(slice: &mut [T], offset: isize) {
        let len = slice.len();
        if len < 2 {
            return;
        }
        let shift = offset.rem_euclid(len as isize) as usize;
        slice.rotate_right(shift);
    }

    pub fn fill<T: Clone>(slice: &mut [T], value: T) {
        for slot in slice.iter_mut() {
            *slot = value.clone();
        }
    }

    pub fn shuffle<T>(slice: &mut [T]) {
        log::trace!("shuffling {} elements", slice.len());
        slice.shuffle(&mut thread_rng());
    }

    pub fn is_sorted<T: PartialOrd>(slice: &[T]) -> bool {
        slice.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn add_all<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
        let mut out = Vec::with_capacity(a.len() + b.len());
        out.extend_from_slice(a);
        out.extend_from_slice(b);
        out
    }

    pub fn to_vec_or_empty<T: Clone>(slice: Option<&[T]>) -> Vec<T> {
        slice.map_or_else(Vec::new, |s| s.to_vec())
    }
}
