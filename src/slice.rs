//! Helpers over slices
use crate::set::Set;
use std::hash::Hash;

/// The distinct items of a slice, in the order they first appear
///
/// ```
/// # use generic_collections::slice::unique;
/// assert_eq!(unique(&[1, 2, 1, 3, 2, 4]), [1, 2, 3, 4]);
/// ```
pub fn unique<T: Hash + Eq + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = Set::new();
    let mut distinct = Vec::with_capacity(items.len());
    for item in items {
        if seen.add(item) {
            distinct.push(item.clone());
        }
    }
    distinct
}

/// Keep only the items that match `pred`, reusing the vector's buffer
pub fn filter<T, F>(mut items: Vec<T>, mut pred: F) -> Vec<T>
where
    F: FnMut(&T) -> bool,
{
    items.retain(|item| pred(item));
    items
}

/// True if `target` is in `items`
pub fn contains<T: PartialEq>(items: &[T], target: &T) -> bool {
    items.iter().any(|item| item == target)
}

/// The index of the first occurrence of `target`
pub fn index_of<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

/// Apply `func` to every item
pub fn map<T, U, F>(items: &[T], func: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(func).collect()
}
