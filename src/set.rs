//! A hash set with set algebra, plus the same algebra over slices
//!
//! None of the operations here preserve order. The slice functions accept inputs with
//! duplicates and return each distinct element once.
use std::borrow::Borrow;
use std::collections::hash_set::{self, HashSet};
use std::hash::Hash;

/// A collection of unique hashable items
///
/// # Example
///
/// ```
/// # use generic_collections::Set;
/// let left = Set::from([1, 2, 3]);
/// let right = Set::from([2, 3, 4]);
/// assert_eq!(left.intersection(&right), Set::from([2, 3]));
/// assert_eq!(left.difference(&right), Set::from([1]));
/// assert_eq!(left.union(right).len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Set<T>(HashSet<T>);

impl<T: Hash + Eq> Set<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Set(HashSet::new())
    }

    /// Create an empty set with room for at least `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Set(HashSet::with_capacity(capacity))
    }

    /// Create a set of the distinct items of a slice
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        items.iter().cloned().collect()
    }

    /// Add an item, returning false if it was already present
    pub fn add(&mut self, item: T) -> bool {
        self.0.insert(item)
    }

    /// Remove an item, returning false if it wasn't present
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.remove(item)
    }

    /// True if the set contains `item`
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.contains(item)
    }

    /// The number of items
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the set has no items
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The items in arbitrary order
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.0.iter()
    }

    /// Every item in either set
    ///
    /// This consumes both sets and grows whichever is larger.
    pub fn union(self, other: Self) -> Self {
        let (small, mut large) = if other.len() > self.len() {
            (self, other)
        } else {
            (other, self)
        };
        large.0.extend(small.0);
        large
    }

    /// Every item in both sets
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let (small, large) = if other.len() > self.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .filter(|item| large.contains(*item))
            .cloned()
            .collect()
    }

    /// Every item of `other` that isn't in this set
    pub fn complement(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        other.difference(self)
    }

    /// Every item of this set that isn't in `other`
    ///
    /// Note that `a.difference(&b)` is generally not `b.difference(&a)`.
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter()
            .filter(|item| !other.contains(*item))
            .cloned()
            .collect()
    }

    /// The items in arbitrary order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Set(HashSet::default())
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Set(iter.into_iter().collect())
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.0.extend(iter);
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(items: [T; N]) -> Self {
        Set(HashSet::from(items))
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Collect the results of applying `func` to every item of a slice into a set
pub fn map_slice_to_set<S, T, F>(items: &[S], func: F) -> Set<T>
where
    T: Hash + Eq,
    F: FnMut(&S) -> T,
{
    items.iter().map(func).collect()
}

/// Every distinct item in either slice
pub fn slice_union<T: Hash + Eq + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    Set::from_slice(left)
        .union(Set::from_slice(right))
        .into_iter()
        .collect()
}

/// Every distinct item in both slices
pub fn slice_intersection<T: Hash + Eq + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    Set::from_slice(left)
        .intersection(&Set::from_slice(right))
        .into_iter()
        .collect()
}

/// Every distinct item of `right` that isn't in `left`
pub fn slice_complement<T: Hash + Eq + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    Set::from_slice(left)
        .complement(&Set::from_slice(right))
        .into_iter()
        .collect()
}

/// Every distinct item of `left` that isn't in `right`
pub fn slice_difference<T: Hash + Eq + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    Set::from_slice(left)
        .difference(&Set::from_slice(right))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::Set;
    use std::collections::HashSet;
    use std::fmt::Debug;
    use std::hash::Hash;

    // compares ignoring order, but no item may be repeated
    fn assert_same_items<T: Hash + Eq + Debug>(actual: Vec<T>, expected: &[T]) {
        let len = actual.len();
        let actual: HashSet<T> = actual.into_iter().collect();
        assert_eq!(len, actual.len(), "duplicate items in {:?}", actual);
        let expected: HashSet<&T> = expected.iter().collect();
        assert_eq!(actual.iter().collect::<HashSet<&T>>(), expected);
    }

    #[test]
    fn test_add_remove_contains() {
        let mut set = Set::with_capacity(2);
        assert!(set.add("a"));
        assert!(!set.add("a"));
        assert!(set.add("b"));
        assert!(set.contains("a"));
        assert_eq!(set.len(), 2);

        assert!(set.remove("a"));
        assert!(!set.remove("a"));
        assert!(!set.contains("a"));
        assert!(!set.is_empty());
    }

    #[test]
    fn test_union() {
        let small = Set::from([1, 2]);
        let large = Set::from([2, 3, 4]);
        assert_eq!(small.clone().union(large.clone()), Set::from([1, 2, 3, 4]));
        assert_eq!(large.union(small), Set::from([1, 2, 3, 4]));
        assert_eq!(Set::<u8>::new().union(Set::new()), Set::new());
    }

    #[test]
    fn test_intersection() {
        let left = Set::from(["a", "zzz", "b"]);
        let right = Set::from(["aa", "b", "c"]);
        assert_eq!(left.intersection(&right), Set::from(["b"]));
        assert_eq!(right.intersection(&left), Set::from(["b"]));
        assert!(left.intersection(&Set::new()).is_empty());
    }

    #[test]
    fn test_complement_difference() {
        let left = Set::from([1, 3, 4, 6]);
        let right = Set::from([1, 2, 3, 5]);
        assert_eq!(left.complement(&right), Set::from([2, 5]));
        assert_eq!(left.difference(&right), Set::from([4, 6]));
        assert_eq!(right.difference(&left), Set::from([2, 5]));
        assert!(left.difference(&left).is_empty());
    }

    #[test]
    fn test_equality() {
        assert_eq!(Set::from([1, 2, 3]), Set::from_slice(&[3, 2, 1, 1]));
        assert_ne!(Set::from([1, 2, 3]), Set::from([1, 2]));
        assert_ne!(Set::from([1, 2]), Set::from([1, 2, 3]));
        assert_eq!(Set::<i32>::default(), Set::new());
    }

    #[test]
    fn test_to_vec() {
        let mut items = Set::from(["x", "y", "z"]).to_vec();
        items.sort_unstable();
        assert_eq!(items, ["x", "y", "z"]);
    }

    #[test]
    fn test_map_slice_to_set() {
        let strs = super::map_slice_to_set(&[1, 2, 3, 3], |num| num.to_string());
        assert_eq!(strs, Set::from(["1".to_owned(), "2".to_owned(), "3".to_owned()]));

        let empty: &[i32] = &[];
        assert!(super::map_slice_to_set(empty, |num| num.to_string()).is_empty());
    }

    #[test]
    fn test_slice_union() {
        assert_same_items(
            super::slice_union(&[1, 3, 4, 6], &[1, 2, 3, 5]),
            &[1, 2, 3, 4, 5, 6],
        );
        assert_same_items(super::slice_union(&[], &[44, 3, 2]), &[44, 3, 2]);
        assert_same_items(
            super::slice_union(&["a", "zzz", "b"], &["aa", "b", "c"]),
            &["a", "zzz", "b", "aa", "c"],
        );
        assert_same_items(super::slice_union::<&str>(&[], &[]), &[]);
    }

    #[test]
    fn test_slice_intersection() {
        assert_same_items(
            super::slice_intersection(&[1, 2, 3, 4], &[0, 2, 3, 5]),
            &[2, 3],
        );
        assert_same_items(super::slice_intersection(&[], &[44, 3, 2]), &[]);
        assert_same_items(
            super::slice_intersection(&["asd", "3ef"], &["3ef"]),
            &["3ef"],
        );
    }

    #[test]
    fn test_slice_complement() {
        assert_same_items(
            super::slice_complement(&[1, 2, 3, 4], &[0, 2, 3, 5]),
            &[0, 5],
        );
        assert_same_items(super::slice_complement(&[], &[44, 3, 2]), &[44, 3, 2]);
        assert_same_items(super::slice_complement(&[1, 2, 3, 4], &[3, 2, 1]), &[]);
        assert_same_items(
            super::slice_complement(&["a", "zzz", "b"], &["aa", "b", "c"]),
            &["aa", "c"],
        );
    }

    #[test]
    fn test_slice_difference() {
        assert_same_items(
            super::slice_difference(&[1, 1, 2, 2, 2, 3, 99], &[0, 2]),
            &[1, 3, 99],
        );
        assert_same_items(
            super::slice_difference(&[1, 2, 4, 5], &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
            &[],
        );
        assert_same_items(
            super::slice_difference(&["_", "{", "{{", "37"], &["{{", "{"]),
            &["_", "37"],
        );
    }
}
