//! A counting multiset with frequency ranking
//!
//! Counts are signed so that deltas can be negative, but a [Counter] never holds a key with a
//! count of zero or less. Every mutation funnels through one place that drops such keys, so
//! [Counter::add] and [Counter::subtract] clean up the same way [Counter::decrement] does.
use num::{PrimInt, Signed};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::hash_map::{self, Entry, HashMap};
use std::hash::Hash;
use std::iter::FusedIterator;
use std::ops::{AddAssign, SubAssign};

/// Integer types usable as the count of a [Counter]
///
/// This is implemented for every signed primitive integer. Count arithmetic saturates at the
/// bounds of the type instead of overflowing.
pub trait Count: PrimInt + Signed {}

impl<C: PrimInt + Signed> Count for C {}

/// A map from hashable keys to strictly positive counts
///
/// Absent keys have a count of zero. The count type defaults to [i64] but any [Count] works.
///
/// # Example
///
/// ```
/// # use generic_collections::Counter;
/// let mut counter = Counter::from_slice(&["a", "b", "b", "b", "z", "z"]);
/// counter.decrement("z");
/// assert_eq!(counter.get("b"), 3);
/// assert_eq!(counter.get("z"), 1);
/// assert_eq!(counter.most_common_n(1), ["b"]);
/// assert_eq!(counter.total(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Counter<K, C = i64> {
    counts: HashMap<K, C>,
}

impl<K: Hash + Eq> Counter<K> {
    /// Create an empty counter
    pub fn new() -> Self {
        Counter {
            counts: HashMap::new(),
        }
    }

    /// Create an empty counter with room for at least `capacity` distinct keys
    pub fn with_capacity(capacity: usize) -> Self {
        Counter {
            counts: HashMap::with_capacity(capacity),
        }
    }

    /// Count the occurrences of every item in a slice
    pub fn from_slice(items: &[K]) -> Self
    where
        K: Clone,
    {
        items.iter().cloned().collect()
    }
}

impl Counter<char> {
    /// Count the characters of a string
    ///
    /// A character is a unicode scalar value, so multi-byte characters count once and a grapheme
    /// made of several code points counts each of them.
    pub fn from_chars(text: &str) -> Self {
        text.into()
    }
}

impl<K: Hash + Eq, C: Count> Counter<K, C> {
    // all mutation goes through here, which keeps every stored count positive
    fn adjust(&mut self, key: K, delta: C) {
        match self.counts.entry(key) {
            Entry::Occupied(mut entry) => {
                let count = entry.get().saturating_add(delta);
                if count > C::zero() {
                    *entry.get_mut() = count;
                } else {
                    entry.remove();
                }
            }
            Entry::Vacant(entry) => {
                if delta > C::zero() {
                    entry.insert(delta);
                }
            }
        }
    }

    /// Add one to the count of `key`
    pub fn increment(&mut self, key: K) {
        self.adjust(key, C::one());
    }

    /// Remove one from the count of `key`, dropping it when it reaches zero
    ///
    /// Decrementing an absent key does nothing.
    pub fn decrement<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let exhausted = match self.counts.get_mut(key) {
            Some(count) if *count > C::one() => {
                *count = *count - C::one();
                false
            }
            Some(_) => true,
            None => false,
        };
        if exhausted {
            self.counts.remove(key);
        }
    }

    /// Add `delta` to the count of `key`
    ///
    /// `delta` may be negative, and a key left with a count of zero or less is removed.
    pub fn add(&mut self, key: K, delta: C) {
        self.adjust(key, delta);
    }

    /// Subtract `delta` from the count of `key`, removing it if the count drops to zero or less
    pub fn subtract(&mut self, key: K, delta: C) {
        self.adjust(key, C::zero().saturating_sub(delta));
    }

    /// The count of `key`, zero if it's absent
    pub fn get<Q>(&self, key: &Q) -> C
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or_else(C::zero)
    }

    /// Drop `key` entirely, returning the count it had
    pub fn remove<Q>(&mut self, key: &Q) -> C
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.remove(key).unwrap_or_else(C::zero)
    }

    /// The number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if nothing has been counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Remove every key
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// The distinct keys, in arbitrary order
    pub fn elements(&self) -> Elements<'_, K, C> {
        Elements {
            inner: self.counts.keys(),
        }
    }

    /// The keys and their counts, in arbitrary order
    pub fn iter(&self) -> Iter<'_, K, C> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    /// The sum of every count
    pub fn total(&self) -> C {
        self.counts
            .values()
            .fold(C::zero(), |total, &count| total.saturating_add(count))
    }

    /// The key with the highest count and that count
    ///
    /// If several keys share the highest count, which one is returned is unspecified.
    pub fn most_common_entry(&self) -> Option<(&K, C)> {
        self.iter().max_by_key(|&(_, count)| count)
    }

    /// The key with the highest count, or the default key if the counter is empty
    ///
    /// If several keys share the highest count, which one is returned is unspecified.
    pub fn most_common(&self) -> K
    where
        K: Clone + Default,
    {
        self.most_common_entry()
            .map(|(key, _)| key.clone())
            .unwrap_or_default()
    }

    /// The `n` keys with the highest counts and their counts, in descending order of count
    ///
    /// `n` is clamped to the number of keys. Keys with equal counts come out in an unspecified
    /// order.
    pub fn most_common_counts(&self, n: usize) -> Vec<(&K, C)> {
        let n = n.min(self.counts.len());
        if n == 0 {
            return Vec::new();
        }
        let mut ranked: Vec<_> = self
            .counts
            .iter()
            .map(|(key, &count)| Ranked { key, count })
            .collect();
        if n < ranked.len() {
            ranked.select_nth_unstable_by(n - 1, Ranked::descending);
            ranked.truncate(n);
        }
        ranked.sort_unstable_by(Ranked::descending);
        ranked
            .into_iter()
            .map(|Ranked { key, count }| (key, count))
            .collect()
    }

    /// The `n` keys with the highest counts, in descending order of count
    ///
    /// See [Counter::most_common_counts].
    pub fn most_common_n(&self, n: usize) -> Vec<K>
    where
        K: Clone,
    {
        self.most_common_counts(n)
            .into_iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Add every count of `other` to this counter
    pub fn add_counter(&mut self, other: &Self)
    where
        K: Clone,
    {
        for (key, count) in other {
            self.adjust(key.clone(), count);
        }
    }

    /// Subtract every count of `other` from this counter, dropping keys that reach zero
    pub fn subtract_counter(&mut self, other: &Self)
    where
        K: Clone,
    {
        for (key, count) in other {
            self.adjust(key.clone(), C::zero().saturating_sub(count));
        }
    }
}

/// A key borrowed with its count while ranking
struct Ranked<'a, K, C> {
    key: &'a K,
    count: C,
}

impl<'a, K, C: Ord> Ranked<'a, K, C> {
    fn descending(left: &Self, right: &Self) -> Ordering {
        right.count.cmp(&left.count)
    }
}

impl<K, C> Default for Counter<K, C> {
    fn default() -> Self {
        Counter {
            counts: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq, C: PartialEq> PartialEq for Counter<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K: Hash + Eq, C: Eq> Eq for Counter<K, C> {}

impl<K: Hash + Eq, C: Count> From<HashMap<K, C>> for Counter<K, C> {
    /// Keep the positive counts of a map, ignoring the rest
    fn from(mut counts: HashMap<K, C>) -> Self {
        counts.retain(|_, count| *count > C::zero());
        Counter { counts }
    }
}

impl<'a, C: Count> From<&'a str> for Counter<char, C> {
    fn from(text: &'a str) -> Self {
        text.chars().collect()
    }
}

impl<K: Hash + Eq, C: Count> FromIterator<K> for Counter<K, C> {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = K>,
    {
        let mut counter = Counter::default();
        counter.extend(iter);
        counter
    }
}

impl<K: Hash + Eq, C: Count> Extend<K> for Counter<K, C> {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = K>,
    {
        for key in iter {
            self.increment(key);
        }
    }
}

impl<'a, K: Hash + Eq + Clone, C: Count> AddAssign<&'a Counter<K, C>> for Counter<K, C> {
    fn add_assign(&mut self, other: &'a Counter<K, C>) {
        self.add_counter(other);
    }
}

impl<'a, K: Hash + Eq + Clone, C: Count> SubAssign<&'a Counter<K, C>> for Counter<K, C> {
    fn sub_assign(&mut self, other: &'a Counter<K, C>) {
        self.subtract_counter(other);
    }
}

impl<'a, K, C: Copy> IntoIterator for &'a Counter<K, C> {
    type Item = (&'a K, C);
    type IntoIter = Iter<'a, K, C>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

impl<K, C> IntoIterator for Counter<K, C> {
    type Item = (K, C);
    type IntoIter = hash_map::IntoIter<K, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// An iterator over the keys of a [Counter]
#[derive(Debug, Clone)]
pub struct Elements<'a, K, C> {
    inner: hash_map::Keys<'a, K, C>,
}

impl<'a, K, C> Iterator for Elements<'a, K, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, C> ExactSizeIterator for Elements<'a, K, C> {}

impl<'a, K, C> FusedIterator for Elements<'a, K, C> {}

/// An iterator over the keys of a [Counter] and their counts
#[derive(Debug, Clone)]
pub struct Iter<'a, K, C> {
    inner: hash_map::Iter<'a, K, C>,
}

impl<'a, K, C: Copy> Iterator for Iter<'a, K, C> {
    type Item = (&'a K, C);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, &count)| (key, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, C: Copy> ExactSizeIterator for Iter<'a, K, C> {}

impl<'a, K, C: Copy> FusedIterator for Iter<'a, K, C> {}
