//! Generic collection utilities
//!
//! - [Counter], a multiset of hashable keys that can rank them by frequency
//! - [Set], a hash set with union, intersection, difference and complement
//! - [slice], small helpers like [slice::unique] and [slice::index_of]
//!
//! Everything here is single threaded and in memory. No operation fails: absent keys count as
//! zero, and searches that find nothing return [None] or `false`.
//!
//! Iteration order of [Counter] and [Set] is unspecified, and so is the order of keys with equal
//! counts when ranking.
#![warn(missing_docs)]

pub mod counter;
pub mod set;
pub mod slice;

pub use counter::{Count, Counter};
pub use set::Set;
