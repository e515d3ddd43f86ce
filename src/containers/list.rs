//! List: contiguous, randomly indexable sequence with callback-driven queries
//!
//! `List<E>` wraps a `Vec<E>` and layers the query and mutation vocabulary of
//! the toolkit on top of it: head/tail insertion and removal, predicate-based
//! search and filtering, comparator-driven sorting and extremum queries,
//! adjacent deduplication and chunking.
//!
//! ## Contracts
//!
//! - **Absence** is reported through `Option` (`pop`, `shift`, `first`, ...).
//! - **Preconditions** are the caller's job: out-of-range indices, `min_by` /
//!   `max_by` on an empty list and `chunk(0)` panic.
//! - **No internal locking**: wrap the list in [`Shared`](crate::Shared) via
//!   [`List::into_shared`] to coordinate access across threads.

use crate::concurrency::Shared;
use crate::config::RenderConfig;
use crate::containers::compare::{eq_to, extremum_by, Extremum};
use crate::containers::render::{Preview, Stringable};
use crate::error::{CollectionError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

/// Ordered, resizable sequence of `E` with index 0 as the logical head.
///
/// # Examples
///
/// ```rust
/// use collectkit::List;
///
/// let mut list = List::from(vec![1, 2, 3, 4, 5, 6, 7]);
/// list.remove_where(|v| v % 2 == 1);
/// assert_eq!(list.as_slice(), &[2, 4, 6]);
///
/// assert_eq!(list.shift(), Some(2));
/// assert_eq!(list.pop(), Some(6));
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct List<E> {
    items: Vec<E>,
}

impl<E> List<E> {
    /// Create an empty list
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty list with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Create a list pre-seeded with `values` in iteration order
    pub fn from_values<I: IntoIterator<Item = E>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Number of stored elements
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if the list holds at least one element
    #[inline]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Append `value` at the tail
    #[inline]
    pub fn push(&mut self, value: E) {
        self.items.push(value);
    }

    /// Append every value at the tail, in argument order
    pub fn push_all<I: IntoIterator<Item = E>>(&mut self, values: I) {
        self.items.extend(values);
    }

    /// Remove and return the tail element
    #[inline]
    pub fn pop(&mut self) -> Option<E> {
        self.items.pop()
    }

    /// Remove and return the head element
    pub fn shift(&mut self) -> Option<E> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Insert `value` at the head
    pub fn unshift(&mut self, value: E) {
        self.items.insert(0, value);
    }

    /// Insert every value at the head, keeping their argument order.
    ///
    /// `unshift_all([1, 2])` on `[3]` gives `[1, 2, 3]`.
    pub fn unshift_all<I: IntoIterator<Item = E>>(&mut self, values: I) {
        self.items.splice(0..0, values);
    }

    /// Element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> &E {
        &self.items[index]
    }

    /// Replace the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: E) {
        self.items[index] = value;
    }

    /// Remove the element at `index`, shifting later elements left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> E {
        self.items.remove(index)
    }

    /// Remove every element matching `predicate` in a single compacting pass.
    /// Returns how many elements were removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&E) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    /// Remove every element structurally equal to `value`
    pub fn remove(&mut self, value: &E) -> usize
    where
        E: PartialEq,
    {
        self.remove_where(eq_to(value))
    }

    /// Drop all elements
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Check whether any element matches `predicate`
    pub fn contains_where<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&E) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// Check whether any element is structurally equal to `value`
    pub fn contains(&self, value: &E) -> bool
    where
        E: PartialEq,
    {
        self.contains_where(eq_to(value))
    }

    /// Head element
    #[inline]
    pub fn first(&self) -> Option<&E> {
        self.items.first()
    }

    /// Head element, or `default` when the list is empty
    pub fn first_or(&self, default: E) -> E
    where
        E: Clone,
    {
        self.first().cloned().unwrap_or(default)
    }

    /// First element, scanning from the head, that matches `predicate`
    pub fn first_where<F>(&self, mut predicate: F) -> Option<&E>
    where
        F: FnMut(&E) -> bool,
    {
        self.items.iter().find(|item| predicate(*item))
    }

    /// First match of `predicate`, or `default` when nothing matches
    pub fn first_where_or<F>(&self, predicate: F, default: E) -> E
    where
        E: Clone,
        F: FnMut(&E) -> bool,
    {
        self.first_where(predicate).cloned().unwrap_or(default)
    }

    /// Tail element
    #[inline]
    pub fn last(&self) -> Option<&E> {
        self.items.last()
    }

    /// Tail element, or `default` when the list is empty
    pub fn last_or(&self, default: E) -> E
    where
        E: Clone,
    {
        self.last().cloned().unwrap_or(default)
    }

    /// First element, scanning from the tail, that matches `predicate`
    pub fn last_where<F>(&self, mut predicate: F) -> Option<&E>
    where
        F: FnMut(&E) -> bool,
    {
        self.items.iter().rev().find(|item| predicate(*item))
    }

    /// Last match of `predicate`, or `default` when nothing matches
    pub fn last_where_or<F>(&self, predicate: F, default: E) -> E
    where
        E: Clone,
        F: FnMut(&E) -> bool,
    {
        self.last_where(predicate).cloned().unwrap_or(default)
    }

    /// Index of the first element matching `predicate`
    pub fn index_of_where<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&E) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// Index of the first element structurally equal to `value`
    pub fn index_of(&self, value: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        self.index_of_where(eq_to(value))
    }

    /// Snapshot of the half-open range `[from, to)` with its own storage.
    ///
    /// # Panics
    ///
    /// Panics if `from > to` or `to > len()`.
    pub fn sub(&self, from: usize, to: usize) -> List<E>
    where
        E: Clone,
    {
        Self {
            items: self.items[from..to].to_vec(),
        }
    }

    /// New list holding, in order, every element matching `predicate`
    pub fn filter<F>(&self, mut predicate: F) -> List<E>
    where
        E: Clone,
        F: FnMut(&E) -> bool,
    {
        self.items
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }

    /// Collapse runs of adjacent elements for which `same(earlier, later)`
    /// holds, keeping the first element of each run.
    pub fn compact_by<F>(&mut self, mut same: F)
    where
        F: FnMut(&E, &E) -> bool,
    {
        // dedup_by hands over (later, earlier)
        self.items.dedup_by(|later, earlier| same(earlier, later));
    }

    /// Collapse runs of adjacent structurally equal elements
    pub fn compact(&mut self)
    where
        E: PartialEq,
    {
        self.items.dedup();
    }

    /// Smallest element under `cmp`; the earliest one wins on ties.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn min_by<F>(&self, cmp: F) -> &E
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        match extremum_by(&self.items, cmp, Extremum::Min) {
            Some(value) => value,
            None => panic!("min_by called on an empty List"),
        }
    }

    /// Largest element under `cmp`; the earliest one wins on ties.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn max_by<F>(&self, cmp: F) -> &E
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        match extremum_by(&self.items, cmp, Extremum::Max) {
            Some(value) => value,
            None => panic!("max_by called on an empty List"),
        }
    }

    /// Stable in-place sort under `cmp`
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        self.items.sort_by(cmp);
    }

    /// Split into consecutive sub-lists of at most `size` elements.
    ///
    /// The last chunk may be shorter. An empty list yields a single empty
    /// chunk.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    pub fn chunk(&self, size: usize) -> List<List<E>>
    where
        E: Clone,
    {
        assert!(size > 0, "chunk size must be greater than zero");

        if self.items.is_empty() {
            return List::from(vec![List::new()]);
        }
        self.items
            .chunks(size)
            .map(|chunk| List::from(chunk.to_vec()))
            .collect()
    }

    /// Visit elements in order with their index; stops the first time
    /// `callback` returns `false`.
    pub fn each<F>(&self, mut callback: F)
    where
        F: FnMut(usize, &E) -> bool,
    {
        for (index, value) in self.items.iter().enumerate() {
            if !callback(index, value) {
                break;
            }
        }
    }

    /// Reverse the element order in place
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Borrow the elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Snapshot of the elements in current order
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.items.clone()
    }

    /// Consume the list and return its backing vector
    pub fn into_vec(self) -> Vec<E> {
        self.items
    }

    /// Iterate over the elements from head to tail
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Move the list behind a cooperative shared/exclusive lock
    pub fn into_shared(self) -> Shared<Self> {
        Shared::new(self)
    }

    /// Render the debug preview using `config.preview_limit`
    pub fn render_with(&self, config: &RenderConfig) -> String
    where
        E: Stringable,
    {
        Preview::new("List", self.len(), self.items.iter(), config.preview_limit).to_string()
    }
}

impl<E: Serialize> List<E> {
    /// Encode the elements, in order, as a JSON array
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(CollectionError::encode)
    }

    /// Encode as JSON, pretty-printed when `config.pretty_json` is set
    pub fn to_json_with(&self, config: &RenderConfig) -> Result<String> {
        let encoded = if config.pretty_json {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        encoded.map_err(CollectionError::encode)
    }
}

impl<E: DeserializeOwned> List<E> {
    /// Decode a list from a JSON array
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| {
            log::debug!("Failed to decode List from JSON: {}", e);
            CollectionError::decode(e)
        })
    }

    /// Replace the contents wholesale with the decoded JSON array.
    ///
    /// On error the list keeps its previous contents.
    pub fn load_json(&mut self, data: &str) -> Result<()> {
        *self = Self::from_json(data)?;
        Ok(())
    }
}

impl<E> Default for List<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Vec<E>> for List<E> {
    fn from(items: Vec<E>) -> Self {
        Self { items }
    }
}

impl<E> From<List<E>> for Vec<E> {
    fn from(list: List<E>) -> Self {
        list.items
    }
}

impl<E> FromIterator<E> for List<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for List<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<E> IntoIterator for List<E> {
    type Item = E;
    type IntoIter = vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a List<E> {
    type Item = &'a E;
    type IntoIter = slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E> Index<usize> for List<E> {
    type Output = E;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<E> IndexMut<usize> for List<E> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}

impl<E: fmt::Debug> fmt::Debug for List<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<E: Stringable> fmt::Display for List<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limit = RenderConfig::default().preview_limit;
        fmt::Display::fmt(&Preview::new("List", self.len(), self.items.iter(), limit), f)
    }
}

impl<E: Stringable> Stringable for List<E> {
    fn stringify(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Create a [`List`] holding the given elements, like `vec!`.
///
/// ```rust
/// use collectkit::list;
///
/// let list = list![1, 2, 3];
/// assert_eq!(list.len(), 3);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::List::from(vec![$($value),+])
    };
}
