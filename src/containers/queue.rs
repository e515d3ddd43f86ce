//! Queue: singly linked FIFO with O(1) enqueue and dequeue
//!
//! Nodes are boxed and each node owns its successor. The queue keeps a
//! non-owning pointer to the last node so enqueue never walks the chain, and a
//! counter so `len()` never does either. Interior removal (`remove`,
//! `remove_where`) unlinks matches in place, keeps the survivors in their
//! original order and then re-derives the tail pointer.
//!
//! Like [`List`](crate::List), the queue does no locking of its own; use
//! [`Queue::into_shared`] when several threads need it.

use crate::concurrency::Shared;
use crate::config::RenderConfig;
use crate::containers::compare::eq_to;
use crate::containers::render::{Preview, Stringable};
use crate::error::{CollectionError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::FusedIterator;
use std::ptr::NonNull;

type Link<E> = Option<Box<Node<E>>>;

struct Node<E> {
    value: E,
    next: Link<E>,
}

/// First-in-first-out queue backed by linked nodes.
///
/// # Examples
///
/// ```rust
/// use collectkit::Queue;
///
/// let mut queue = Queue::from_values([1, 2, 3]);
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.peek(), Some(&2));
/// assert_eq!(queue.len(), 2);
/// ```
pub struct Queue<E> {
    head: Link<E>,
    /// Last node of the chain owned through `head`; `None` iff `head` is `None`
    tail: Option<NonNull<Node<E>>>,
    len: usize,
}

impl<E> Queue<E> {
    /// Create an empty queue
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create a queue pre-seeded with `values`, the first value at the head
    pub fn from_values<I: IntoIterator<Item = E>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Number of queued elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the queue holds at least one element
    #[inline]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Append `value` at the tail.
    ///
    /// Always returns `true`; the queue is unbounded.
    pub fn enqueue(&mut self, value: E) -> bool {
        let slot = match self.tail {
            // SAFETY: `tail` points at the last node of the chain owned by
            // `head`, and `&mut self` guarantees nothing else borrows it.
            Some(mut tail) => unsafe { &mut tail.as_mut().next },
            None => &mut self.head,
        };
        let node = slot.insert(Box::new(Node { value, next: None }));
        self.tail = Some(NonNull::from(&mut **node));
        self.len += 1;
        true
    }

    /// Append every value at the tail, in iteration order
    pub fn enqueue_all<I: IntoIterator<Item = E>>(&mut self, values: I) {
        for value in values {
            self.enqueue(value);
        }
    }

    /// Remove and return the head element
    pub fn dequeue(&mut self) -> Option<E> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            node.value
        })
    }

    /// Head element without removing it
    #[inline]
    pub fn peek(&self) -> Option<&E> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Drop every node
    pub fn clear(&mut self) {
        // Unlink one node at a time so long chains don't recurse in Drop
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.tail = None;
        self.len = 0;
    }

    /// Remove every element matching `predicate`, keeping the FIFO order of
    /// the rest. Returns how many elements were removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&E) -> bool,
    {
        let before = self.len;
        let mut guard = RelinkTail(self);
        let queue = &mut *guard.0;

        // The predicate only ever sees linked nodes, so a panic inside it
        // leaves a well-formed chain with an accurate counter.
        let mut cursor = &mut queue.head;
        loop {
            let matched = match cursor.as_deref() {
                Some(node) => predicate(&node.value),
                None => break,
            };
            if matched {
                if let Some(mut node) = cursor.take() {
                    *cursor = node.next.take();
                    queue.len -= 1;
                }
            } else {
                match cursor {
                    Some(node) => cursor = &mut node.next,
                    None => break,
                }
            }
        }

        before - queue.len
    }

    /// Remove every element structurally equal to `value`
    pub fn remove(&mut self, value: &E) -> usize
    where
        E: PartialEq,
    {
        self.remove_where(eq_to(value))
    }

    /// Check whether any element matches `predicate`
    pub fn contains_where<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&E) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Check whether any element is structurally equal to `value`
    pub fn contains(&self, value: &E) -> bool
    where
        E: PartialEq,
    {
        self.contains_where(eq_to(value))
    }

    /// Snapshot of the elements from head to tail
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Move the queue behind a cooperative shared/exclusive lock
    pub fn into_shared(self) -> Shared<Self> {
        Shared::new(self)
    }

    /// Render the debug preview using `config.preview_limit`
    pub fn render_with(&self, config: &RenderConfig) -> String
    where
        E: Stringable,
    {
        Preview::new("LinkedQueue", self.len, self.iter(), config.preview_limit).to_string()
    }

    /// Point `tail` at the last node after the chain was restructured
    fn relink_tail(&mut self) {
        let mut tail = None;
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.next.is_none() {
                tail = Some(NonNull::from(node));
                break;
            }
            cursor = node.next.as_deref_mut();
        }
        self.tail = tail;
    }
}

impl<E: Serialize> Queue<E> {
    /// Encode the elements, head first, as a JSON array
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

impl<E: DeserializeOwned> Queue<E> {
    /// Decode a queue from a JSON array; the first array element becomes the head
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| {
            log::debug!("Failed to decode Queue from JSON: {}", e);
            CollectionError::decode(e)
        })
    }

    /// Replace the contents wholesale with the decoded JSON array.
    ///
    /// On error the queue keeps its previous contents.
    pub fn load_json(&mut self, data: &str) -> Result<()> {
        *self = Self::from_json(data)?;
        Ok(())
    }
}

/// Re-derives `tail` when dropped, including during unwinding. Walking the
/// chain through `&mut` reborrows invalidates the previous tail pointer.
struct RelinkTail<'a, E>(&'a mut Queue<E>);

impl<E> Drop for RelinkTail<'_, E> {
    fn drop(&mut self) {
        self.0.relink_tail();
    }
}

impl<E> Drop for Queue<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<E> Default for Queue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for Queue<E> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<E: PartialEq> PartialEq for Queue<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for Queue<E> {}

impl<E: fmt::Debug> fmt::Debug for Queue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: Stringable> fmt::Display for Queue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limit = RenderConfig::default().preview_limit;
        fmt::Display::fmt(&Preview::new("LinkedQueue", self.len, self.iter(), limit), f)
    }
}

impl<E: Stringable> Stringable for Queue<E> {
    fn stringify(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<E> From<Vec<E>> for Queue<E> {
    fn from(values: Vec<E>) -> Self {
        values.into_iter().collect()
    }
}

impl<E> FromIterator<E> for Queue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.enqueue_all(iter);
        queue
    }
}

impl<E> Extend<E> for Queue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

impl<E: Serialize> Serialize for Queue<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, E: Deserialize<'de>> Deserialize<'de> for Queue<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<E>::deserialize(deserializer).map(Queue::from)
    }
}

// SAFETY: the tail pointer only aliases a node owned through `head`, so the
// queue is exactly as thread-safe as a chain of `Box<Node<E>>`.
unsafe impl<E: Send> Send for Queue<E> {}
unsafe impl<E: Sync> Sync for Queue<E> {}

/// Borrowing iterator over a [`Queue`], head to tail
pub struct Iter<'a, E> {
    next: Option<&'a Node<E>>,
    remaining: usize,
}

impl<'a, E> Clone for Iter<'a, E> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, E> ExactSizeIterator for Iter<'a, E> {}

impl<'a, E> FusedIterator for Iter<'a, E> {}

/// Owning iterator that dequeues from a [`Queue`]
pub struct IntoIter<E>(Queue<E>);

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> IntoIterator for Queue<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, E> IntoIterator for &'a Queue<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Create a [`Queue`] holding the given elements, the first at the head.
///
/// ```rust
/// use collectkit::queue;
///
/// let mut queue = queue![1, 2, 3];
/// assert_eq!(queue.dequeue(), Some(1));
/// ```
#[macro_export]
macro_rules! queue {
    () => {
        $crate::Queue::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Queue::from(vec![$($value),+])
    };
}
