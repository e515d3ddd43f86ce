//! # collectkit: generic List and Queue containers
//!
//! This crate provides two containers parameterized over any element type:
//!
//! - **`List<E>`**: ordered, randomly indexable sequence with callback-driven
//!   search, filtering, sorting, deduplication and chunking
//! - **`Queue<E>`**: linked FIFO with O(1) enqueue/dequeue and
//!   predicate-based interior removal
//!
//! Both serialize to and from JSON arrays, render a bounded debug preview via
//! `Display`, and can be moved behind a cooperative reader-writer lock
//! ([`Shared`]) when several threads need them.
//!
//! ## Quick Start
//!
//! ```rust
//! use collectkit::{list, queue, List, Queue};
//!
//! let mut list = list![3, 1, 2];
//! list.sort_by(|a, b| a.cmp(b));
//! assert_eq!(list.as_slice(), &[1, 2, 3]);
//! assert_eq!(list.to_json()?, "[1,2,3]");
//!
//! let mut queue = queue![1, 2, 3];
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.peek(), Some(&2));
//!
//! let decoded: Queue<i32> = Queue::from_json("[2,3]")?;
//! assert_eq!(decoded, queue);
//!
//! let empty: List<u8> = List::new();
//! assert_eq!(empty.to_string(), "List[u8](len=0){\n}");
//! # Ok::<(), collectkit::CollectionError>(())
//! ```
//!
//! `Display` on a container requires its element type to implement
//! [`Stringable`]. Primitives, `String` and the common std wrappers already
//! do; for your own types add `impl Stringable for MyType {}` to render them
//! through `Debug`, or override `stringify` for custom text.
//!
//! ## Error Model
//!
//! - Absence (empty container, no match) is an `Option`
//! - Precondition violations (index out of range, extremum of an empty list,
//!   zero chunk size) panic
//! - Malformed JSON is a [`CollectionError::Decode`]

#![warn(missing_docs)]

pub mod concurrency;
pub mod config;
pub mod containers;
pub mod error;

pub use concurrency::{Shared, SharedList, SharedQueue};
pub use config::{Config, RenderConfig};
pub use containers::{List, Queue, Stringable};
pub use error::{CollectionError, Result};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
