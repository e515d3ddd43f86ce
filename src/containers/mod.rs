//! Generic container types
//!
//! ## Containers
//!
//! - **`List<E>`** - Contiguous, randomly indexable sequence
//! - **`Queue<E>`** - Linked first-in-first-out queue
//!
//! Both share the same external contracts: `Option` for absence, panics for
//! precondition violations, JSON arrays for serialization and the bounded
//! debug rendering from [`render`].
//!
//! ## Adapters
//!
//! - [`compare`] - structural equality default and comparator-driven extremum
//! - [`render`] - the `Stringable` capability and the preview format

pub mod compare;
mod list;
pub mod queue;
pub mod render;

pub use list::List;
pub use queue::Queue;
pub use render::{short_type_name, Stringable};
