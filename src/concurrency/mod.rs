//! Concurrency support for the containers
//!
//! The containers are plain data structures; sharing them between threads is
//! opt-in through the cooperative lock in [`shared`].

pub mod shared;

pub use shared::{
    Shared, SharedList, SharedQueue, SharedReadGuard, SharedWriteGuard,
};
