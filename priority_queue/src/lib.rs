//! A max-priority queue of `(priority, value)` integer pairs backed by a
//! binary heap in a single growable array.
//!
//! The queue starts with room for [`INITIAL_CAPACITY`] entries and multiplies
//! its storage by [`GROWTH_FACTOR`] whenever an insert finds it full. Storage
//! never shrinks. Entries with equal priority leave in an unspecified order.
//!
//! ```
//! use priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new().unwrap();
//! queue.insert(21, 10).unwrap();
//! queue.insert(35, 5).unwrap();
//! assert_eq!(queue.peek_max(), Some(5));
//! queue.remove_max().unwrap();
//! assert_eq!(queue.peek_max(), Some(10));
//! ```

mod buffer;
mod entry;
mod error;
mod impls;
mod settings;
mod tree;

use buffer::EntryBuffer;
pub use entry::Entry;
pub use error::{QueueError, QueueResult};
pub use settings::{QueueSettings, GROWTH_FACTOR, INITIAL_CAPACITY};

/// Owned handle to a heap-ordered queue.
///
/// For every live index `i > 0` the priority at `(i - 1) / 2` is at least the
/// priority at `i`, so the maximum always sits at index 0.
pub struct PriorityQueue {
    entries: EntryBuffer,
    growth_factor: usize,
}
