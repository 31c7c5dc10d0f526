mod sift;

use super::tree;
use super::{Entry, EntryBuffer, PriorityQueue, QueueError, QueueResult, QueueSettings};
use std::fmt;

impl PriorityQueue {
    /// Creates an empty queue with the default settings (capacity 10,
    /// doubling growth).
    pub fn new() -> QueueResult<Self> {
        Self::with_settings(QueueSettings::default())
    }

    pub fn with_settings(settings: QueueSettings) -> QueueResult<Self> {
        settings.validate()?;
        Ok(Self {
            entries: EntryBuffer::with_capacity(settings.initial_capacity)?,
            growth_factor: settings.growth_factor,
        })
    }

    /// Adds an entry, growing the storage first if it is full.
    ///
    /// If the storage cannot grow the queue is left exactly as it was and
    /// `QueueError::Allocation` is returned.
    pub fn insert(&mut self, priority: i32, value: i32) -> QueueResult<()> {
        if self.entries.is_full() {
            self.entries.grow(self.growth_factor)?;
        }
        self.entries.push(Entry::new(priority, value));
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Value of the highest priority entry, or `None` if the queue is empty.
    pub fn peek_max(&self) -> Option<i32> {
        self.peek_max_entry().map(|entry| entry.value)
    }

    pub fn peek_max_entry(&self) -> Option<Entry> {
        self.entries.first()
    }

    /// Removes and returns the highest priority entry.
    pub fn pop_max(&mut self) -> Option<Entry> {
        let last = self.entries.pop()?;
        if self.entries.len() == 0 {
            return Some(last);
        }
        let max = self.entries.replace(tree::root(), last);
        self.sift_down(tree::root());
        Some(max)
    }

    /// Discards the highest priority entry. Callers that need its value
    /// should `peek_max` first, or use `pop_max`.
    pub fn remove_max(&mut self) -> QueueResult<()> {
        self.pop_max().map(|_| ()).ok_or(QueueError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Releases the queue and its storage. The handle is consumed, so it
    /// cannot be used afterwards.
    pub fn destroy(self) {
        drop(self);
    }
}

// shows the logical queue only, not the storage policy
impl fmt::Debug for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("size", &self.len())
            .field("capacity", &self.capacity())
            .field("entries", &self.entries.as_slice())
            .finish()
    }
}
