use super::entry::Entry;
use super::error::AllocationError;

// storage for heap entries. the live entries are exactly the
// vec's elements, while `capacity` is the slot count that was
// reserved up front and only changes through `grow`
#[derive(Debug)]
pub struct EntryBuffer {
    entries: Vec<Entry>,
    capacity: usize,
}

impl EntryBuffer {
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        Ok(Self {
            entries: allocate(capacity)?,
            capacity,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    pub fn first(&self) -> Option<Entry> {
        self.entries.first().copied()
    }

    pub fn priority(&self, index: usize) -> i32 {
        self.entries[index].priority
    }

    pub fn replace(&mut self, index: usize, entry: Entry) -> Entry {
        std::mem::replace(&mut self.entries[index], entry)
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
    }

    // assumes the buffer isn't full
    pub fn push(&mut self, entry: Entry) {
        debug_assert!(!self.is_full());
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<Entry> {
        self.entries.pop()
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    /// Moves the live entries into a new allocation `factor` times as large.
    ///
    /// On failure nothing changes: the old allocation, its entries and the
    /// recorded capacity are all kept.
    pub fn grow(&mut self, factor: usize) -> Result<(), AllocationError> {
        let capacity = self.capacity.checked_mul(factor).ok_or(AllocationError)?;
        let mut entries = allocate(capacity)?;
        entries.extend_from_slice(&self.entries);
        self.entries = entries;
        self.capacity = capacity;
        Ok(())
    }
}

fn allocate(capacity: usize) -> Result<Vec<Entry>, AllocationError> {
    let mut entries = Vec::new();
    entries
        .try_reserve_exact(capacity)
        .map_err(|_| AllocationError)?;
    Ok(entries)
}
