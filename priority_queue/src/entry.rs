/// A single queued item. Higher `priority` values leave the queue first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub priority: i32,
    pub value: i32,
}

impl Entry {
    pub fn new(priority: i32, value: i32) -> Self {
        Self { priority, value }
    }
}
