use super::error::{QueueError, QueueResult};
use serde::Deserialize;
use std::io::Read;

pub const INITIAL_CAPACITY: usize = 10;
pub const GROWTH_FACTOR: usize = 2;

/// Storage policy of a queue. The defaults (10 initial slots, doubling on
/// overflow) are what existing callers expect from `PriorityQueue::new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    pub initial_capacity: usize,
    pub growth_factor: usize,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            initial_capacity: INITIAL_CAPACITY,
            growth_factor: GROWTH_FACTOR,
        }
    }
}

impl QueueSettings {
    /// Reads settings from JSON. Missing fields fall back to the defaults.
    pub fn from_json_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    pub fn validate(&self) -> QueueResult<()> {
        if self.initial_capacity == 0 || self.growth_factor < 2 {
            return Err(QueueError::InvalidSettings);
        }
        Ok(())
    }
}
