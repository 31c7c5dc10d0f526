/// Backing storage for the queue could not be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationError;

/// Error types for queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueueError {
    /// Initial or grown storage could not be allocated. The queue is left as
    /// it was before the call.
    Allocation,
    /// The operation needs at least one entry but the queue is empty.
    Empty,
    /// Initial capacity is zero or the growth factor is below two.
    InvalidSettings,
}

impl std::fmt::Display for QueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allocation => write!(f, "could not allocate queue storage"),
            Self::Empty => write!(f, "queue is empty"),
            Self::InvalidSettings => write!(f, "invalid queue settings"),
        }
    }
}

impl std::error::Error for QueueError {}

impl From<AllocationError> for QueueError {
    fn from(_: AllocationError) -> Self {
        Self::Allocation
    }
}

pub type QueueResult<T> = Result<T, QueueError>;
