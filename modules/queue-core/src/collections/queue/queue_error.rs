
/// Errors reported by queue operations.
///
/// Every failing operation leaves the queue exactly as it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueueError {
  /// The queue handle is absent, typically because it has already been destroyed.
  InvalidQueue,
  /// Storage for a new element could not be allocated.
  AllocError,
  /// An argument was rejected before the queue was touched.
  InvalidArgument,
  /// A positional lookup referred past the last stored element.
  InvalidPosition,
  /// The queue cannot accept new elements.
  Full,
  /// The queue has no elements to consume.
  Empty,
}

impl core::fmt::Display for QueueError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      | QueueError::InvalidQueue => f.write_str("queue handle is absent"),
      | QueueError::AllocError => f.write_str("failed to allocate queue storage"),
      | QueueError::InvalidArgument => f.write_str("invalid argument"),
      | QueueError::InvalidPosition => f.write_str("position is outside the queue"),
      | QueueError::Full => f.write_str("queue is full"),
      | QueueError::Empty => f.write_str("queue is empty"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for QueueError {}
