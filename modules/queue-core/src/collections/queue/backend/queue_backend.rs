use crate::collections::queue::{OfferOutcome, QueueDescriptor, QueueError, QueueSize};

/// Capability trait implemented by every backing structure of the queue ADT.
pub trait QueueBackend<T> {
  /// Appends an element at the tail in arrival order.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] when a fixed-capacity backend has no free slot, or
  /// [`QueueError::AllocError`] when storage for the element cannot be obtained. The queue is left
  /// unmodified in both cases.
  fn offer(&mut self, item: T) -> Result<OfferOutcome, QueueError>;

  /// Removes and returns the element at the head.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when there is nothing to remove.
  fn poll(&mut self) -> Result<T, QueueError>;

  /// Returns the number of elements currently stored.
  fn len(&self) -> usize;

  /// Returns the maximum number of elements the backend will hold.
  fn capacity(&self) -> QueueSize;

  /// Reports whether the storage is dynamic and its maximum capacity.
  fn descriptor(&self) -> QueueDescriptor;

  /// Releases every stored element and returns how many were released.
  fn clear(&mut self) -> usize;

  /// Indicates whether the queue is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Indicates whether the queue is full. Always `false` for unbounded backends.
  fn is_full(&self) -> bool {
    self.capacity().is_reached_by(self.len())
  }

  /// Returns the element `position` steps behind the head without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidPosition`] when `position >= len()`.
  #[cfg(any(test, feature = "debug-peek"))]
  fn peek_at(&self, position: usize) -> Result<&T, QueueError>;
}
