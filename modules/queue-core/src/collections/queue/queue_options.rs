use super::{ArrayQueue, DynQueue, LinkedQueue, OverflowPolicy, QueueError, QueueSize};

#[cfg(test)]
mod tests;

/// Construction options selecting the backing structure of a queue.
///
/// A limitless capacity selects the linked backend; a limited one selects the array backend with
/// the configured overflow policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueOptions {
  /// Capacity of the queue.
  pub capacity: QueueSize,
  /// Behaviour of a limited queue once it is full.
  pub policy:   OverflowPolicy,
}

impl QueueOptions {
  /// Options for an unbounded linked queue.
  #[must_use]
  pub const fn unbounded() -> Self {
    Self { capacity: QueueSize::limitless(), policy: OverflowPolicy::Block }
  }

  /// Options for an array queue that rejects offers beyond `capacity`.
  ///
  /// # Arguments
  /// - `capacity`: Maximum number of stored elements
  #[must_use]
  pub const fn bounded(capacity: usize) -> Self {
    Self { capacity: QueueSize::limited(capacity), policy: OverflowPolicy::Block }
  }

  /// Options for an array queue that starts with `initial` slots and doubles on demand.
  ///
  /// # Arguments
  /// - `initial`: Number of slots reserved up front
  #[must_use]
  pub const fn growable(initial: usize) -> Self {
    Self { capacity: QueueSize::limited(initial), policy: OverflowPolicy::Grow }
  }

  /// Sets the overflow policy used by a limited queue.
  #[must_use]
  pub const fn with_policy(mut self, policy: OverflowPolicy) -> Self {
    self.policy = policy;
    self
  }

  /// Returns the configured capacity limit, `None` for an unbounded queue.
  #[must_use]
  pub const fn capacity_limit(&self) -> Option<usize> {
    self.capacity.limit()
  }

  /// Builds the queue described by these options.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidArgument`] for a zero capacity limit and
  /// [`QueueError::AllocError`] when the initial storage cannot be reserved.
  pub fn build<T, P>(&self) -> Result<DynQueue<T, P>, QueueError> {
    match self.capacity {
      | QueueSize::Limitless => Ok(DynQueue::Linked(LinkedQueue::new())),
      | QueueSize::Limited(capacity) => ArrayQueue::with_capacity(capacity, self.policy).map(DynQueue::Array),
    }
  }
}

impl Default for QueueOptions {
  fn default() -> Self {
    Self::unbounded()
  }
}
