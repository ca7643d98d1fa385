use super::{ArrayQueue, LinkedQueue, PriorityBackend, QueueBackend};
use crate::collections::queue::{OfferOutcome, QueueDescriptor, QueueError, QueueSize};

#[cfg(test)]
mod tests;

/// Queue whose backing structure is chosen at runtime, typically from
/// [`QueueOptions`](crate::collections::queue::QueueOptions).
#[derive(Debug)]
pub enum DynQueue<T, P = i32> {
  /// Unbounded linked storage.
  Linked(LinkedQueue<T, P>),
  /// Fixed-capacity ring storage.
  Array(ArrayQueue<T, P>),
}

impl<T, P> From<LinkedQueue<T, P>> for DynQueue<T, P> {
  fn from(queue: LinkedQueue<T, P>) -> Self {
    DynQueue::Linked(queue)
  }
}

impl<T, P> From<ArrayQueue<T, P>> for DynQueue<T, P> {
  fn from(queue: ArrayQueue<T, P>) -> Self {
    DynQueue::Array(queue)
  }
}

impl<T, P> QueueBackend<T> for DynQueue<T, P> {
  fn offer(&mut self, item: T) -> Result<OfferOutcome, QueueError> {
    match self {
      | DynQueue::Linked(queue) => queue.offer(item),
      | DynQueue::Array(queue) => queue.offer(item),
    }
  }

  fn poll(&mut self) -> Result<T, QueueError> {
    match self {
      | DynQueue::Linked(queue) => queue.poll(),
      | DynQueue::Array(queue) => queue.poll(),
    }
  }

  fn len(&self) -> usize {
    match self {
      | DynQueue::Linked(queue) => queue.len(),
      | DynQueue::Array(queue) => queue.len(),
    }
  }

  fn capacity(&self) -> QueueSize {
    match self {
      | DynQueue::Linked(queue) => queue.capacity(),
      | DynQueue::Array(queue) => queue.capacity(),
    }
  }

  fn descriptor(&self) -> QueueDescriptor {
    match self {
      | DynQueue::Linked(queue) => queue.descriptor(),
      | DynQueue::Array(queue) => queue.descriptor(),
    }
  }

  fn clear(&mut self) -> usize {
    match self {
      | DynQueue::Linked(queue) => queue.clear(),
      | DynQueue::Array(queue) => queue.clear(),
    }
  }

  fn is_full(&self) -> bool {
    match self {
      | DynQueue::Linked(queue) => QueueBackend::is_full(queue),
      | DynQueue::Array(queue) => QueueBackend::is_full(queue),
    }
  }

  #[cfg(any(test, feature = "debug-peek"))]
  fn peek_at(&self, position: usize) -> Result<&T, QueueError> {
    match self {
      | DynQueue::Linked(queue) => queue.peek_at(position),
      | DynQueue::Array(queue) => queue.peek_at(position),
    }
  }
}

impl<T, P: Ord> PriorityBackend<T, P> for DynQueue<T, P> {
  fn offer_with_priority(&mut self, item: T, priority: P) -> Result<OfferOutcome, QueueError> {
    match self {
      | DynQueue::Linked(queue) => queue.offer_with_priority(item, priority),
      | DynQueue::Array(queue) => queue.offer_with_priority(item, priority),
    }
  }

  fn peek_priority(&self) -> Option<&P> {
    match self {
      | DynQueue::Linked(queue) => queue.peek_priority(),
      | DynQueue::Array(queue) => queue.peek_priority(),
    }
  }
}
