use super::QueueBackend;
use crate::collections::queue::{OfferOutcome, QueueError};

/// Extension trait for backends supporting priority-ordered insertion.
///
/// Lower keys dequeue sooner. Insertion is stable: an element lands after every element already
/// stored with an equal key. Elements appended through [`QueueBackend::offer`] carry no key and
/// rank after every keyed element.
pub trait PriorityBackend<T, P: Ord>: QueueBackend<T> {
  /// Inserts `item` before the first stored element whose key is greater than `priority`.
  ///
  /// # Errors
  ///
  /// Same failure modes as [`QueueBackend::offer`].
  fn offer_with_priority(&mut self, item: T, priority: P) -> Result<OfferOutcome, QueueError>;

  /// Returns the key of the head element, or `None` when the queue is empty or the head was
  /// appended without a key.
  fn peek_priority(&self) -> Option<&P>;
}
