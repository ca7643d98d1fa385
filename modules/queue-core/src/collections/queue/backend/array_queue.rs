use alloc::collections::VecDeque;

use super::{PriorityBackend, QueueBackend};
use crate::collections::queue::{OfferOutcome, OverflowPolicy, PriorityRank, QueueDescriptor, QueueError, QueueSize};


struct Entry<T, P> {
  item: T,
  rank: PriorityRank<P>,
}

/// Fixed-capacity queue backed by ring storage.
///
/// With [`OverflowPolicy::Block`] the queue holds at most `limit` elements and rejects further
/// offers with [`QueueError::Full`]. With [`OverflowPolicy::Grow`] the storage doubles whenever it
/// fills up, and an allocation failure is reported as [`QueueError::AllocError`].
pub struct ArrayQueue<T, P = i32> {
  entries: VecDeque<Entry<T, P>>,
  limit:   usize,
  policy:  OverflowPolicy,
}

impl<T, P> ArrayQueue<T, P> {
  /// Creates a queue with room for `capacity` elements.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidArgument`] when `capacity` is zero and
  /// [`QueueError::AllocError`] when the storage cannot be reserved.
  pub fn with_capacity(capacity: usize, policy: OverflowPolicy) -> Result<Self, QueueError> {
    if capacity == 0 {
      return Err(QueueError::InvalidArgument);
    }
    let mut entries = VecDeque::new();
    entries.try_reserve_exact(capacity).map_err(|_| QueueError::AllocError)?;
    Ok(Self { entries, limit: capacity, policy })
  }

  /// Returns the overflow policy configured for this queue.
  #[must_use]
  pub const fn policy(&self) -> OverflowPolicy {
    self.policy
  }

  /// Returns the current slot limit. Under [`OverflowPolicy::Grow`] it doubles on each growth.
  #[must_use]
  pub const fn limit(&self) -> usize {
    self.limit
  }

  /// Appends an element at the tail in arrival order.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] or [`QueueError::AllocError`] depending on the overflow policy.
  pub fn enqueue(&mut self, item: T) -> Result<OfferOutcome, QueueError> {
    let grown = self.reserve_slot()?;
    self.entries.push_back(Entry { item, rank: PriorityRank::Unkeyed });
    Ok(Self::outcome(grown))
  }

  /// Removes and returns the element at the head.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no element.
  pub fn dequeue(&mut self) -> Result<T, QueueError> {
    self.entries.pop_front().map(|entry| entry.item).ok_or(QueueError::Empty)
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Indicates whether the queue is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Releases every element and returns how many were released.
  pub fn clear(&mut self) -> usize {
    let released = self.entries.len();
    self.entries.clear();
    released
  }

  /// Returns the element `position` steps behind the head without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidPosition`] when `position >= len()`.
  #[cfg(any(test, feature = "debug-peek"))]
  pub fn peek_at(&self, position: usize) -> Result<&T, QueueError> {
    self.entries.get(position).map(|entry| &entry.item).ok_or(QueueError::InvalidPosition)
  }

  fn reserve_slot(&mut self) -> Result<Option<usize>, QueueError> {
    if self.entries.len() < self.limit {
      return Ok(None);
    }

    match self.policy {
      | OverflowPolicy::Block => {
        tracing::warn!(limit = self.limit, "array queue is full; offer rejected");
        Err(QueueError::Full)
      },
      | OverflowPolicy::Grow => self.grow().map(Some),
    }
  }

  fn grow(&mut self) -> Result<usize, QueueError> {
    let next = self.limit.checked_mul(2).ok_or(QueueError::AllocError)?;
    if let Err(error) = self.entries.try_reserve_exact(next - self.entries.len()) {
      tracing::warn!(limit = self.limit, requested = next, %error, "array queue failed to grow");
      return Err(QueueError::AllocError);
    }
    tracing::trace!(from = self.limit, to = next, "array queue grew");
    self.limit = next;
    Ok(next)
  }

  const fn outcome(grown: Option<usize>) -> OfferOutcome {
    match grown {
      | Some(capacity) => OfferOutcome::GrewTo { capacity },
      | None => OfferOutcome::Enqueued,
    }
  }
}

impl<T, P: Ord> ArrayQueue<T, P> {
  /// Inserts `item` before the first element whose key is greater than `priority`.
  ///
  /// Keys stay non-decreasing from the head, so the insertion point is found by binary search;
  /// shifting the following elements keeps the operation O(n).
  ///
  /// # Errors
  ///
  /// Same failure modes as [`ArrayQueue::enqueue`].
  pub fn priority_enqueue(&mut self, item: T, priority: P) -> Result<OfferOutcome, QueueError> {
    let grown = self.reserve_slot()?;
    let rank = PriorityRank::Keyed(priority);
    let index = self.entries.partition_point(|entry| entry.rank <= rank);
    self.entries.insert(index, Entry { item, rank });
    Ok(Self::outcome(grown))
  }

  /// Returns the key of the head element, if it was inserted with one.
  #[must_use]
  pub fn peek_priority(&self) -> Option<&P> {
    self.entries.front().and_then(|entry| entry.rank.key())
  }
}

impl<T: core::fmt::Debug, P> core::fmt::Debug for ArrayQueue<T, P> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_list().entries(self.entries.iter().map(|entry| &entry.item)).finish()
  }
}

impl<T, P> QueueBackend<T> for ArrayQueue<T, P> {
  fn offer(&mut self, item: T) -> Result<OfferOutcome, QueueError> {
    self.enqueue(item)
  }

  fn poll(&mut self) -> Result<T, QueueError> {
    self.dequeue()
  }

  fn len(&self) -> usize {
    self.entries.len()
  }

  fn capacity(&self) -> QueueSize {
    match self.policy {
      | OverflowPolicy::Block => QueueSize::limited(self.limit),
      | OverflowPolicy::Grow => QueueSize::limitless(),
    }
  }

  fn descriptor(&self) -> QueueDescriptor {
    match self.policy {
      | OverflowPolicy::Block => QueueDescriptor::fixed(self.limit),
      | OverflowPolicy::Grow => QueueDescriptor::dynamic(),
    }
  }

  fn clear(&mut self) -> usize {
    ArrayQueue::clear(self)
  }

  #[cfg(any(test, feature = "debug-peek"))]
  fn peek_at(&self, position: usize) -> Result<&T, QueueError> {
    ArrayQueue::peek_at(self, position)
  }
}

impl<T, P: Ord> PriorityBackend<T, P> for ArrayQueue<T, P> {
  fn offer_with_priority(&mut self, item: T, priority: P) -> Result<OfferOutcome, QueueError> {
    self.priority_enqueue(item, priority)
  }

  fn peek_priority(&self) -> Option<&P> {
    ArrayQueue::peek_priority(self)
  }
}
