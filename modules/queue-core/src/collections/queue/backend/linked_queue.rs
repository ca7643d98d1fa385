use alloc::boxed::Box;
use core::{fmt, marker::PhantomData, ptr::NonNull};

use super::{PriorityBackend, QueueBackend};
use crate::collections::queue::{OfferOutcome, PriorityRank, QueueDescriptor, QueueError, QueueSize};

mod iter;
mod node;

#[cfg(test)]
mod tests;

pub use iter::Iter;
use node::{Link, Node};

/// Unbounded queue built from singly-linked, heap-allocated nodes.
///
/// The queue owns every node through raw links: `head` addresses the first node, each node
/// addresses its successor, and `tail` addresses the last node so FIFO appends stay O(1). Nodes
/// are allocated by `Node::allocate` and released exactly once, by `dequeue` or `clear`.
/// Priority insertion scans from the head and is O(n).
///
/// Invariants:
/// - `len == 0` exactly when `head` and `tail` are both `None`.
/// - following `next` from `head` reaches the node addressed by `tail` after `len - 1` steps, and
///   that node has no successor.
/// - ranks are non-decreasing from head to tail.
pub struct LinkedQueue<T, P = i32> {
  head:  Link<T, P>,
  tail:  Link<T, P>,
  len:   usize,
  _owns: PhantomData<Box<Node<T, P>>>,
}

impl<T, P> LinkedQueue<T, P> {
  /// Creates an empty queue. No node is allocated until the first insertion.
  #[must_use]
  pub const fn new() -> Self {
    Self { head: None, tail: None, len: 0, _owns: PhantomData }
  }

  /// Appends an element at the tail in arrival order.
  pub fn enqueue(&mut self, item: T) {
    let node = Node::allocate(item, PriorityRank::Unkeyed);
    self.link_after(self.tail, node);
  }

  /// Removes and returns the element at the head.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no element; the queue is unchanged.
  pub fn dequeue(&mut self) -> Result<T, QueueError> {
    let head = self.head.ok_or(QueueError::Empty)?;
    // SAFETY: `head` is a live node of this queue; it is unlinked right below and never reached
    // again.
    let node = unsafe { Node::release(head) };
    self.head = node.next;
    if self.head.is_none() {
      self.tail = None;
    }
    self.len -= 1;
    Ok(node.item)
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Indicates whether the queue is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns a reference to the head element.
  #[must_use]
  pub fn front(&self) -> Option<&T> {
    self.iter().next()
  }

  /// Iterates the stored elements from head to tail.
  #[must_use]
  pub fn iter(&self) -> Iter<'_, T, P> {
    Iter::new(self.head, self.len)
  }

  /// Releases every node and returns how many elements were released.
  ///
  /// Nodes are released one at a time, so a long chain never recurses.
  pub fn clear(&mut self) -> usize {
    let released = self.len;
    let mut link = self.head.take();
    self.tail = None;
    self.len = 0;
    while let Some(current) = link {
      // SAFETY: the chain was detached from `head` above, so each node is reached exactly once.
      let node = unsafe { Node::release(current) };
      link = node.next;
    }
    released
  }

  /// Returns the element `position` steps behind the head without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidPosition`] when `position >= len()`.
  #[cfg(any(test, feature = "debug-peek"))]
  pub fn peek_at(&self, position: usize) -> Result<&T, QueueError> {
    if position >= self.len {
      return Err(QueueError::InvalidPosition);
    }
    self.iter().nth(position).ok_or(QueueError::InvalidPosition)
  }

  /// Links `node` after `predecessor`, or at the head when there is none.
  fn link_after(&mut self, predecessor: Link<T, P>, mut node: NonNull<Node<T, P>>) {
    let successor = match predecessor {
      // SAFETY: `predecessor` is a live node of this queue and `&mut self` excludes every borrow
      // into the chain.
      | Some(mut previous) => unsafe { previous.as_mut().next.replace(node) },
      | None => self.head.replace(node),
    };
    // SAFETY: `node` was just allocated and nothing else dereferences it.
    unsafe { node.as_mut().next = successor };
    if successor.is_none() {
      self.tail = Some(node);
    }
    self.len += 1;
  }
}

impl<T, P: Ord> LinkedQueue<T, P> {
  /// Inserts `item` so that keys stay non-decreasing from the head.
  ///
  /// The new node is linked in after the last node whose key is `<=` `priority`, so equal keys keep
  /// their arrival order. A key strictly smaller than the head's key, or an empty queue, makes the
  /// node the new head.
  pub fn priority_enqueue(&mut self, item: T, priority: P) {
    let rank = PriorityRank::Keyed(priority);
    let predecessor = self.insertion_point(&rank);
    self.link_after(predecessor, Node::allocate(item, rank));
  }

  /// Returns the key of the head element, if it was inserted with one.
  #[must_use]
  pub fn peek_priority(&self) -> Option<&P> {
    // SAFETY: `head` is a live node borrowed for as long as `&self`.
    self.head.and_then(|head| unsafe { head.as_ref() }.rank.key())
  }

  fn insertion_point(&self, rank: &PriorityRank<P>) -> Link<T, P> {
    let mut predecessor = None;
    let mut cursor = self.head;
    while let Some(current) = cursor {
      // SAFETY: every node reachable from `head` is live while `&self` is held.
      let node = unsafe { current.as_ref() };
      if node.rank > *rank {
        break;
      }
      predecessor = Some(current);
      cursor = node.next;
    }
    predecessor
  }
}

impl<T, P> Default for LinkedQueue<T, P> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, P> Drop for LinkedQueue<T, P> {
  fn drop(&mut self) {
    self.clear();
  }
}

// SAFETY: the queue owns its nodes exclusively, like `Box<Node<T, P>>` would.
unsafe impl<T: Send, P: Send> Send for LinkedQueue<T, P> {}

// SAFETY: `&LinkedQueue` only gives out `&T` and `&P`.
unsafe impl<T: Sync, P: Sync> Sync for LinkedQueue<T, P> {}

impl<T: fmt::Debug, P> fmt::Debug for LinkedQueue<T, P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T, P> Extend<T> for LinkedQueue<T, P> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for item in iter {
      self.enqueue(item);
    }
  }
}

impl<T, P> FromIterator<T> for LinkedQueue<T, P> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut queue = Self::new();
    queue.extend(iter);
    queue
  }
}

impl<'a, T, P> IntoIterator for &'a LinkedQueue<T, P> {
  type IntoIter = Iter<'a, T, P>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T, P> QueueBackend<T> for LinkedQueue<T, P> {
  fn offer(&mut self, item: T) -> Result<OfferOutcome, QueueError> {
    self.enqueue(item);
    Ok(OfferOutcome::Enqueued)
  }

  fn poll(&mut self) -> Result<T, QueueError> {
    self.dequeue()
  }

  fn len(&self) -> usize {
    self.len
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limitless()
  }

  fn descriptor(&self) -> QueueDescriptor {
    QueueDescriptor::dynamic()
  }

  fn clear(&mut self) -> usize {
    LinkedQueue::clear(self)
  }

  fn is_full(&self) -> bool {
    false
  }

  #[cfg(any(test, feature = "debug-peek"))]
  fn peek_at(&self, position: usize) -> Result<&T, QueueError> {
    LinkedQueue::peek_at(self, position)
  }
}

impl<T, P: Ord> PriorityBackend<T, P> for LinkedQueue<T, P> {
  fn offer_with_priority(&mut self, item: T, priority: P) -> Result<OfferOutcome, QueueError> {
    self.priority_enqueue(item, priority);
    Ok(OfferOutcome::Enqueued)
  }

  fn peek_priority(&self) -> Option<&P> {
    LinkedQueue::peek_priority(self)
  }
}
