use core::{iter::FusedIterator, marker::PhantomData};

use super::node::{Link, Node};

/// Borrowing iterator over a [`LinkedQueue`](super::LinkedQueue), from head to tail.
pub struct Iter<'a, T, P> {
  next:      Link<T, P>,
  remaining: usize,
  _borrow:   PhantomData<&'a Node<T, P>>,
}

impl<'a, T, P> Iter<'a, T, P> {
  pub(crate) const fn new(head: Link<T, P>, remaining: usize) -> Self {
    Self { next: head, remaining, _borrow: PhantomData }
  }
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    // SAFETY: the iterator borrows the queue for `'a`, so every node reachable from its head stays
    // allocated and unmodified for that long.
    let node: &'a Node<T, P> = unsafe { self.next?.as_ref() };
    self.next = node.next;
    self.remaining = self.remaining.saturating_sub(1);
    Some(&node.item)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T, P> ExactSizeIterator for Iter<'_, T, P> {}

impl<T, P> FusedIterator for Iter<'_, T, P> {}

// SAFETY: `Iter` only hands out shared references, so it behaves like `&LinkedQueue`.
unsafe impl<T: Sync, P: Sync> Send for Iter<'_, T, P> {}

// SAFETY: as above; sharing the iterator shares only `&T` and `&P`.
unsafe impl<T: Sync, P: Sync> Sync for Iter<'_, T, P> {}
