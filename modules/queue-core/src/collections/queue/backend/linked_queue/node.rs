use alloc::boxed::Box;
use core::ptr::NonNull;

use crate::collections::queue::PriorityRank;

/// Link to the next node; `None` marks the end of the chain.
pub(crate) type Link<T, P> = Option<NonNull<Node<T, P>>>;

/// Single chain element. Allocated by [`Node::allocate`] and released by [`Node::release`].
pub(crate) struct Node<T, P> {
  pub(crate) item: T,
  pub(crate) rank: PriorityRank<P>,
  pub(crate) next: Link<T, P>,
}

impl<T, P> Node<T, P> {
  /// Moves a new, unlinked node to the heap and hands out its only pointer.
  pub(crate) fn allocate(item: T, rank: PriorityRank<P>) -> NonNull<Self> {
    NonNull::from(Box::leak(Box::new(Self { item, rank, next: None })))
  }

  /// Takes the node back from the heap.
  ///
  /// # Safety
  ///
  /// `node` must come from [`Node::allocate`], must not have been released yet, and no chain may
  /// still reach it.
  pub(crate) unsafe fn release(node: NonNull<Self>) -> Box<Self> {
    // SAFETY: the caller guarantees `node` is a live allocation produced by `Box::leak`.
    unsafe { Box::from_raw(node.as_ptr()) }
  }
}
