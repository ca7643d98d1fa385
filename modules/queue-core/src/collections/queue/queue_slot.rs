use core::marker::PhantomData;

use super::{
  DynQueue, LinkedQueue, OfferOutcome, PriorityBackend, QueueBackend, QueueDescriptor, QueueError, QueueOptions,
};


/// Queue handle that may be absent.
///
/// A slot starts out holding a backend and becomes absent once [`QueueSlot::destroy`] succeeds.
/// Every operation on an absent slot reports [`QueueError::InvalidQueue`], so a destroyed handle
/// can never be used by accident.
pub struct QueueSlot<T, B = LinkedQueue<T>>
where
  B: QueueBackend<T>, {
  backend: Option<B>,
  _pd:     PhantomData<fn(T) -> T>,
}

impl<T, P> QueueSlot<T, LinkedQueue<T, P>> {
  /// Creates a slot holding a new, empty linked queue.
  #[must_use]
  pub const fn create() -> Self {
    Self::from_backend(LinkedQueue::new())
  }
}

impl<T, P> QueueSlot<T, DynQueue<T, P>> {
  /// Creates a slot holding the queue described by `options`.
  ///
  /// # Errors
  ///
  /// Propagates the errors of [`QueueOptions::build`].
  pub fn from_options(options: &QueueOptions) -> Result<Self, QueueError> {
    options.build().map(Self::from_backend)
  }
}

impl<T, B> QueueSlot<T, B>
where
  B: QueueBackend<T>,
{
  /// Wraps an existing backend.
  #[must_use]
  pub const fn from_backend(backend: B) -> Self {
    Self { backend: Some(backend), _pd: PhantomData }
  }

  /// Creates a slot that holds no queue.
  #[must_use]
  pub const fn absent() -> Self {
    Self { backend: None, _pd: PhantomData }
  }

  /// Indicates whether the slot still holds a queue.
  #[must_use]
  pub const fn is_present(&self) -> bool {
    self.backend.is_some()
  }

  /// Releases every element, drops the backend, and leaves the slot absent.
  ///
  /// Returns the number of released elements.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidQueue`] when the slot is already absent.
  pub fn destroy(&mut self) -> Result<usize, QueueError> {
    let mut backend = self.backend.take().ok_or(QueueError::InvalidQueue)?;
    let descriptor = backend.descriptor();
    let released = backend.clear();
    tracing::debug!(released, dynamic = descriptor.is_dynamic(), "queue destroyed");
    Ok(released)
  }

  /// Appends an element at the tail.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidQueue`] for an absent slot, otherwise the backend's offer errors.
  pub fn enqueue(&mut self, item: T) -> Result<OfferOutcome, QueueError> {
    self.backend_mut()?.offer(item)
  }

  /// Removes and returns the head element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidQueue`] for an absent slot and [`QueueError::Empty`] when there is
  /// nothing to remove.
  pub fn dequeue(&mut self) -> Result<T, QueueError> {
    self.backend_mut()?.poll()
  }

  /// Inserts an element ordered by `priority`; lower keys dequeue sooner, ties keep arrival order.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidQueue`] for an absent slot, otherwise the backend's offer errors.
  pub fn priority_enqueue<P>(&mut self, item: T, priority: P) -> Result<OfferOutcome, QueueError>
  where
    P: Ord,
    B: PriorityBackend<T, P>, {
    self.backend_mut()?.offer_with_priority(item, priority)
  }

  /// Reports whether the queue is empty.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidQueue`] for an absent slot.
  pub fn is_empty(&self) -> Result<bool, QueueError> {
    self.backend().map(QueueBackend::is_empty)
  }

  /// Reports whether the queue is full. Always `false` for unbounded backends.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidQueue`] for an absent slot.
  pub fn is_full(&self) -> Result<bool, QueueError> {
    self.backend().map(QueueBackend::is_full)
  }

  /// Returns the number of stored elements.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidQueue`] for an absent slot.
  pub fn size(&self) -> Result<usize, QueueError> {
    self.backend().map(QueueBackend::len)
  }

  /// Reports whether the backing storage is dynamic and its capacity.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidQueue`] for an absent slot.
  pub fn describe(&self) -> Result<QueueDescriptor, QueueError> {
    self.backend().map(QueueBackend::descriptor)
  }

  /// Returns the element at `position` from the head without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidQueue`] for an absent slot and [`QueueError::InvalidPosition`]
  /// when `position` is not smaller than the current size.
  #[cfg(any(test, feature = "debug-peek"))]
  pub fn peek_at(&self, position: usize) -> Result<&T, QueueError> {
    self.backend()?.peek_at(position)
  }

  /// Borrows the backend.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidQueue`] for an absent slot.
  pub fn backend(&self) -> Result<&B, QueueError> {
    self.backend.as_ref().ok_or(QueueError::InvalidQueue)
  }

  /// Mutably borrows the backend.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidQueue`] for an absent slot.
  pub fn backend_mut(&mut self) -> Result<&mut B, QueueError> {
    self.backend.as_mut().ok_or(QueueError::InvalidQueue)
  }
}

impl<T, B> Default for QueueSlot<T, B>
where
  B: QueueBackend<T> + Default,
{
  fn default() -> Self {
    Self::from_backend(B::default())
  }
}

impl<T, B> core::fmt::Debug for QueueSlot<T, B>
where
  B: QueueBackend<T> + core::fmt::Debug,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("QueueSlot").field("backend", &self.backend).finish()
  }
}
