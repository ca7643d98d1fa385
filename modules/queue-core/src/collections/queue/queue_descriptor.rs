use super::QueueSize;

/// Backing-structure metadata reported by [`QueueBackend::descriptor`](super::QueueBackend::descriptor).
///
/// Lets callers stay agnostic of whether they hold a growable or a fixed-capacity queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueueDescriptor {
  dynamic:  bool,
  capacity: QueueSize,
}

impl QueueDescriptor {
  /// Descriptor for storage that grows on demand and therefore has no maximum.
  #[must_use]
  pub const fn dynamic() -> Self {
    Self { dynamic: true, capacity: QueueSize::Limitless }
  }

  /// Descriptor for storage fixed at `limit` elements.
  #[must_use]
  pub const fn fixed(limit: usize) -> Self {
    Self { dynamic: false, capacity: QueueSize::Limited(limit) }
  }

  /// Indicates whether the storage grows automatically.
  #[must_use]
  pub const fn is_dynamic(&self) -> bool {
    self.dynamic
  }

  /// Maximum number of elements, [`QueueSize::Limitless`] for dynamic storage.
  #[must_use]
  pub const fn capacity(&self) -> QueueSize {
    self.capacity
  }

  /// Capacity as a signed sentinel: `-1` when unbounded, the limit otherwise.
  #[must_use]
  pub const fn capacity_sentinel(&self) -> i64 {
    match self.capacity.limit() {
      | None => -1,
      | Some(limit) => {
        if limit > i64::MAX as usize {
          i64::MAX
        } else {
          limit as i64
        }
      },
    }
  }
}
