
/// Upper bound on how many elements a queue may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueSize {
  /// The queue grows on demand and never reports itself full.
  Limitless,
  /// The queue holds at most this many elements.
  Limited(usize),
}

impl QueueSize {
  /// Bound for storage that grows on demand.
  #[must_use]
  pub const fn limitless() -> Self {
    Self::Limitless
  }

  /// Bound of exactly `value` elements.
  #[must_use]
  pub const fn limited(value: usize) -> Self {
    Self::Limited(value)
  }

  /// Returns the element limit, or `None` when the storage grows on demand.
  #[must_use]
  pub const fn limit(&self) -> Option<usize> {
    match self {
      | Self::Limitless => None,
      | Self::Limited(value) => Some(*value),
    }
  }

  /// Returns `true` when `len` elements fill this bound.
  #[must_use]
  pub const fn is_reached_by(&self, len: usize) -> bool {
    match self.limit() {
      | Some(limit) => len >= limit,
      | None => false,
    }
  }
}

impl Default for QueueSize {
  fn default() -> Self {
    Self::limitless()
  }
}
