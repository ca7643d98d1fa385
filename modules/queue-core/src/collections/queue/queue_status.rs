use super::QueueError;


/// Complete status taxonomy shared by every queue operation.
///
/// Operations themselves return `Result<_, QueueError>`; `QueueStatus` folds such a result into a
/// single value for callers that report outcomes uniformly (logs, counters, foreign bindings).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueueStatus {
  /// The operation succeeded.
  Ok,
  /// The queue handle is absent.
  InvalidQueue,
  /// Storage could not be allocated.
  AllocError,
  /// An argument was rejected.
  InvalidArgument,
  /// A position referred past the last element.
  InvalidPosition,
  /// The queue cannot accept new elements.
  Full,
  /// The queue has no elements.
  Empty,
}

impl QueueStatus {
  /// Returns `true` for [`QueueStatus::Ok`].
  #[must_use]
  pub const fn is_ok(self) -> bool {
    matches!(self, QueueStatus::Ok)
  }

  /// Stable snake_case label, suitable for structured log fields.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      | QueueStatus::Ok => "ok",
      | QueueStatus::InvalidQueue => "invalid_queue",
      | QueueStatus::AllocError => "alloc_error",
      | QueueStatus::InvalidArgument => "invalid_argument",
      | QueueStatus::InvalidPosition => "invalid_position",
      | QueueStatus::Full => "full",
      | QueueStatus::Empty => "empty",
    }
  }
}

impl From<QueueError> for QueueStatus {
  fn from(error: QueueError) -> Self {
    match error {
      | QueueError::InvalidQueue => QueueStatus::InvalidQueue,
      | QueueError::AllocError => QueueStatus::AllocError,
      | QueueError::InvalidArgument => QueueStatus::InvalidArgument,
      | QueueError::InvalidPosition => QueueStatus::InvalidPosition,
      | QueueError::Full => QueueStatus::Full,
      | QueueError::Empty => QueueStatus::Empty,
    }
  }
}

impl<V> From<&Result<V, QueueError>> for QueueStatus {
  fn from(result: &Result<V, QueueError>) -> Self {
    match result {
      | Ok(_) => QueueStatus::Ok,
      | Err(error) => QueueStatus::from(*error),
    }
  }
}

impl From<&QueueStatus> for &'static str {
  fn from(status: &QueueStatus) -> Self {
    status.as_str()
  }
}
