/// Outcome produced by a successful offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferOutcome {
  /// The element was enqueued without any side effects.
  Enqueued,
  /// The underlying storage grew to the specified capacity before enqueuing.
  GrewTo {
    /// New capacity after the storage has grown.
    capacity: usize,
  },
}
