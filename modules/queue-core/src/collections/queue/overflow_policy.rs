/// Behaviour of a fixed-capacity queue once every slot is occupied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
  /// Reject the offer with [`QueueError::Full`](super::QueueError::Full).
  #[default]
  Block,
  /// Double the storage; report [`QueueError::AllocError`](super::QueueError::AllocError) when that fails.
  Grow,
}
