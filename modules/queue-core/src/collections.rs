/// Queue ADT: backends, handle protocol, and status reporting.
pub mod queue;

pub use queue::{
  ArrayQueue, DynQueue, LinkedQueue, OfferOutcome, OverflowPolicy, PriorityBackend, QueueBackend, QueueDescriptor,
  QueueError, QueueOptions, QueueSize, QueueSlot, QueueStatus,
};
