//! no_std-friendly queue ADT shared by every backing structure.

pub mod backend;
mod offer_outcome;
mod overflow_policy;
mod priority_rank;
mod queue_descriptor;
mod queue_error;
mod queue_options;
mod queue_size;
mod queue_slot;
mod queue_status;

pub use backend::{ArrayQueue, DynQueue, LinkedQueue, PriorityBackend, QueueBackend};
pub use offer_outcome::OfferOutcome;
pub use overflow_policy::OverflowPolicy;
pub(crate) use priority_rank::PriorityRank;
pub use queue_descriptor::QueueDescriptor;
pub use queue_error::QueueError;
pub use queue_options::QueueOptions;
pub use queue_size::QueueSize;
pub use queue_slot::QueueSlot;
pub use queue_status::QueueStatus;
