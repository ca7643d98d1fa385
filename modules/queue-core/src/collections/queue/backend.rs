//! Backend layer: the capability traits and the structures implementing them.

mod array_queue;
mod dyn_queue;
mod linked_queue;
mod priority_backend;
mod queue_backend;

pub use array_queue::ArrayQueue;
pub use dyn_queue::DynQueue;
pub use linked_queue::{Iter, LinkedQueue};
pub use priority_backend::PriorityBackend;
pub use queue_backend::QueueBackend;
