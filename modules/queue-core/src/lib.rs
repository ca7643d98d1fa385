#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::match_like_matches_macro)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Queue abstract data type with FIFO and stable priority insertion.
//!
//! The crate exposes a capability trait ([`QueueBackend`]) with two backing structures: the
//! unbounded [`LinkedQueue`] built from singly-linked owned nodes, and the bounded
//! [`ArrayQueue`] built on ring storage. [`PriorityBackend`] adds priority-ordered insertion
//! where lower keys dequeue sooner and equal keys keep their arrival order.
//!
//! [`QueueSlot`] wraps a backend in a handle that can be destroyed; every operation on a
//! destroyed handle reports [`QueueError::InvalidQueue`]. All failures are reported through
//! [`QueueError`] and can be folded into the full status taxonomy with [`QueueStatus`].

extern crate alloc;

/// Queue collections and their supporting types.
pub mod collections;

pub use collections::queue::{
  ArrayQueue, DynQueue, LinkedQueue, OfferOutcome, OverflowPolicy, PriorityBackend, QueueBackend, QueueDescriptor,
  QueueError, QueueOptions, QueueSize, QueueSlot, QueueStatus,
};
