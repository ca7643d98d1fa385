use super::*;
use crate::collections::queue::{QueueBackend, QueueDescriptor};

#[test]
fn default_options_build_a_linked_queue() {
  let options = QueueOptions::default();
  assert_eq!(options.capacity_limit(), None);

  let queue: DynQueue<u8> = options.build().unwrap();
  assert!(matches!(queue, DynQueue::Linked(_)));
  assert_eq!(queue.descriptor(), QueueDescriptor::dynamic());
}

#[test]
fn bounded_options_build_a_fixed_array_queue() {
  let options = QueueOptions::bounded(4);
  assert_eq!(options.capacity_limit(), Some(4));
  assert_eq!(options.policy, OverflowPolicy::Block);

  let queue: DynQueue<u8> = options.build().unwrap();
  assert!(matches!(queue, DynQueue::Array(_)));
  assert_eq!(queue.descriptor(), QueueDescriptor::fixed(4));
}

#[test]
fn growable_options_select_the_grow_policy() {
  let options = QueueOptions::bounded(2).with_policy(OverflowPolicy::Grow);
  assert_eq!(options, QueueOptions::growable(2));

  let queue: DynQueue<u8> = options.build().unwrap();
  assert!(matches!(&queue, DynQueue::Array(array) if array.policy() == OverflowPolicy::Grow && array.limit() == 2));
  assert!(queue.descriptor().is_dynamic());
}

#[test]
fn zero_capacity_is_an_invalid_argument() {
  let result: Result<DynQueue<u8>, _> = QueueOptions::bounded(0).build();
  assert!(matches!(result, Err(QueueError::InvalidArgument)));
}
