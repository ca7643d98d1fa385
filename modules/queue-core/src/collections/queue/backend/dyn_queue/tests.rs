use alloc::{vec, vec::Vec};

use super::*;
use crate::collections::queue::OverflowPolicy;

fn variants() -> Vec<DynQueue<u32, u8>> {
  let linked = DynQueue::from(LinkedQueue::new());
  let array = DynQueue::from(ArrayQueue::with_capacity(2, OverflowPolicy::Grow).unwrap());
  vec![linked, array]
}

#[test]
fn every_variant_orders_by_priority_then_arrival() {
  for mut queue in variants() {
    queue.offer(99).unwrap();
    queue.offer_with_priority(3, 3).unwrap();
    queue.offer_with_priority(1, 1).unwrap();
    queue.offer_with_priority(31, 3).unwrap();

    assert_eq!(queue.peek_priority(), Some(&1));
    assert_eq!(queue.len(), 4);

    let mut drained = Vec::new();
    while let Ok(item) = queue.poll() {
      drained.push(item);
    }
    assert_eq!(drained, [1, 3, 31, 99]);
    assert!(queue.is_empty());
  }
}

#[test]
fn descriptor_follows_the_wrapped_backend() {
  let linked: DynQueue<u32> = LinkedQueue::new().into();
  let fixed: DynQueue<u32> = ArrayQueue::with_capacity(3, OverflowPolicy::Block).unwrap().into();

  assert!(linked.descriptor().is_dynamic());
  assert_eq!(fixed.descriptor(), QueueDescriptor::fixed(3));
  assert_eq!(fixed.capacity(), QueueSize::limited(3));
}

#[test]
fn is_full_and_peek_delegate() {
  let mut fixed: DynQueue<u32> = ArrayQueue::with_capacity(1, OverflowPolicy::Block).unwrap().into();
  fixed.offer(5).unwrap();

  assert!(fixed.is_full());
  assert_eq!(fixed.offer(6), Err(QueueError::Full));
  assert_eq!(fixed.peek_at(0), Ok(&5));
  assert_eq!(fixed.clear(), 1);
}
