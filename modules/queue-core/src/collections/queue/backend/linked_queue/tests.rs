use alloc::{
  format,
  rc::Rc,
  string::{String, ToString},
  vec,
  vec::Vec,
};
use core::cell::Cell;

use super::*;

fn drain<T, P>(queue: &mut LinkedQueue<T, P>) -> Vec<T> {
  let mut drained = Vec::new();
  while let Ok(item) = queue.dequeue() {
    drained.push(item);
  }
  drained
}

struct DropCounter {
  drops: Rc<Cell<usize>>,
}

impl Drop for DropCounter {
  fn drop(&mut self) {
    self.drops.set(self.drops.get() + 1);
  }
}

#[test]
fn enqueue_then_dequeue_preserves_arrival_order() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();
  for value in [4, 8, 15, 16, 23, 42] {
    queue.enqueue(value);
  }

  assert_eq!(queue.len(), 6);
  assert_eq!(drain(&mut queue), vec![4, 8, 15, 16, 23, 42]);
  assert!(queue.is_empty());
}

#[test]
fn dequeue_on_empty_queue_reports_empty_and_keeps_state() {
  let mut queue: LinkedQueue<u8> = LinkedQueue::new();
  assert_eq!(queue.dequeue(), Err(QueueError::Empty));
  assert_eq!(queue.len(), 0);

  queue.enqueue(1);
  assert_eq!(queue.dequeue(), Ok(1));
  assert_eq!(queue.dequeue(), Err(QueueError::Empty));
  assert!(queue.front().is_none());
}

#[test]
fn tail_is_reset_when_the_last_element_leaves() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();
  queue.enqueue(1);
  queue.dequeue().unwrap();

  queue.enqueue(2);
  queue.enqueue(3);
  assert_eq!(drain(&mut queue), vec![2, 3]);
}

#[test]
fn enqueue_after_dequeue_appends_behind_the_surviving_tail() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();
  queue.enqueue(1);
  queue.enqueue(2);
  assert_eq!(queue.dequeue(), Ok(1));
  queue.enqueue(3);

  assert_eq!(queue.len(), 2);
  assert_eq!(queue.peek_at(1), Ok(&3));
  assert_eq!(drain(&mut queue), vec![2, 3]);
}

#[test]
fn interleaved_offers_and_polls_keep_the_chain_consistent() {
  let mut queue: LinkedQueue<u32> = LinkedQueue::new();
  let mut expected = Vec::new();
  for value in 0..64 {
    queue.enqueue(value);
    expected.push(value);
    if value % 3 == 2 {
      assert_eq!(queue.dequeue(), Ok(expected.remove(0)));
    }
  }

  assert_eq!(queue.len(), expected.len());
  assert_eq!(queue.iter().copied().collect::<Vec<_>>(), expected);
  assert_eq!(drain(&mut queue), expected);
}

#[test]
fn priority_enqueue_into_empty_queue_sets_the_tail() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();
  queue.priority_enqueue(1, 1);
  queue.enqueue(2);
  assert_eq!(queue.dequeue(), Ok(1));
  queue.priority_enqueue(3, 0);
  queue.enqueue(4);

  assert_eq!(drain(&mut queue), vec![3, 2, 4]);
}

#[test]
fn queue_moves_across_threads() {
  let mut queue: LinkedQueue<String> = LinkedQueue::new();
  queue.enqueue("left".to_string());
  queue.priority_enqueue("urgent".to_string(), 0);

  let drained = std::thread::spawn(move || drain(&mut queue)).join().unwrap();

  assert_eq!(drained, vec!["urgent".to_string(), "left".to_string()]);
}

#[test]
fn priority_enqueue_drains_by_ascending_key() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();
  queue.priority_enqueue(10, 3);
  queue.priority_enqueue(20, 1);
  queue.priority_enqueue(30, 2);

  assert_eq!(queue.peek_priority(), Some(&1));
  assert_eq!(drain(&mut queue), vec![20, 30, 10]);
}

#[test]
fn priority_enqueue_keeps_arrival_order_for_equal_keys() {
  let mut queue: LinkedQueue<&str> = LinkedQueue::new();
  queue.priority_enqueue("a", 2);
  queue.priority_enqueue("b", 1);
  queue.priority_enqueue("c", 2);
  queue.priority_enqueue("d", 1);
  queue.priority_enqueue("e", 2);

  assert_eq!(drain(&mut queue), vec!["b", "d", "a", "c", "e"]);
}

#[test]
fn priority_enqueue_covers_head_middle_and_tail_insertion() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();
  queue.priority_enqueue(5, 5);
  queue.priority_enqueue(9, 9);
  queue.priority_enqueue(1, 1);
  queue.priority_enqueue(7, 7);
  queue.priority_enqueue(12, 12);

  assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 5, 7, 9, 12]);

  // The tail cursor must follow the insertion at the end.
  queue.enqueue(100);
  assert_eq!(drain(&mut queue), vec![1, 5, 7, 9, 12, 100]);
}

#[test]
fn keyed_elements_overtake_plain_enqueued_elements() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();
  queue.enqueue(1);
  queue.enqueue(2);
  queue.priority_enqueue(3, i32::MAX);
  queue.enqueue(4);

  assert_eq!(queue.peek_priority(), Some(&i32::MAX));
  assert_eq!(drain(&mut queue), vec![3, 1, 2, 4]);
}

#[test]
fn peek_priority_is_none_for_unkeyed_head() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();
  assert!(queue.peek_priority().is_none());
  queue.enqueue(1);
  assert!(queue.peek_priority().is_none());
}

#[test]
fn len_tracks_insertions_minus_removals() {
  let mut queue: LinkedQueue<usize, u8> = LinkedQueue::new();
  for value in 0..10 {
    if value % 2 == 0 {
      queue.enqueue(value);
    } else {
      queue.priority_enqueue(value, (value % 3) as u8);
    }
  }
  for _ in 0..4 {
    queue.dequeue().unwrap();
  }

  assert_eq!(queue.len(), 6);
  assert_eq!(queue.iter().len(), 6);
}

#[test]
fn peek_at_reads_without_removing() {
  let mut queue: LinkedQueue<char> = "abc".chars().collect();

  assert_eq!(queue.peek_at(0), Ok(&'a'));
  assert_eq!(queue.peek_at(2), Ok(&'c'));
  assert_eq!(queue.peek_at(3), Err(QueueError::InvalidPosition));
  assert_eq!(queue.len(), 3);

  queue.dequeue().unwrap();
  assert_eq!(queue.peek_at(0), Ok(&'b'));
  assert_eq!(queue.peek_at(queue.len()), Err(QueueError::InvalidPosition));
}

#[test]
fn clear_releases_every_element_once() {
  let drops = Rc::new(Cell::new(0));
  let mut queue: LinkedQueue<DropCounter> = LinkedQueue::new();
  for key in [3, 1, 2] {
    queue.priority_enqueue(DropCounter { drops: drops.clone() }, key);
  }
  queue.enqueue(DropCounter { drops: drops.clone() });

  assert_eq!(queue.clear(), 4);
  assert_eq!(drops.get(), 4);
  assert!(queue.is_empty());

  queue.enqueue(DropCounter { drops: drops.clone() });
  drop(queue);
  assert_eq!(drops.get(), 5);
}

#[test]
fn dropping_a_long_chain_does_not_recurse() {
  let mut queue: LinkedQueue<u32> = LinkedQueue::new();
  for value in 0..200_000 {
    queue.enqueue(value);
  }
  drop(queue);
}

#[test]
fn backend_trait_reports_unbounded_dynamic_storage() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();
  assert_eq!(QueueBackend::offer(&mut queue, 7), Ok(OfferOutcome::Enqueued));

  assert!(!QueueBackend::is_full(&queue));
  assert_eq!(queue.capacity(), QueueSize::limitless());
  assert!(queue.descriptor().is_dynamic());
  assert_eq!(queue.descriptor().capacity_sentinel(), -1);
  assert_eq!(QueueBackend::poll(&mut queue), Ok(7));
}

#[test]
fn debug_lists_elements_front_to_back() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();
  queue.priority_enqueue(2, 2);
  queue.priority_enqueue(1, 1);

  assert_eq!(format!("{queue:?}"), "[1, 2]");
}
