//! Builds a queue from three keyed elements through priority insertion and drains it.
//!
//! Expected output order: (20, 1), (30, 2), (10, 3).

use qadt_core_rs::{QueueError, QueueSlot};
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Copy, Debug)]
struct Element {
  value:    i32,
  priority: i32,
}

fn main() -> Result<(), QueueError> {
  let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
  let _ = FmtSubscriber::builder().with_env_filter(env_filter).try_init();

  let mut queue: QueueSlot<Element> = QueueSlot::create();

  let x = Element { value: 10, priority: 3 };
  let y = Element { value: 20, priority: 1 };
  let z = Element { value: 30, priority: 2 };
  for element in [x, y, z] {
    queue.priority_enqueue(element, element.priority)?;
  }

  while !queue.is_empty()? {
    let element = queue.dequeue()?;
    println!("value: {}, priority: {}", element.value, element.priority);
  }

  queue.destroy()?;
  Ok(())
}
