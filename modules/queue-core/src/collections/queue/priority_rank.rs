/// Ordering rank attached to every stored element.
///
/// Elements appended in plain FIFO order are `Unkeyed` and rank after every keyed element, so a
/// priority insertion always lands ahead of them. Variant order drives the derived `Ord`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum PriorityRank<P> {
  Keyed(P),
  Unkeyed,
}

impl<P> PriorityRank<P> {
  pub(crate) const fn key(&self) -> Option<&P> {
    match self {
      | PriorityRank::Keyed(key) => Some(key),
      | PriorityRank::Unkeyed => None,
    }
  }
}
