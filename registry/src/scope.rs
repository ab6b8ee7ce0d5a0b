//! Scope identities for the container hierarchy.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for one scope level.
///
/// Ids are handed out from a process-wide counter, so every container in the
/// forest gets a distinct one. They exist for diagnostics — `Debug` output and
/// log fields — and carry no resolution semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u64);

impl ScopeId {
  pub(crate) fn next() -> Self {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    Self(COUNTER.fetch_add(1, Ordering::Relaxed))
  }

  /// The raw id value.
  #[inline]
  pub fn id(&self) -> u64 {
    self.0
  }
}

impl fmt::Display for ScopeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "scope-{}", self.0)
  }
}
