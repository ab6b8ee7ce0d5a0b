//! Immutable service records shared between registry slots and handles.

use std::fmt;
use std::sync::Arc;

/// One registration: a type name plus its payload bytes.
///
/// An entry is created at registration time and never mutated afterward. It is
/// shared, read-only, by the registry slot that holds it and by every handle
/// resolved from it, and is destroyed only when the last of those referrers
/// releases it.
pub(crate) struct ServiceEntry {
  type_name: String,
  payload: Box<[u8]>,
}

impl ServiceEntry {
  pub(crate) fn new(type_name: impl Into<String>, payload: &[u8]) -> Arc<Self> {
    Arc::new(Self {
      type_name: type_name.into(),
      payload: payload.into(),
    })
  }

  pub(crate) fn type_name(&self) -> &str {
    &self.type_name
  }

  pub(crate) fn payload(&self) -> &[u8] {
    &self.payload
  }
}

impl fmt::Debug for ServiceEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ServiceEntry")
      .field("type_name", &self.type_name)
      .field("payload_len", &self.payload.len())
      .finish()
  }
}
