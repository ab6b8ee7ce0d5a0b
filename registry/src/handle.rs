//! Caller-held handles onto resolved services.

use crate::entry::ServiceEntry;
use std::fmt;
use std::sync::Arc;

/// A reference-counted view onto one resolved service.
///
/// A handle keeps its entry alive independently of the container it was
/// resolved from: dropping the container, or the whole scope chain, never
/// invalidates the payload seen through an outstanding handle. Cloning a
/// handle is cheap and yields another view onto the same entry.
#[derive(Clone)]
pub struct ServiceHandle {
  entry: Arc<ServiceEntry>,
}

impl ServiceHandle {
  pub(crate) fn new(entry: Arc<ServiceEntry>) -> Self {
    Self { entry }
  }

  /// The type name the service was registered under.
  pub fn type_name(&self) -> &str {
    self.entry.type_name()
  }

  /// The payload bytes, exactly as passed at registration time.
  pub fn payload(&self) -> &[u8] {
    self.entry.payload()
  }

  /// Payload length in bytes.
  pub fn len(&self) -> usize {
    self.entry.payload().len()
  }

  /// Whether the payload is empty.
  pub fn is_empty(&self) -> bool {
    self.entry.payload().is_empty()
  }
}

impl fmt::Debug for ServiceHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ServiceHandle")
      .field("type_name", &self.type_name())
      .field("payload_len", &self.len())
      .finish()
  }
}
