//! Per-scope storage for service registrations.

use crate::entry::ServiceEntry;
use crate::error::{Error, Result};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// Checks that a type name is usable as a registration key.
///
/// Names must be non-empty and free of interior NUL bytes, so that every
/// registered name stays representable as a C string at the boundary.
pub(crate) fn validate_type_name(type_name: &str) -> Result<()> {
  if type_name.is_empty() {
    return Err(Error::invalid_argument("type name must not be empty"));
  }
  if type_name.bytes().any(|b| b == 0) {
    return Err(Error::invalid_argument(
      "type name must not contain NUL bytes",
    ));
  }
  Ok(())
}

/// Storage for the registrations of exactly one scope level.
///
/// Lookups and inserts take a single shard lock for the duration of one map
/// operation, so readers never hold writers up across calls and no operation
/// blocks indefinitely.
#[derive(Default)]
pub(crate) struct Registry {
  entries: DashMap<String, Arc<ServiceEntry>>,
}

impl Registry {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Insert-if-absent. The vacancy check and the insert happen under the same
  /// shard lock, so concurrent inserts of one key have exactly one winner and
  /// the rest observe `AlreadyRegistered`.
  pub(crate) fn insert(&self, type_name: &str, payload: &[u8]) -> Result<()> {
    validate_type_name(type_name)?;

    match self.entries.entry(type_name.to_owned()) {
      Entry::Occupied(_) => Err(Error::already_registered(type_name)),
      Entry::Vacant(slot) => {
        slot.insert(ServiceEntry::new(type_name, payload));
        Ok(())
      }
    }
  }

  /// Returns a new counted reference to the entry, if present.
  pub(crate) fn lookup(&self, type_name: &str) -> Option<Arc<ServiceEntry>> {
    self
      .entries
      .get(type_name)
      .map(|slot| Arc::clone(slot.value()))
  }

  pub(crate) fn contains(&self, type_name: &str) -> bool {
    self.entries.contains_key(type_name)
  }

  /// Number of entries held at the instant of the call.
  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }
}
