//! The `Container` type and scope-chain resolution.

use crate::error::{Error, Result};
use crate::handle::ServiceHandle;
use crate::registry::{validate_type_name, Registry};
use crate::scope::ScopeId;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// One scope level of the service registry.
///
/// A container owns the registrations made directly against it and holds a
/// counted reference to its parent, if any. Resolution consults this level
/// first and then walks the parent chain, so a registration here shadows any
/// ancestor registration under the same type name.
///
/// All operations take `&self` and are safe to call from any number of
/// threads. Cloning a `Container` produces another handle to the *same* scope
/// level, not a new scope; use [`Container::scope`] for that.
#[derive(Clone)]
pub struct Container {
  inner: Arc<Level>,
}

/// Shared state of one scope level.
struct Level {
  registry: Registry,
  parent: Option<Arc<Level>>,
  scope: ScopeId,
  depth: u32,
}

impl Container {
  /// Creates a new root container: empty registry, no parent.
  pub fn new() -> Self {
    let scope = ScopeId::next();
    debug!(target: "strata", %scope, "created root container");

    Self {
      inner: Arc::new(Level {
        registry: Registry::new(),
        parent: None,
        scope,
        depth: 0,
      }),
    }
  }

  /// Creates a child scope of this container.
  ///
  /// The child starts with an empty registry and sees every registration of
  /// this container and its ancestors through the live chain, including ones
  /// made after the child was created. Creating a child takes no exclusive
  /// access to the parent, so it is safe while other threads register into or
  /// resolve from the parent.
  ///
  /// # Examples
  ///
  /// ```
  /// use strata::Container;
  ///
  /// let root = Container::new();
  /// root.register("Config", b"debug=true").unwrap();
  ///
  /// let request = root.scope();
  /// assert!(request.contains("Config"));
  /// assert!(!root.contains("RequestId"));
  /// ```
  pub fn scope(&self) -> Self {
    let scope = ScopeId::next();
    let depth = self.inner.depth + 1;
    debug!(
      target: "strata",
      %scope,
      parent = %self.inner.scope,
      depth,
      "created child scope"
    );

    Self {
      inner: Arc::new(Level {
        registry: Registry::new(),
        parent: Some(Arc::clone(&self.inner)),
        scope,
        depth,
      }),
    }
  }

  /// Registers `payload` under `type_name` at this scope level.
  ///
  /// The payload is copied and stored immutably. Registration never consults
  /// or mutates ancestors: registering a name an ancestor already holds
  /// shadows the ancestor for this scope and its descendants, while
  /// registering a name already present *at this level* fails with
  /// [`Error::AlreadyRegistered`]. Concurrent registrations of the same name
  /// in the same container have exactly one winner.
  pub fn register(&self, type_name: &str, payload: &[u8]) -> Result<()> {
    let outcome = self.inner.registry.insert(type_name, payload);
    match &outcome {
      Ok(()) => debug!(
        target: "strata",
        scope = %self.inner.scope,
        service = type_name,
        bytes = payload.len(),
        "registered service"
      ),
      Err(err) => debug!(
        target: "strata",
        scope = %self.inner.scope,
        service = type_name,
        %err,
        "registration rejected"
      ),
    }
    outcome
  }

  /// Resolves `type_name` from this scope or the nearest ancestor holding it.
  ///
  /// Returns a [`ServiceHandle`] whose lifetime is independent of this
  /// container; see [`ServiceHandle`] for the guarantees. A name held at
  /// several levels resolves to the level closest to the caller.
  ///
  /// The walk is iterative and consults one level's storage at a time, so
  /// scope depth never translates into stack depth or into locks held across
  /// levels.
  pub fn resolve(&self, type_name: &str) -> Result<ServiceHandle> {
    validate_type_name(type_name)?;

    let mut level: &Level = &self.inner;
    loop {
      if let Some(entry) = level.registry.lookup(type_name) {
        trace!(
          target: "strata",
          scope = %self.inner.scope,
          service = type_name,
          found_at = %level.scope,
          "resolved service"
        );
        return Ok(ServiceHandle::new(entry));
      }
      match level.parent.as_deref() {
        Some(parent) => level = parent,
        None => {
          trace!(
            target: "strata",
            scope = %self.inner.scope,
            service = type_name,
            "service not found on scope chain"
          );
          return Err(Error::not_found(type_name));
        }
      }
    }
  }

  /// Resolves `type_name`, returning `None` when nothing on the chain holds
  /// it or the name is malformed.
  pub fn try_resolve(&self, type_name: &str) -> Option<ServiceHandle> {
    self.resolve(type_name).ok()
  }

  /// Whether `type_name` is registered at this level or any ancestor.
  ///
  /// Same walk as [`Container::resolve`], but short-circuits on the first hit
  /// and constructs no handle.
  pub fn contains(&self, type_name: &str) -> bool {
    let mut level: &Level = &self.inner;
    loop {
      if level.registry.contains(type_name) {
        return true;
      }
      match level.parent.as_deref() {
        Some(parent) => level = parent,
        None => return false,
      }
    }
  }

  /// Number of services registered directly in this container.
  ///
  /// Ancestor registrations are not counted; each level reports its own.
  pub fn len(&self) -> usize {
    self.inner.registry.len()
  }

  /// Whether this container has no registrations of its own.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// The identity of this scope level.
  pub fn scope_id(&self) -> ScopeId {
    self.inner.scope
  }

  /// Distance from the root of this container's chain (root = 0).
  pub fn depth(&self) -> u32 {
    self.inner.depth
  }
}

impl Default for Container {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Container")
      .field("scope", &self.inner.scope)
      .field("depth", &self.inner.depth)
      .field("service_count", &self.len())
      .field("has_parent", &self.inner.parent.is_some())
      .finish()
  }
}

impl Drop for Level {
  // Unlink the parent chain iteratively: dropping the last handle to a deep
  // chain would otherwise recurse once per level.
  fn drop(&mut self) {
    let mut parent = self.parent.take();
    while let Some(level) = parent {
      match Arc::try_unwrap(level) {
        Ok(mut level) => parent = level.parent.take(),
        // Something else still holds this ancestor; it tears down later.
        Err(_) => break,
      }
    }
  }
}
