//! # Strata
//!
//! A thread-safe, hierarchical service registry for Rust.
//!
//! Strata associates opaque byte payloads with string type names and resolves
//! them through a chain of nested scopes. Registration is always explicit: a
//! service is a byte sequence under a unique (per-level) name, not a typed
//! object graph the container constructs for you.
//!
//! ## Core Concepts
//!
//! - **Container**: one scope level, holding its own registrations and an
//!   optional parent.
//! - **Scopes**: child containers created with [`Container::scope`] see every
//!   ancestor registration and may shadow any of them locally.
//! - **Handles**: a successful [`Container::resolve`] returns a
//!   [`ServiceHandle`] that stays valid even after the container it came from
//!   is dropped.
//! - **Global container**: a static root, accessible via [`global`] and the
//!   [`resolve!`] macro.
//!
//! ## Quick Start
//!
//! ```
//! use strata::Container;
//!
//! let root = Container::new();
//! root.register("Logger", b"debug").unwrap();
//!
//! // A request-scoped child sees the root's services...
//! let request = root.scope();
//! assert_eq!(request.resolve("Logger").unwrap().payload(), b"debug");
//!
//! // ...and can shadow them without affecting the root.
//! request.register("Logger", b"trace").unwrap();
//! assert_eq!(request.resolve("Logger").unwrap().payload(), b"trace");
//! assert_eq!(root.resolve("Logger").unwrap().payload(), b"debug");
//! ```

mod container;
mod entry;
mod error;
mod global;
mod handle;
mod macros;
mod registry;
mod scope;

pub use container::Container;
pub use error::{Error, Result};
pub use global::global;
pub use handle::ServiceHandle;
pub use scope::ScopeId;
