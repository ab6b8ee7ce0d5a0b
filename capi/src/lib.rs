//! C-compatible bindings for the `strata` service registry.
//!
//! Rust generics cannot cross the C boundary, so services are registered and
//! resolved by string type names, with payloads passed as raw bytes (or JSON
//! text via the convenience functions) that the foreign side encodes and
//! decodes as it pleases.
//!
//! # Memory Management
//!
//! - `strata_container_new()` / `strata_container_scope()` allocate
//!   containers — free with `strata_container_free()`
//! - `strata_resolve()` returns service handles — free with
//!   `strata_service_free()`
//! - `strata_last_error()` and `strata_resolve_json()` return caller-owned
//!   strings — free with `strata_string_free()`
//! - Data and type-name pointers read from a service handle are borrowed and
//!   stay valid exactly as long as that handle
//!
//! All free functions are no-ops on NULL.
//!
//! # Thread Safety
//!
//! Containers and service handles are thread-safe; every function here may be
//! called from any thread. Error state is kept per calling thread.
//!
//! The full surface is declared for C callers in `include/strata.h`.

mod container;
mod error;
mod json;
mod service;

pub use container::{
  strata_contains, strata_container_free, strata_container_new, strata_container_scope,
  strata_register, strata_resolve, strata_service_count, strata_version, StrataContainer,
  StrataResolveResult,
};
pub use error::{strata_clear_error, strata_last_error, strata_string_free, StrataStatus};
pub use json::{strata_register_json, strata_resolve_json};
pub use service::{
  strata_service_data, strata_service_data_len, strata_service_free, strata_service_type_name,
  StrataService,
};
