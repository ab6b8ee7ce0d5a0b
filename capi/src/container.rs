//! Container lifecycle and the raw register/resolve operations.

use crate::error::{set_last_error, status_of, StrataStatus};
use crate::service::StrataService;
use std::ffi::{c_char, CStr};
use std::ptr;

/// Opaque container handle for C callers.
///
/// One `StrataContainer` is one scope level. Freeing it releases only this
/// level's own registrations; parents, children and outstanding service
/// handles are unaffected.
pub struct StrataContainer {
  pub(crate) inner: strata::Container,
}

/// Result of a resolve call: a status plus the service handle on success.
#[repr(C)]
pub struct StrataResolveResult {
  pub status: StrataStatus,
  pub service: *mut StrataService,
}

impl StrataResolveResult {
  fn failure(status: StrataStatus) -> Self {
    Self {
      status,
      service: ptr::null_mut(),
    }
  }
}

/// Read and validate a type-name argument.
///
/// # Safety
/// `type_name`, when non-null, must point to a valid NUL-terminated string
/// that outlives the returned borrow.
pub(crate) unsafe fn type_name_arg<'a>(
  type_name: *const c_char,
) -> Result<&'a str, StrataStatus> {
  if type_name.is_null() {
    set_last_error("type name is null");
    return Err(StrataStatus::InvalidArgument);
  }
  // SAFETY: Caller guarantees type_name is valid.
  match unsafe { CStr::from_ptr(type_name) }.to_str() {
    Ok(s) => Ok(s),
    Err(_) => {
      set_last_error("type name is not valid UTF-8");
      Err(StrataStatus::InvalidArgument)
    }
  }
}

// ============================================================================
// Container Lifecycle
// ============================================================================

/// Create a new root container.
///
/// # Returns
/// A pointer to the new container.
///
/// # Safety
/// The returned pointer must be freed with `strata_container_free()`.
#[no_mangle]
pub extern "C" fn strata_container_new() -> *mut StrataContainer {
  Box::into_raw(Box::new(StrataContainer {
    inner: strata::Container::new(),
  }))
}

/// Free a container.
///
/// Releases only this container's own registrations. Outstanding service
/// handles resolved from it remain valid, and child scopes keep resolving
/// through it. Passing NULL is a no-op.
///
/// # Safety
/// - `container`, when non-null, must be a valid pointer returned by
///   `strata_container_new()` or `strata_container_scope()`
/// - After this call the pointer is invalid
#[no_mangle]
pub unsafe extern "C" fn strata_container_free(container: *mut StrataContainer) {
  if !container.is_null() {
    // SAFETY: Caller guarantees container is valid.
    drop(unsafe { Box::from_raw(container) });
  }
}

/// Create a child scope of a container.
///
/// The child sees every registration of the parent chain through the live
/// chain — including registrations made after this call — and may shadow any
/// of them with its own.
///
/// # Returns
/// A pointer to the new scope, or NULL on failure.
///
/// # Safety
/// - `container` must be a valid container pointer
/// - The returned pointer must be freed with `strata_container_free()`
#[no_mangle]
pub unsafe extern "C" fn strata_container_scope(
  container: *const StrataContainer,
) -> *mut StrataContainer {
  if container.is_null() {
    set_last_error("container pointer is null");
    return ptr::null_mut();
  }

  // SAFETY: Caller guarantees container is valid.
  let parent = unsafe { &*container };
  Box::into_raw(Box::new(StrataContainer {
    inner: parent.inner.scope(),
  }))
}

// ============================================================================
// Registration and Resolution
// ============================================================================

/// Register a service with raw byte data.
///
/// The payload is copied into the container and stored immutably. A name
/// already registered at this scope level is rejected with
/// `STRATA_ALREADY_REGISTERED`; register in a child scope to shadow it
/// instead.
///
/// # Arguments
/// - `container` - the container to register in
/// - `type_name` - unique (per-level) identifier, NUL-terminated UTF-8
/// - `data` - pointer to the payload bytes (may be NULL when `data_len` is 0)
/// - `data_len` - payload length in bytes
///
/// # Safety
/// - `container` must be a valid container pointer
/// - `type_name` must be a valid NUL-terminated UTF-8 string
/// - `data`, when non-null, must point to at least `data_len` bytes
#[no_mangle]
pub unsafe extern "C" fn strata_register(
  container: *mut StrataContainer,
  type_name: *const c_char,
  data: *const u8,
  data_len: usize,
) -> StrataStatus {
  if container.is_null() {
    set_last_error("container pointer is null");
    return StrataStatus::InvalidArgument;
  }
  // SAFETY: Caller guarantees type_name validity.
  let name = match unsafe { type_name_arg(type_name) } {
    Ok(name) => name,
    Err(status) => return status,
  };
  if data.is_null() && data_len > 0 {
    set_last_error("data pointer is null but length is non-zero");
    return StrataStatus::InvalidArgument;
  }

  let payload: &[u8] = if data_len == 0 {
    &[]
  } else {
    // SAFETY: Caller guarantees data points to data_len bytes.
    unsafe { std::slice::from_raw_parts(data, data_len) }
  };

  // SAFETY: Caller guarantees container is valid.
  let container = unsafe { &*container };
  match container.inner.register(name, payload) {
    Ok(()) => StrataStatus::Ok,
    Err(err) => {
      set_last_error(err.to_string());
      status_of(&err)
    }
  }
}

/// Resolve a service by type name.
///
/// Walks from this container up through its parent chain; the level closest
/// to this container wins.
///
/// # Returns
/// A `StrataResolveResult`: on success the service handle, otherwise a NULL
/// handle and a status describing the failure (`STRATA_NOT_FOUND` when the
/// chain holds no such name).
///
/// # Safety
/// - `container` must be a valid container pointer
/// - `type_name` must be a valid NUL-terminated UTF-8 string
/// - On success the returned service must be freed with
///   `strata_service_free()`
#[no_mangle]
pub unsafe extern "C" fn strata_resolve(
  container: *const StrataContainer,
  type_name: *const c_char,
) -> StrataResolveResult {
  if container.is_null() {
    set_last_error("container pointer is null");
    return StrataResolveResult::failure(StrataStatus::InvalidArgument);
  }
  // SAFETY: Caller guarantees type_name validity.
  let name = match unsafe { type_name_arg(type_name) } {
    Ok(name) => name,
    Err(status) => return StrataResolveResult::failure(status),
  };

  // SAFETY: Caller guarantees container is valid.
  let container = unsafe { &*container };
  match container.inner.resolve(name) {
    Ok(handle) => match StrataService::from_handle(handle) {
      Some(service) => StrataResolveResult {
        status: StrataStatus::Ok,
        service: Box::into_raw(Box::new(service)),
      },
      None => {
        set_last_error("internal error: type name not representable as C string");
        StrataResolveResult::failure(StrataStatus::InternalError)
      }
    },
    Err(err) => {
      set_last_error(err.to_string());
      StrataResolveResult::failure(status_of(&err))
    }
  }
}

/// Check whether a service is registered in a container or any ancestor.
///
/// # Returns
/// 1 if registered, 0 if not, -1 on error.
///
/// # Safety
/// - `container` must be a valid container pointer
/// - `type_name` must be a valid NUL-terminated string
#[no_mangle]
pub unsafe extern "C" fn strata_contains(
  container: *const StrataContainer,
  type_name: *const c_char,
) -> i32 {
  if container.is_null() || type_name.is_null() {
    return -1;
  }

  // SAFETY: Caller guarantees type_name is valid.
  let name = match unsafe { CStr::from_ptr(type_name) }.to_str() {
    Ok(s) => s,
    Err(_) => return -1,
  };

  // SAFETY: Caller guarantees container is valid.
  let container = unsafe { &*container };
  i32::from(container.inner.contains(name))
}

/// Get the number of services registered directly in a container.
///
/// Ancestor scopes are not counted.
///
/// # Returns
/// The number of services, or -1 on error.
///
/// # Safety
/// `container`, when non-null, must be a valid container pointer.
#[no_mangle]
pub unsafe extern "C" fn strata_service_count(container: *const StrataContainer) -> i64 {
  if container.is_null() {
    return -1;
  }
  // SAFETY: Caller guarantees container is valid.
  let container = unsafe { &*container };
  container.inner.len() as i64
}

/// Get the library version.
///
/// # Returns
/// A pointer to a static NUL-terminated version string. It must NOT be freed.
#[no_mangle]
pub extern "C" fn strata_version() -> *const c_char {
  static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
  VERSION.as_ptr() as *const c_char
}
