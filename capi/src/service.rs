//! Service handles returned to C callers.

use std::ffi::{c_char, CString};
use std::ptr;
use strata::ServiceHandle;

/// Opaque handle onto one resolved service.
///
/// The handle keeps the underlying entry alive independently of any
/// container, so the data and type-name pointers handed out below stay valid
/// until the handle is freed — even if every container on the chain that
/// produced it has been freed in the meantime.
pub struct StrataService {
  handle: ServiceHandle,
  // NUL-terminated copy of the type name, cached so the accessor can return
  // a pointer that lives as long as the handle.
  type_name: CString,
}

impl StrataService {
  pub(crate) fn from_handle(handle: ServiceHandle) -> Option<Self> {
    // Registered names are NUL-free, so this only fails on an internal
    // invariant break.
    let type_name = CString::new(handle.type_name()).ok()?;
    Some(Self { handle, type_name })
  }
}

/// Get the payload data pointer from a service handle.
///
/// # Returns
/// Pointer to the payload bytes, or NULL on error. The pointer is valid until
/// the service handle is freed.
///
/// # Safety
/// `service`, when non-null, must be a valid pointer returned by
/// `strata_resolve()`.
#[no_mangle]
pub unsafe extern "C" fn strata_service_data(service: *const StrataService) -> *const u8 {
  if service.is_null() {
    return ptr::null();
  }
  // SAFETY: Caller guarantees service is valid.
  unsafe { &*service }.handle.payload().as_ptr()
}

/// Get the payload length from a service handle.
///
/// # Returns
/// Length of the payload in bytes, or 0 on error.
///
/// # Safety
/// `service`, when non-null, must be a valid pointer returned by
/// `strata_resolve()`.
#[no_mangle]
pub unsafe extern "C" fn strata_service_data_len(service: *const StrataService) -> usize {
  if service.is_null() {
    return 0;
  }
  // SAFETY: Caller guarantees service is valid.
  unsafe { &*service }.handle.len()
}

/// Get the type name from a service handle.
///
/// # Returns
/// Pointer to the NUL-terminated type name, or NULL on error. The pointer is
/// valid until the service handle is freed and must NOT be freed by the
/// caller.
///
/// # Safety
/// `service`, when non-null, must be a valid pointer returned by
/// `strata_resolve()`.
#[no_mangle]
pub unsafe extern "C" fn strata_service_type_name(
  service: *const StrataService,
) -> *const c_char {
  if service.is_null() {
    return ptr::null();
  }
  // SAFETY: Caller guarantees service is valid.
  unsafe { &*service }.type_name.as_ptr()
}

/// Free a service handle.
///
/// Releases this handle's reference to the service entry; the entry itself is
/// destroyed only once its registry slot and every other handle have released
/// it too. Passing NULL is a no-op.
///
/// # Safety
/// - `service`, when non-null, must be a valid pointer returned by
///   `strata_resolve()`
/// - After this call the pointer is invalid
#[no_mangle]
pub unsafe extern "C" fn strata_service_free(service: *mut StrataService) {
  if !service.is_null() {
    // SAFETY: Caller guarantees service is valid.
    drop(unsafe { Box::from_raw(service) });
  }
}
