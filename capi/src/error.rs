//! Status codes and per-thread error state for the C boundary.

use std::cell::RefCell;
use std::ffi::{c_char, CString};
use std::ptr;

/// Status codes returned across the C boundary.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrataStatus {
  /// Operation succeeded.
  Ok = 0,
  /// Service not found on the scope chain.
  NotFound = 1,
  /// Invalid argument (null pointer, invalid UTF-8, malformed type name).
  InvalidArgument = 2,
  /// Service already registered at this scope level.
  AlreadyRegistered = 3,
  /// Internal error.
  InternalError = 4,
  /// JSON payload failed to parse.
  SerializationError = 5,
}

thread_local! {
  // At most one pending message per thread, overwritten by each failing call.
  static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub(crate) fn set_last_error(msg: impl Into<String>) {
  LAST_ERROR.with(|e| {
    *e.borrow_mut() = Some(msg.into());
  });
}

/// Map a core error onto its boundary status code.
pub(crate) fn status_of(err: &strata::Error) -> StrataStatus {
  match err {
    strata::Error::NotFound { .. } => StrataStatus::NotFound,
    strata::Error::InvalidArgument { .. } => StrataStatus::InvalidArgument,
    strata::Error::AlreadyRegistered { .. } => StrataStatus::AlreadyRegistered,
    strata::Error::Internal(_) => StrataStatus::InternalError,
  }
}

/// Get the calling thread's last error message.
///
/// # Returns
/// A pointer to a NUL-terminated copy of the message, or NULL when no error
/// is pending. The caller owns the copy and frees it with
/// `strata_string_free()`. Error state is per thread; failures on other
/// threads are never visible here.
#[no_mangle]
pub extern "C" fn strata_last_error() -> *mut c_char {
  LAST_ERROR.with(|e| match &*e.borrow() {
    Some(msg) => match CString::new(msg.as_str()) {
      Ok(cstr) => cstr.into_raw(),
      Err(_) => ptr::null_mut(),
    },
    None => ptr::null_mut(),
  })
}

/// Clear the calling thread's pending error message, if any.
#[no_mangle]
pub extern "C" fn strata_clear_error() {
  LAST_ERROR.with(|e| {
    *e.borrow_mut() = None;
  });
}

/// Free a string returned by this library.
///
/// Passing NULL is a no-op.
///
/// # Safety
/// - `s` must be a string returned by this library (e.g. from
///   `strata_last_error()` or `strata_resolve_json()`)
/// - After this call the pointer is invalid
#[no_mangle]
pub unsafe extern "C" fn strata_string_free(s: *mut c_char) {
  if !s.is_null() {
    // SAFETY: Caller guarantees s was allocated by CString::into_raw.
    drop(unsafe { CString::from_raw(s) });
  }
}
