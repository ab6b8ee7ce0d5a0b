//! JSON convenience layer over the raw byte operations.
//!
//! These functions are a pass-through for callers that exchange service data
//! as JSON text: registration validates the text parses and then stores its
//! bytes via the raw path; resolution returns the stored bytes back as text.
//! Parse failures map to `STRATA_SERIALIZATION_ERROR`; the raw operations
//! never produce that status.

use crate::container::{type_name_arg, StrataContainer};
use crate::error::{set_last_error, status_of, StrataStatus};
use std::ffi::{c_char, CStr, CString};
use std::ptr;

/// Register a service from JSON text.
///
/// The text must parse as JSON; it is then stored byte-for-byte as the
/// service payload (no re-encoding).
///
/// # Returns
/// `STRATA_OK`, `STRATA_SERIALIZATION_ERROR` when the text does not parse,
/// or the same statuses as `strata_register()`.
///
/// # Safety
/// - `container` must be a valid container pointer
/// - `type_name` and `json` must be valid NUL-terminated UTF-8 strings
#[no_mangle]
pub unsafe extern "C" fn strata_register_json(
  container: *mut StrataContainer,
  type_name: *const c_char,
  json: *const c_char,
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
  if json.is_null() {
    set_last_error("json data is null");
    return StrataStatus::InvalidArgument;
  }

  // SAFETY: Caller guarantees json is valid.
  let json_str = match unsafe { CStr::from_ptr(json) }.to_str() {
    Ok(s) => s,
    Err(_) => {
      set_last_error("json data is not valid UTF-8");
      return StrataStatus::InvalidArgument;
    }
  };

  if let Err(err) = serde_json::from_str::<serde_json::Value>(json_str) {
    set_last_error(format!("json payload does not parse: {}", err));
    return StrataStatus::SerializationError;
  }

  // SAFETY: Caller guarantees container is valid.
  let container = unsafe { &*container };
  match container.inner.register(name, json_str.as_bytes()) {
    Ok(()) => StrataStatus::Ok,
    Err(err) => {
      set_last_error(err.to_string());
      status_of(&err)
    }
  }
}

/// Resolve a service and return its payload as JSON text.
///
/// The stored payload must be UTF-8 that parses as JSON; anything else sets
/// a serialization error.
///
/// # Returns
/// A pointer to a NUL-terminated copy of the JSON text, or NULL on any
/// failure (inspect `strata_last_error()`). The caller owns the copy and
/// frees it with `strata_string_free()`.
///
/// # Safety
/// - `container` must be a valid container pointer
/// - `type_name` must be a valid NUL-terminated UTF-8 string
#[no_mangle]
pub unsafe extern "C" fn strata_resolve_json(
  container: *const StrataContainer,
  type_name: *const c_char,
) -> *mut c_char {
  if container.is_null() {
    set_last_error("container pointer is null");
    return ptr::null_mut();
  }
  // SAFETY: Caller guarantees type_name validity.
  let name = match unsafe { type_name_arg(type_name) } {
    Ok(name) => name,
    Err(_) => return ptr::null_mut(),
  };

  // SAFETY: Caller guarantees container is valid.
  let container = unsafe { &*container };
  let handle = match container.inner.resolve(name) {
    Ok(handle) => handle,
    Err(err) => {
      set_last_error(err.to_string());
      return ptr::null_mut();
    }
  };

  let text = match std::str::from_utf8(handle.payload()) {
    Ok(text) => text,
    Err(_) => {
      set_last_error(format!("payload of '{}' is not UTF-8 JSON", name));
      return ptr::null_mut();
    }
  };
  if let Err(err) = serde_json::from_str::<serde_json::Value>(text) {
    set_last_error(format!("payload of '{}' does not parse as JSON: {}", name, err));
    return ptr::null_mut();
  }

  match CString::new(text) {
    Ok(cstr) => cstr.into_raw(),
    Err(_) => {
      set_last_error(format!("payload of '{}' contains NUL bytes", name));
      ptr::null_mut()
    }
  }
}
