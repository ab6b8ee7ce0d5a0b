//! Error types for container and registry operations.

use thiserror::Error;

/// Errors returned by container and registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// No registration for the type name anywhere on the scope chain.
  ///
  /// This is the normal outcome of resolving a name that was never
  /// registered, not a sign of misuse.
  #[error("service not found: {type_name}")]
  NotFound { type_name: String },

  /// A malformed type name or missing required input.
  #[error("invalid argument: {reason}")]
  InvalidArgument { reason: String },

  /// The type name is already registered at this scope level.
  ///
  /// Registration within one level is add-or-reject; overriding a name is
  /// done by registering it in a child scope instead.
  #[error("service already registered: {type_name}")]
  AlreadyRegistered { type_name: String },

  /// An internal invariant was violated. Indicates a bug in this crate.
  #[error("internal registry error: {0}")]
  Internal(String),
}

impl Error {
  /// Create a NotFound error for a type name.
  #[inline]
  pub fn not_found(type_name: impl Into<String>) -> Self {
    Self::NotFound {
      type_name: type_name.into(),
    }
  }

  /// Create an InvalidArgument error.
  #[inline]
  pub fn invalid_argument(reason: impl Into<String>) -> Self {
    Self::InvalidArgument {
      reason: reason.into(),
    }
  }

  /// Create an AlreadyRegistered error for a type name.
  #[inline]
  pub fn already_registered(type_name: impl Into<String>) -> Self {
    Self::AlreadyRegistered {
      type_name: type_name.into(),
    }
  }
}

/// Result type alias for container operations.
pub type Result<T> = std::result::Result<T, Error>;
