//! The global root container and access function.

use crate::container::Container;
use once_cell::sync::Lazy;

// The one and only global root container, created on first access in a
// thread-safe manner.
static GLOBAL_CONTAINER: Lazy<Container> = Lazy::new(Container::new);

/// Provides a reference to the global root container.
///
/// Useful for applications that want one ambient scope chain without
/// threading a [`Container`] through every call site. Scopes created from it
/// behave exactly like scopes of any other root, and independent roots remain
/// available via [`Container::new`].
///
/// # Examples
///
/// ```
/// use strata::global;
///
/// fn register_services() {
///   global().register("global_greeting", b"hello").unwrap();
/// }
///
/// register_services();
/// assert!(global().contains("global_greeting"));
/// ```
pub fn global() -> &'static Container {
  &GLOBAL_CONTAINER
}
