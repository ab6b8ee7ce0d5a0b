//! Public macros for ergonomic service resolution.

/// Resolves a service from the global container.
///
/// Panics if the requested type name is not registered anywhere on the global
/// chain, ensuring required dependencies are present at runtime. For a
/// non-panicking version, use `global().resolve(..)` or
/// `global().try_resolve(..)` directly.
///
/// # Examples
///
/// ```
/// use strata::{global, resolve};
///
/// global().register("macro_greeting", b"hello").unwrap();
///
/// let greeting = resolve!("macro_greeting");
/// assert_eq!(greeting.payload(), b"hello");
/// ```
#[macro_export]
macro_rules! resolve {
  ($type_name:expr) => {
    $crate::global().resolve($type_name).unwrap_or_else(|err| {
      panic!(
        "failed to resolve required service '{}': {}",
        $type_name, err
      )
    })
  };
}
