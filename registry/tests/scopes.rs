use strata::{Container, Error};

#[test]
fn child_resolves_parent_service() {
  let root = Container::new();
  root.register("Database", b"root-db").unwrap();

  let child = root.scope();
  assert_eq!(child.resolve("Database").unwrap().payload(), b"root-db");
}

#[test]
fn child_registration_shadows_parent() {
  let root = Container::new();
  root.register("Database", b"production").unwrap();

  let test_scope = root.scope();
  test_scope.register("Database", b"test").unwrap();

  // The child sees its own value, the root keeps its own.
  assert_eq!(test_scope.resolve("Database").unwrap().payload(), b"test");
  assert_eq!(root.resolve("Database").unwrap().payload(), b"production");
}

#[test]
fn child_registration_never_leaks_upward() {
  let root = Container::new();
  let child = root.scope();

  assert!(matches!(
    root.resolve("RequestId"),
    Err(Error::NotFound { .. })
  ));

  child.register("RequestId", b"req-123").unwrap();

  // Still absent from the root after the child registration.
  assert!(matches!(
    root.resolve("RequestId"),
    Err(Error::NotFound { .. })
  ));
  assert!(!root.contains("RequestId"));
}

#[test]
fn siblings_are_isolated() {
  let root = Container::new();
  let left = root.scope();
  let right = root.scope();

  left.register("Session", b"left").unwrap();

  assert!(left.contains("Session"));
  assert!(!right.contains("Session"));
}

#[test]
fn grandchild_falls_through_to_root() {
  let root = Container::new();
  root.register("AppConfig", b"name=app").unwrap();

  let child = root.scope();
  let grandchild = child.scope();

  assert_eq!(
    grandchild.resolve("AppConfig").unwrap().payload(),
    b"name=app"
  );
  assert_eq!(grandchild.depth(), 2);
}

#[test]
fn nearest_level_wins_over_deeper_ancestors() {
  let root = Container::new();
  root.register("Level", b"root").unwrap();

  let mid = root.scope();
  mid.register("Level", b"mid").unwrap();

  let leaf = mid.scope();
  assert_eq!(leaf.resolve("Level").unwrap().payload(), b"mid");

  leaf.register("Level", b"leaf").unwrap();
  assert_eq!(leaf.resolve("Level").unwrap().payload(), b"leaf");
  assert_eq!(mid.resolve("Level").unwrap().payload(), b"mid");
  assert_eq!(root.resolve("Level").unwrap().payload(), b"root");
}

#[test]
fn child_sees_registrations_made_after_its_creation() {
  let root = Container::new();
  let child = root.scope();

  root.register("LateService", b"late").unwrap();

  // The chain is live, not a snapshot taken at scope creation.
  assert_eq!(child.resolve("LateService").unwrap().payload(), b"late");
}

#[test]
fn count_is_per_level() {
  let root = Container::new();
  root.register("A", b"").unwrap();
  root.register("B", b"").unwrap();
  root.register("C", b"").unwrap();

  let child = root.scope();
  child.register("D", b"").unwrap();
  child.register("E", b"").unwrap();

  assert_eq!(root.len(), 3);
  assert_eq!(child.len(), 2);
}

#[test]
fn handle_survives_container_drop() {
  let container = Container::new();
  container.register("Payload", b"still readable").unwrap();

  let handle = container.resolve("Payload").unwrap();
  drop(container);

  assert_eq!(handle.type_name(), "Payload");
  assert_eq!(handle.payload(), b"still readable");
}

#[test]
fn handle_survives_whole_chain_teardown() {
  let root = Container::new();
  root.register("FromRoot", b"root bytes").unwrap();

  let child = root.scope();
  let handle = child.resolve("FromRoot").unwrap();

  drop(root);
  drop(child);

  assert_eq!(handle.payload(), b"root bytes");
}

#[test]
fn child_resolves_after_parent_handle_dropped() {
  let root = Container::new();
  root.register("Config", b"kept alive").unwrap();

  let child = root.scope();
  drop(root);

  // The child's counted reference keeps the parent level reachable.
  assert_eq!(child.resolve("Config").unwrap().payload(), b"kept alive");
  assert!(child.contains("Config"));
}

#[test]
fn deep_chain_resolves_iteratively() {
  let root = Container::new();
  root.register("Root", b"deep").unwrap();

  let mut leaf = root.scope();
  for _ in 0..2_000 {
    leaf = leaf.scope();
  }

  assert_eq!(leaf.depth(), 2_001);
  assert_eq!(leaf.resolve("Root").unwrap().payload(), b"deep");
  assert!(leaf.contains("Root"));
  assert!(!leaf.contains("Missing"));
}

#[test]
fn deep_chain_tears_down_without_recursion() {
  let mut leaf = Container::new();
  for _ in 0..50_000 {
    leaf = leaf.scope();
  }

  // Dropping the only handle to a 50k-level chain must not overflow the
  // stack; the parent links are unlinked iteratively.
  drop(leaf);
}

#[test]
fn end_to_end_logger_example() {
  let root = Container::new();
  root.register("Logger", b"debug").unwrap();

  let scope = root.scope();
  assert_eq!(scope.resolve("Logger").unwrap().payload(), b"debug");

  scope.register("Logger", b"trace").unwrap();
  assert_eq!(scope.resolve("Logger").unwrap().payload(), b"trace");
  assert_eq!(root.resolve("Logger").unwrap().payload(), b"debug");
}
