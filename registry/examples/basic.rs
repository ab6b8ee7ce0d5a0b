use strata::Container;

fn main() {
  let container = Container::new();

  // Register a couple of services as opaque payloads.
  container
    .register("Database", b"postgres://localhost:5432/app")
    .unwrap();
  container.register("Cache", b"redis://localhost:6379").unwrap();

  // Resolve them back by type name.
  let db = container.resolve("Database").unwrap();
  println!(
    "{} -> {}",
    db.type_name(),
    String::from_utf8_lossy(db.payload())
  );

  let cache = container.resolve("Cache").unwrap();
  println!(
    "{} -> {}",
    cache.type_name(),
    String::from_utf8_lossy(cache.payload())
  );

  // A duplicate registration at the same level is rejected, never overwritten.
  let err = container.register("Database", b"sqlite://memory").unwrap_err();
  println!("second registration: {}", err);

  println!("services registered: {}", container.len());
}
