use strata::Container;

// Simulates handling one request against an application-wide root scope.
fn handle_request(root: &Container, request_id: &[u8]) -> String {
  let request = root.scope();
  request.register("RequestId", request_id).unwrap();

  // App-wide config falls through from the root; the request id is local.
  let config = request.resolve("AppConfig").unwrap();
  let id = request.resolve("RequestId").unwrap();

  format!(
    "handled {} with config {}",
    String::from_utf8_lossy(id.payload()),
    String::from_utf8_lossy(config.payload())
  )
}

fn main() {
  let root = Container::new();
  root.register("AppConfig", b"name=demo").unwrap();
  root.register("Logger", b"info").unwrap();

  println!("{}", handle_request(&root, b"req-1"));
  println!("{}", handle_request(&root, b"req-2"));

  // Request-scoped registrations never leaked into the root.
  assert!(!root.contains("RequestId"));

  // A test scope can shadow the root config without touching it.
  let test_scope = root.scope();
  test_scope.register("AppConfig", b"name=test").unwrap();
  println!(
    "test scope sees {}",
    String::from_utf8_lossy(test_scope.resolve("AppConfig").unwrap().payload())
  );
  println!(
    "root still sees {}",
    String::from_utf8_lossy(root.resolve("AppConfig").unwrap().payload())
  );
}
