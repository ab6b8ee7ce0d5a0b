use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use strata::{Container, Error};

#[test]
fn concurrent_same_key_registration_has_one_winner() {
  const THREADS: usize = 16;

  let container = Container::new();
  let winners = AtomicUsize::new(0);
  let losers = AtomicUsize::new(0);

  thread::scope(|s| {
    for i in 0..THREADS {
      let container = &container;
      let winners = &winners;
      let losers = &losers;
      s.spawn(move || {
        let payload = format!("payload-{}", i);
        match container.register("Contested", payload.as_bytes()) {
          Ok(()) => {
            winners.fetch_add(1, Ordering::SeqCst);
          }
          Err(Error::AlreadyRegistered { .. }) => {
            losers.fetch_add(1, Ordering::SeqCst);
          }
          Err(err) => panic!("unexpected registration error: {}", err),
        }
      });
    }
  });

  assert_eq!(winners.load(Ordering::SeqCst), 1);
  assert_eq!(losers.load(Ordering::SeqCst), THREADS - 1);

  // Resolution is consistent with whichever registration won.
  let handle = container.resolve("Contested").unwrap();
  assert!(handle.payload().starts_with(b"payload-"));
  assert_eq!(container.len(), 1);
}

#[test]
fn concurrent_distinct_registrations_all_land() {
  const THREADS: usize = 10;

  let container = Container::new();

  thread::scope(|s| {
    for i in 0..THREADS {
      let container = &container;
      s.spawn(move || {
        let name = format!("thread_service_{}", i);
        container.register(&name, i.to_string().as_bytes()).unwrap();

        // The thread's own write is immediately visible to it.
        let handle = container.resolve(&name).unwrap();
        assert_eq!(handle.payload(), i.to_string().as_bytes());
      });
    }
  });

  assert_eq!(container.len(), THREADS);
  for i in 0..THREADS {
    let name = format!("thread_service_{}", i);
    assert_eq!(
      container.resolve(&name).unwrap().payload(),
      i.to_string().as_bytes()
    );
  }
}

#[test]
fn resolution_runs_concurrently_with_registration() {
  // A stress test: readers hammer a pre-registered service while writers add
  // new names, checking that neither side deadlocks or observes torn state.
  let container = Container::new();
  container.register("common_service", b"42").unwrap();

  thread::scope(|s| {
    for i in 0..8 {
      let container = &container;
      s.spawn(move || {
        for round in 0..100 {
          let common = container.resolve("common_service").unwrap();
          assert_eq!(common.payload(), b"42");

          if round % 10 == 0 {
            let name = format!("writer_{}_round_{}", i, round);
            container.register(&name, b"fresh").unwrap();
          }
        }
      });
    }
  });

  assert_eq!(container.resolve("common_service").unwrap().payload(), b"42");
}

#[test]
fn scope_creation_is_concurrent_with_parent_reads() {
  let root = Container::new();
  root.register("Shared", b"from root").unwrap();

  thread::scope(|s| {
    for _ in 0..8 {
      let root = &root;
      s.spawn(move || {
        for _ in 0..50 {
          let child = root.scope();
          assert_eq!(child.resolve("Shared").unwrap().payload(), b"from root");
        }
      });
    }
  });
}

#[test]
fn parent_teardown_races_child_resolution() {
  let root = Container::new();
  root.register("Durable", b"survives teardown").unwrap();
  let child = root.scope();

  thread::scope(|s| {
    let resolver = {
      let child = child.clone();
      s.spawn(move || {
        for _ in 0..1_000 {
          let handle = child.resolve("Durable").unwrap();
          assert_eq!(handle.payload(), b"survives teardown");
        }
      })
    };

    // Drop the root's handle while the resolver is mid-walk; the child's
    // counted reference keeps every level it needs alive.
    drop(root);
    resolver.join().unwrap();
  });

  assert_eq!(
    child.resolve("Durable").unwrap().payload(),
    b"survives teardown"
  );
}

#[test]
fn handles_outlive_concurrent_chain_teardown() {
  let root = Container::new();
  root.register("Entry", b"pinned by handle").unwrap();
  let child = root.scope();

  let handle = child.resolve("Entry").unwrap();

  thread::scope(|s| {
    s.spawn(move || drop(root));
    s.spawn(move || drop(child));
  });

  assert_eq!(handle.payload(), b"pinned by handle");
  assert_eq!(handle.type_name(), "Entry");
}
