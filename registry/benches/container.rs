use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata::Container;

fn bench_register(c: &mut Criterion) {
  c.bench_function("register", |b| {
    let mut i: u64 = 0;
    let container = Container::new();
    b.iter(|| {
      i += 1;
      let name = format!("service-{}", i);
      container.register(black_box(&name), black_box(b"payload")).unwrap();
    });
  });
}

fn bench_resolve_local(c: &mut Criterion) {
  let container = Container::new();
  container.register("Database", b"postgres://localhost").unwrap();

  c.bench_function("resolve_local", |b| {
    b.iter(|| container.resolve(black_box("Database")).unwrap());
  });
}

fn bench_resolve_through_chain(c: &mut Criterion) {
  let root = Container::new();
  root.register("Database", b"postgres://localhost").unwrap();

  let mut leaf = root.scope();
  for _ in 0..6 {
    leaf = leaf.scope();
  }

  c.bench_function("resolve_through_chain_depth_7", |b| {
    b.iter(|| leaf.resolve(black_box("Database")).unwrap());
  });
}

fn bench_contains_miss(c: &mut Criterion) {
  let root = Container::new();
  root.register("Present", b"x").unwrap();
  let leaf = root.scope().scope().scope();

  c.bench_function("contains_miss_depth_4", |b| {
    b.iter(|| leaf.contains(black_box("Absent")));
  });
}

criterion_group!(
  benches,
  bench_register,
  bench_resolve_local,
  bench_resolve_through_chain,
  bench_contains_miss
);
criterion_main!(benches);
