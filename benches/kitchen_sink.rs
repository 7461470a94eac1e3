#[macro_use]
extern crate criterion;

use criterion::Criterion;
use intervals::{Endpoint, Interval};
use rand::prelude::*;

// Count how many pairs in a schedule of random bookings clash.
fn kitchen_sink(bookings: &[Interval<i32>]) -> usize {
    let mut clashes = 0;
    for (n, booking) in bookings.iter().enumerate() {
        for other in &bookings[n + 1..] {
            if booking.overlaps(other) {
                clashes += 1;
            }
        }
    }
    clashes
}

fn random_endpoint(rng: &mut ThreadRng, value: i32) -> Endpoint<i32> {
    if rng.gen() {
        Endpoint::closed(value)
    } else {
        Endpoint::open(value)
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("kitchen sink", |b| {
        let mut rng = thread_rng();
        let bookings: Vec<Interval<i32>> = (0..1000)
            .map(|_| {
                let start = rng.gen_range(0..1000);
                let end = start + rng.gen_range(0..100);
                let lower = random_endpoint(&mut rng, start);
                let upper = random_endpoint(&mut rng, end);
                Interval::new(lower, upper)
            })
            .collect();
        b.iter(|| kitchen_sink(&bookings))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
