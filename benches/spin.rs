use std::sync::{Arc, Mutex};
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use conquer_prim::{slice_array, SpinLock, SpinMutex};

fn bench_uncontended(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncontended");

    let lock = SpinLock::new();
    group.bench_function("spin_lock", |b| {
        b.iter(|| {
            lock.lock();
            black_box(&lock);
            lock.unlock();
        })
    });

    let spin = SpinMutex::new(0u64);
    group.bench_function("spin_mutex", |b| b.iter(|| *spin.lock() += 1));

    let std = Mutex::new(0u64);
    group.bench_function("std_mutex", |b| b.iter(|| *std.lock().unwrap() += 1));

    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");

    for threads in [2usize, 4] {
        group.bench_with_input(BenchmarkId::new("spin_mutex", threads), &threads, |b, &threads| {
            b.iter(|| {
                let counter = Arc::new(SpinMutex::new(0u64));
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let counter = Arc::clone(&counter);
                        thread::spawn(move || {
                            for _ in 0..1_000 {
                                *counter.lock() += 1;
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std_mutex", threads), &threads, |b, &threads| {
            b.iter(|| {
                let counter = Arc::new(Mutex::new(0u64));
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let counter = Arc::clone(&counter);
                        thread::spawn(move || {
                            for _ in 0..1_000 {
                                *counter.lock().unwrap() += 1;
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

fn bench_slice(c: &mut Criterion) {
    let src: [u64; 64] = std::array::from_fn(|idx| idx as u64);
    c.bench_function("slice_array_16", |b| {
        b.iter(|| {
            let res: [u64; 16] = slice_array(black_box(&src), black_box(8), black_box(24)).unwrap();
            black_box(res)
        })
    });
}

criterion_group!(benches, bench_uncontended, bench_contended, bench_slice);
criterion_main!(benches);
