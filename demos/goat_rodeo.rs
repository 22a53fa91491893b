//! Two threads hammer a shared can counter, one depositing and one eating.
//! Every round must end with exactly as many cans as it started with.
//!
//! Run with `RUST_LOG=info cargo run --example goat_rodeo`.

use std::thread;
use std::time::Instant;

use log::{error, info};

use conquer_prim::SpinMutex;

const ITERATIONS: usize = 1_000_000;
const ROUNDS: usize = 3;

fn goat_rodeo(round: usize) -> i64 {
    let cans = SpinMutex::new(0i64);

    let start = Instant::now();
    thread::scope(|s| {
        for delta in [-1i64, 1] {
            let cans = &cans;
            s.spawn(move || {
                for _ in 0..ITERATIONS {
                    *cans.lock() += delta;
                }
            });
        }
    });

    let cans = cans.into_inner();
    info!("round {}: {} cans after {:?}", round, cans, start.elapsed());
    cans
}

fn main() {
    env_logger::init();

    for round in 0..ROUNDS {
        let cans = goat_rodeo(round);
        if cans != 0 {
            error!("round {}: lost updates, {} cans left over", round, cans);
            std::process::exit(1);
        }
    }
}
