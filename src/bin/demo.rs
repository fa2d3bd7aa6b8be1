//! Demo driver: extremum reductions, fork-join quicksorts of growing
//! sizes and a sequential versus parallel fill comparison.
//!
//! An optional first argument fixes the worker count; by default the
//! pool matches the machine.
use fork_kernels::{
    extremum, fill_parallel, fill_sequential, quicksort, Extremum, ThreadPool, ThreadPoolBuilder,
};

const MASS_SIZE: usize = 5_000_000;
const FILL_SIZES: [usize; 8] = [1_000_000, 100_000, 10_000, 1_000, 500, 100, 50, 10];

fn report_extremums(pool: &ThreadPool, mass: &[i32]) {
    let maximum = pool
        .install(|| extremum(mass, Extremum::Max))
        .expect("reducing an empty array");
    println!(
        "Maximal element = {} has index = {}",
        maximum.value, maximum.index
    );
    let minimum = pool
        .install(|| extremum(mass, Extremum::Min))
        .expect("reducing an empty array");
    println!(
        "Minimal element = {} has index = {}",
        minimum.value, minimum.index
    );
    println!();
}

fn report_sort(pool: &ThreadPool, mass: &mut [i32]) {
    let size = mass.len();
    let ((), elapsed) = pool.timed_install(|| quicksort(mass));
    println!(
        "ParallelSort - Size: {}; Elapsed time: {:.6} seconds",
        size,
        elapsed.as_secs_f64()
    );
    println!();
}

fn report_fill_comparison(pool: &ThreadPool, size: usize) {
    println!("Filling vector - Size: {}", size);
    pool.compare()
        .runs_number(5)
        .attach_algorithm("sequential fill", move || {
            fill_sequential(size, 1..=20_000);
        })
        .attach_algorithm("parallel fill", move || {
            fill_parallel(size, 1..=20_000);
        })
        .write_summary(&mut std::io::stdout())
        .expect("writing summary failed");
    println!();
}

fn main() {
    let mut builder = ThreadPoolBuilder::new();
    if let Some(threads) = std::env::args().nth(1) {
        builder = builder.num_threads(threads.parse().expect("worker count must be an integer"));
    }
    let pool = builder.build().expect("building pool failed");

    let mut mass = fill_sequential(MASS_SIZE, 1..=25_000);
    let mut mass1 = fill_sequential(MASS_SIZE / 2, 1..=25_000);
    let mut mass2 = fill_sequential(MASS_SIZE / 10, 1..=25_000);

    report_extremums(&pool, &mass);

    report_sort(&pool, &mut mass2);
    report_sort(&pool, &mut mass1);
    report_sort(&pool, &mut mass);

    report_extremums(&pool, &mass);

    for &size in FILL_SIZES.iter() {
        report_fill_comparison(&pool, size);
    }
}
