//! Parallel DFT Example
//!
//! This example compares the serial and data-parallel evaluation of the
//! direct transform, timing both on the same input.

use std::time::Instant;

use naive_dft::dft::DirectRealDFT;
use naive_dft::parallel::ParallelDFT;
use naive_dft::signal;
use num_complex::Complex;

fn main() {
    println!("Parallel DFT Example");
    println!("====================");

    const SIZE: usize = 4096;

    let samples: Vec<f64> = signal::sine(SIZE, 3.0, 1.0);
    let mut serial = vec![Complex::new(0.0, 0.0); SIZE];
    let mut parallel = vec![Complex::new(0.0, 0.0); SIZE];

    // Serial evaluation
    println!("\nEvaluating {} bins serially...", SIZE);
    let start = Instant::now();
    DirectRealDFT::new(SIZE).transform(&samples, &mut serial);
    let serial_duration = start.elapsed();
    println!("Serial time: {:?}", serial_duration);

    // Parallel evaluation over the worker pool
    println!("Evaluating {} bins in parallel...", SIZE);
    let start = Instant::now();
    ParallelDFT::new(SIZE).transform_real(&samples, &mut parallel);
    let parallel_duration = start.elapsed();
    println!("Parallel time: {:?}", parallel_duration);

    if parallel_duration < serial_duration {
        let speedup = serial_duration.as_nanos() as f64 / parallel_duration.as_nanos() as f64;
        println!("Parallel version is {:.2}x faster", speedup);
    } else {
        let slowdown = parallel_duration.as_nanos() as f64 / serial_duration.as_nanos() as f64;
        println!("Parallel version is {:.2}x slower", slowdown);
    }

    // The two paths share their per-bin arithmetic, so the spectra match
    let identical = serial == parallel;
    println!("Spectra identical: {}", identical);
}
