//! Direct DFT Example
//!
//! This example demonstrates the baseline O(N²) discrete Fourier transform
//! on an impulse and on a sampled sine wave.

use naive_dft::dft::{dft, DirectDFT};
use naive_dft::signal;
use num_complex::Complex;

fn main() {
    println!("Direct DFT Example");
    println!("==================");

    // Example 1: impulse input
    impulse_example();

    // Example 2: sampled sine wave
    sine_example();

    // Example 3: split real/imaginary accumulation
    split_example();
}

fn impulse_example() {
    println!("\nImpulse Example:");

    // The DFT of an impulse is a constant across all bins
    let samples: Vec<f64> = signal::impulse(8);
    let spectrum = dft(&samples);

    for (k, bin) in spectrum.iter().enumerate() {
        println!("Bin {}: ({}, {})", k, bin.re, bin.im);
    }
}

fn sine_example() {
    println!("\nSine Example:");

    // One whole cycle across 64 samples concentrates the energy in bins 1
    // and 63 (the positive and negative frequency images)
    let samples: Vec<f64> = signal::sine(64, 1.0, 1.0);
    let spectrum = dft(&samples);

    println!("Bin magnitudes (first 8 bins):");
    for k in 0..8 {
        println!("Bin {}: {}", k, spectrum[k].norm());
    }
    println!("Bin 63: {}", spectrum[63].norm());
}

fn split_example() {
    println!("\nSplit Accumulation Example:");

    // The same transform expressed as separate real and imaginary
    // accumulators, for callers without a complex type on hand
    let in_r = [1.0f64, 0.5, -0.25, 0.75];
    let in_i = [0.0f64; 4];

    let transform = DirectDFT::new(4);

    let mut out_r = [0.0; 4];
    let mut out_i = [0.0; 4];
    transform.transform_split(&in_r, &in_i, &mut out_r, &mut out_i);

    let time: Vec<Complex<f64>> = in_r.iter().map(|&x| Complex::new(x, 0.0)).collect();
    let mut freq = vec![Complex::new(0.0, 0.0); 4];
    transform.transform(&time, &mut freq);

    for k in 0..4 {
        println!(
            "Bin {}: split = ({}, {}), complex = ({}, {})",
            k, out_r[k], out_i[k], freq[k].re, freq[k].im
        );
    }
}
