//! Command-line harness for the direct transform
//!
//! Reads real samples from a file (or synthesises a sine wave) and prints the
//! spectrum as one `re im` pair per line, in bin order k = 0..N-1.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};

use naive_dft::dft::DirectRealDFT;
use naive_dft::io::read_samples;
use naive_dft::parallel::ParallelDFT;
use naive_dft::signal;
use num_complex::Complex;

#[derive(Parser)]
#[command(about = "Direct O(N^2) discrete Fourier transform of a sampled signal")]
struct Cli {
    /// Sample file, one real value per whitespace-separated token
    #[arg(long, value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Number of samples to synthesise when no input file is given
    #[arg(long, default_value_t = 2000)]
    samples: usize,

    /// Whole cycles of the synthesised sine across the sample window
    #[arg(long, default_value_t = 1.0)]
    cycles: f64,

    /// Evaluate the frequency bins on the rayon worker pool
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let samples: Vec<f64> = match &cli.input {
        Some(path) => read_samples(path)
            .with_context(|| format!("reading samples from {}", path.display()))?,
        None => signal::sine(cli.samples, cli.cycles, 1.0),
    };

    let mut freq = vec![Complex::new(0.0, 0.0); samples.len()];
    if cli.parallel {
        ParallelDFT::new(samples.len()).transform_real(&samples, &mut freq);
    } else {
        DirectRealDFT::new(samples.len()).transform(&samples, &mut freq);
    }

    for bin in &freq {
        println!("{} {}", bin.re, bin.im);
    }
    Ok(())
}
