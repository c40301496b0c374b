//! # Naive DFT
//!
//! A baseline implementation of the Discrete Fourier Transform via direct
//! evaluation of the defining O(N²) summation, intended as a reference point
//! for comparing transform implementations rather than as a fast transform.
//!
//! ## Features
//!
//! - **Direct DFT**: textbook double-sum evaluation for complex and real
//!   input, with a split (separate real/imaginary accumulator) variant
//! - **Parallel evaluation**: optional data-parallel computation of the
//!   output bins over a worker pool (`parallel` feature)
//! - **Synthetic signals**: sampled sinusoids, impulses and constants for
//!   feeding the transform
//! - **Sample file loading**: whitespace-delimited real samples from disk
//!   (`std` feature)
//! - **no_std Support**: the core transform can be used in environments
//!   without the standard library

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export modules
pub mod common;
pub mod dft;

#[cfg(feature = "alloc")]
pub mod signal;

#[cfg(feature = "std")]
pub mod io;

#[cfg(feature = "parallel")]
pub mod parallel;
