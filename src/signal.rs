//! Synthetic test signals
//!
//! Small generators for the signals the transform gets exercised with: a
//! sampled sinusoid, a unit impulse, and a constant sequence.

#![allow(unused_imports)]

#[cfg(feature = "std")]
use std::{f64::consts::PI, vec::Vec};

#[cfg(not(feature = "std"))]
use core::f64::consts::PI;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::{vec, vec::Vec};

use num_traits::{Float, FromPrimitive};

/// A sampled sine wave with `cycles` whole periods across the window
///
/// `x[n] = amplitude · sin(2π · cycles · n / len)`
pub fn sine<T: Float + FromPrimitive>(len: usize, cycles: T, amplitude: T) -> Vec<T> {
    let two_pi = T::from_f64(2.0 * PI).unwrap();
    (0..len)
        .map(|n| {
            let t = T::from_f64(n as f64).unwrap() / T::from_f64(len as f64).unwrap();
            amplitude * (two_pi * cycles * t).sin()
        })
        .collect()
}

/// A unit impulse: 1 at index 0, 0 everywhere else
pub fn impulse<T: Float>(len: usize) -> Vec<T> {
    let mut samples = vec![T::zero(); len];
    if len > 0 {
        samples[0] = T::one();
    }
    samples
}

/// A constant sequence
pub fn constant<T: Float>(len: usize, value: T) -> Vec<T> {
    vec![value; len]
}
