//! Common definitions and helper functions used by the rest of the library

#![allow(unused_imports)]

#[cfg(feature = "std")]
use std::f64::consts::PI;

#[cfg(not(feature = "std"))]
use core::f64::consts::PI;

use num_complex::Complex;
use num_traits::{Float, FromPrimitive};

/// Phase of the forward DFT kernel for bin `k`, sample `n`, transform size `size`.
///
/// All three operands are converted to the float type before the division.
/// In integer arithmetic `k * n / size` truncates to zero for every term with
/// `k·n < size`, which collapses the spectrum onto the DC bin.
#[inline]
pub fn bin_phase<T: Float + FromPrimitive>(k: usize, n: usize, size: usize) -> T {
    let two_pi = T::from_f64(2.0 * PI).unwrap();
    let kn = T::from_f64(k as f64).unwrap() * T::from_f64(n as f64).unwrap();
    -two_pi * kn / T::from_f64(size as f64).unwrap()
}

/// Complex exponential `exp(-i·2π·k·n/size)` used by the forward transform.
#[inline]
pub fn twiddle<T: Float + FromPrimitive>(k: usize, n: usize, size: usize) -> Complex<T> {
    let phase = bin_phase::<T>(k, n, size);
    Complex::new(phase.cos(), phase.sin())
}
