//! Direct discrete Fourier transform
//!
//! This module provides the O(N²) textbook evaluation of the DFT summation:
//! every output bin is an explicit inner product of the input with the
//! complex exponential for that bin. There is no recursive decomposition and
//! no size restriction; any N ≥ 0 works, including N = 0 (empty output).
//!
//! The transform is stateless and reentrant: the structs only remember the
//! configured size, and every call produces its output fresh without touching
//! the input.

#![allow(unused_imports)]

#[cfg(feature = "std")]
use std::{marker::PhantomData, vec::Vec};

#[cfg(not(feature = "std"))]
use core::marker::PhantomData;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::{vec, vec::Vec};

use num_complex::Complex;
use num_traits::{Float, FromPrimitive};

use crate::common;

// Single output bin of the forward transform, complex input. Shared with the
// parallel path so both produce bit-identical spectra.
pub(crate) fn transform_bin<T: Float + FromPrimitive>(
    time: &[Complex<T>],
    k: usize,
    size: usize,
) -> Complex<T> {
    let mut sum = Complex::new(T::zero(), T::zero());
    for (n, x) in time[..size].iter().enumerate() {
        let w = common::twiddle::<T>(k, n, size);
        sum = Complex::new(
            sum.re + x.re * w.re - x.im * w.im,
            sum.im + x.re * w.im + x.im * w.re,
        );
    }
    sum
}

// Single output bin of the forward transform, real input.
pub(crate) fn transform_bin_real<T: Float + FromPrimitive>(
    time: &[T],
    k: usize,
    size: usize,
) -> Complex<T> {
    let mut sum = Complex::new(T::zero(), T::zero());
    for (n, &x) in time[..size].iter().enumerate() {
        let w = common::twiddle::<T>(k, n, size);
        sum = Complex::new(sum.re + x * w.re, sum.im + x * w.im);
    }
    sum
}

/// Direct evaluation of the DFT summation for complex input
pub struct DirectDFT<T: Float> {
    size: usize,
    _marker: PhantomData<T>,
}

impl<T: Float + FromPrimitive> DirectDFT<T> {
    /// Create a new transform for the specified size
    pub fn new(size: usize) -> Self {
        Self {
            size,
            _marker: PhantomData,
        }
    }

    /// Change the transform size
    pub fn resize(&mut self, size: usize) {
        self.size = size;
    }

    /// Get the transform size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Perform a forward transform
    ///
    /// `freq[k] = Σ_n time[n] · exp(-i·2π·k·n/N)` for k = 0..N-1, with the
    /// DC component at bin 0. Non-finite samples propagate through the
    /// arithmetic unchanged.
    pub fn transform(&self, time: &[Complex<T>], freq: &mut [Complex<T>]) {
        for k in 0..self.size {
            freq[k] = transform_bin(time, k, self.size);
        }
    }

    /// Perform an inverse transform
    ///
    /// Applies the conjugate kernel and scales by 1/N, so
    /// `inverse(transform(x))` recovers `x` up to rounding.
    pub fn inverse(&self, freq: &[Complex<T>], time: &mut [Complex<T>]) {
        if self.size == 0 {
            return;
        }
        let scale = T::one() / T::from_f64(self.size as f64).unwrap();
        for n in 0..self.size {
            let mut sum = Complex::new(T::zero(), T::zero());
            for (k, x) in freq[..self.size].iter().enumerate() {
                let w = common::twiddle::<T>(k, n, self.size);
                // conjugate kernel: negated imaginary part
                sum = Complex::new(
                    sum.re + x.re * w.re + x.im * w.im,
                    sum.im - x.re * w.im + x.im * w.re,
                );
            }
            time[n] = Complex::new(sum.re * scale, sum.im * scale);
        }
    }

    /// Perform a forward transform with split complex representation
    ///
    /// The same summation expressed as two parallel real-valued accumulators,
    /// for callers keeping real and imaginary parts in separate buffers:
    ///
    /// `out_r[k] = Σ_n in_r[n]·cos(φ) - in_i[n]·sin(φ)`
    /// `out_i[k] = Σ_n in_r[n]·sin(φ) + in_i[n]·cos(φ)`
    ///
    /// with `φ = -2π·k·n/N`. Agrees with [`transform`](Self::transform) to
    /// within floating-point rounding.
    pub fn transform_split(&self, in_r: &[T], in_i: &[T], out_r: &mut [T], out_i: &mut [T]) {
        for k in 0..self.size {
            let mut acc_r = T::zero();
            let mut acc_i = T::zero();
            for n in 0..self.size {
                let phase = common::bin_phase::<T>(k, n, self.size);
                let (cos, sin) = (phase.cos(), phase.sin());
                acc_r = acc_r + in_r[n] * cos - in_i[n] * sin;
                acc_i = acc_i + in_r[n] * sin + in_i[n] * cos;
            }
            out_r[k] = acc_r;
            out_i[k] = acc_i;
        }
    }
}

/// Direct DFT for real-valued input
///
/// Produces the full N complex bins (the upper half mirrors the lower, but is
/// kept so bin k always means the same frequency regardless of input kind).
pub struct DirectRealDFT<T: Float> {
    size: usize,
    _marker: PhantomData<T>,
}

impl<T: Float + FromPrimitive> DirectRealDFT<T> {
    /// Create a new transform for the specified size
    pub fn new(size: usize) -> Self {
        Self {
            size,
            _marker: PhantomData,
        }
    }

    /// Change the transform size
    pub fn resize(&mut self, size: usize) {
        self.size = size;
    }

    /// Get the transform size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Perform a forward transform of real samples
    pub fn transform(&self, time: &[T], freq: &mut [Complex<T>]) {
        for k in 0..self.size {
            freq[k] = transform_bin_real(time, k, self.size);
        }
    }
}

/// One-shot transform of a real sample buffer into a freshly allocated spectrum
#[cfg(feature = "alloc")]
pub fn dft<T: Float + FromPrimitive>(samples: &[T]) -> Vec<Complex<T>> {
    let transform = DirectRealDFT::new(samples.len());
    let mut freq = vec![Complex::new(T::zero(), T::zero()); samples.len()];
    transform.transform(samples, &mut freq);
    freq
}
