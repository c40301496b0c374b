//! Data-parallel evaluation of the direct transform
//!
//! Every output bin of the direct DFT is an independent inner product over
//! the shared, read-only input, so the outer loop over k partitions cleanly
//! across a worker pool: each worker writes a disjoint region of the output
//! and no synchronization is needed beyond the final join.
//!
//! The per-bin arithmetic is shared with [`crate::dft`], so the parallel
//! spectrum is bit-identical to the serial one.

use std::marker::PhantomData;

use num_complex::Complex;
use num_traits::{Float, FromPrimitive};
use rayon::prelude::*;

use crate::dft;

/// Direct DFT with the frequency bins evaluated on the rayon worker pool
pub struct ParallelDFT<T: Float> {
    size: usize,
    _marker: PhantomData<T>,
}

impl<T: Float + FromPrimitive + Send + Sync> ParallelDFT<T> {
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

    /// Perform a forward transform of complex samples in parallel
    pub fn transform(&self, time: &[Complex<T>], freq: &mut [Complex<T>]) {
        let size = self.size;
        freq[..size]
            .par_iter_mut()
            .enumerate()
            .for_each(|(k, bin)| {
                *bin = dft::transform_bin(time, k, size);
            });
    }

    /// Perform a forward transform of real samples in parallel
    pub fn transform_real(&self, time: &[T], freq: &mut [Complex<T>]) {
        let size = self.size;
        freq[..size]
            .par_iter_mut()
            .enumerate()
            .for_each(|(k, bin)| {
                *bin = dft::transform_bin_real(time, k, size);
            });
    }
}
