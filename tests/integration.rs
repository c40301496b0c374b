//! Integration Tests for the Direct Transform
//!
//! Tests that exercise the transform end-to-end: analytic signals, algebraic
//! properties, the parallel path, and the sample-file loader.

use approx::assert_relative_eq;
use num_complex::Complex;

/// A one-cycle sine over 2000 samples concentrates all energy in bins 1 and
/// 1999, the positive and negative frequency images.
#[test]
fn test_sine_spectrum_has_two_dominant_bins() {
    use naive_dft::dft::dft;
    use naive_dft::signal;

    let samples: Vec<f64> = signal::sine(2000, 1.0, 1.0);
    let spectrum = dft(&samples);
    assert_eq!(spectrum.len(), 2000);

    // sin decomposes into two images of magnitude N/2 each
    assert_relative_eq!(spectrum[1].norm(), 1000.0, max_relative = 1e-9);
    assert_relative_eq!(spectrum[1999].norm(), 1000.0, max_relative = 1e-9);

    for (k, bin) in spectrum.iter().enumerate() {
        if k != 1 && k != 1999 {
            assert!(bin.norm() < 1e-6, "unexpected energy {} in bin {}", bin.norm(), k);
        }
    }
}

/// The DC bin is the plain sum of the input samples.
#[test]
fn test_dc_bin_is_sample_sum() {
    use naive_dft::dft::dft;

    let samples = [0.5f64, 1.25, -2.0, 3.75, 0.125, -1.5];
    let total: f64 = samples.iter().sum();

    let spectrum = dft(&samples);
    assert_relative_eq!(spectrum[0].re, total, epsilon = 1e-12);
    assert_relative_eq!(spectrum[0].im, 0.0, epsilon = 1e-12);
}

/// transform(α·a + β·b) = α·transform(a) + β·transform(b), within rounding.
#[test]
fn test_linearity() {
    use naive_dft::dft::dft;

    let a: Vec<f64> = (0..50).map(|n| (n as f64 * 0.41).sin()).collect();
    let b: Vec<f64> = (0..50).map(|n| (n as f64 * 0.17).cos()).collect();
    let (alpha, beta) = (2.5, -1.25);

    let combined: Vec<f64> = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| alpha * x + beta * y)
        .collect();

    let spectrum_a = dft(&a);
    let spectrum_b = dft(&b);
    let spectrum_combined = dft(&combined);

    for k in 0..50 {
        let expected = Complex::new(
            alpha * spectrum_a[k].re + beta * spectrum_b[k].re,
            alpha * spectrum_a[k].im + beta * spectrum_b[k].im,
        );
        assert_relative_eq!(spectrum_combined[k].re, expected.re, max_relative = 1e-9, epsilon = 1e-9);
        assert_relative_eq!(spectrum_combined[k].im, expected.im, max_relative = 1e-9, epsilon = 1e-9);
    }
}

/// The constant sequence has a flat, DC-only spectrum: N·c at bin 0.
#[test]
fn test_constant_signal_spectrum() {
    use naive_dft::dft::dft;
    use naive_dft::signal;

    let samples: Vec<f64> = signal::constant(128, 0.75);
    let spectrum = dft(&samples);

    assert_relative_eq!(spectrum[0].re, 128.0 * 0.75, max_relative = 1e-12);
    for bin in &spectrum[1..] {
        assert!(bin.norm() < 1e-9);
    }
}

/// Serial and parallel evaluation produce the same spectrum bit-for-bit.
#[test]
fn test_parallel_path_end_to_end() {
    use naive_dft::dft::DirectRealDFT;
    use naive_dft::parallel::ParallelDFT;
    use naive_dft::signal;

    let samples: Vec<f64> = signal::sine(500, 7.0, 2.0);

    let mut serial = vec![Complex::new(0.0, 0.0); 500];
    let mut parallel = vec![Complex::new(0.0, 0.0); 500];
    DirectRealDFT::new(500).transform(&samples, &mut serial);
    ParallelDFT::new(500).transform_real(&samples, &mut parallel);

    assert_eq!(serial, parallel);
}

/// Load a sample file from disk and transform it.
#[test]
fn test_file_to_spectrum() {
    use naive_dft::dft::dft;
    use naive_dft::io::read_samples;

    let path = std::env::temp_dir().join("naive_dft_integration_samples.txt");
    std::fs::write(&path, "1.0 0.0\n0.0\n0.0\n").unwrap();

    let samples: Vec<f64> = read_samples(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(samples, [1.0, 0.0, 0.0, 0.0]);

    // impulse in, constant out
    let spectrum = dft(&samples);
    for bin in &spectrum {
        assert_relative_eq!(bin.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(bin.im, 0.0, epsilon = 1e-12);
    }
}

/// Forward then inverse recovers the original signal.
#[test]
fn test_round_trip() {
    use naive_dft::dft::DirectDFT;
    use naive_dft::signal;

    let samples: Vec<f64> = signal::sine(40, 3.0, 1.5);
    let time: Vec<Complex<f64>> = samples.iter().map(|&x| Complex::new(x, 0.0)).collect();

    let transform = DirectDFT::new(40);
    let mut freq = vec![Complex::new(0.0, 0.0); 40];
    let mut recovered = vec![Complex::new(0.0, 0.0); 40];
    transform.transform(&time, &mut freq);
    transform.inverse(&freq, &mut recovered);

    for (original, round_trip) in time.iter().zip(recovered.iter()) {
        assert_relative_eq!(original.re, round_trip.re, epsilon = 1e-10);
        assert_relative_eq!(original.im, round_trip.im, epsilon = 1e-10);
    }
}
