//! FFT-based spectrum checks for filtered signals

use rustfft::{FftPlanner, num_complex::Complex};
use std::f64::consts::PI;

/// Compute the single-sided magnitude spectrum of a real signal.
///
/// The input is zero-padded or truncated to `fft_size` and transformed
/// rectangular (no window); measurements are expected to place each tone on
/// an integer number of periods per transform so bins do not leak.
/// Returns `fft_size / 2 + 1` bins from DC to Nyquist.
pub fn magnitude_spectrum(values: &[f64], fft_size: usize) -> Vec<f64> {
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);

    let mut buffer: Vec<Complex<f64>> = values.iter().map(|&x| Complex::new(x, 0.0)).collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    fft.process(&mut buffer);

    buffer.truncate(fft_size / 2 + 1);
    buffer.iter().map(|c| c.norm()).collect()
}

/// Measure the amplitude of a single frequency component.
///
/// Projects the signal onto `e^{-j 2 pi freq t}` over its full length and
/// scales so a unit-amplitude sine reads 1.0. Unlike an FFT bin, `freq` does
/// not have to divide the sample rate evenly, though off-grid tones pick up
/// the usual leakage error.
pub fn tone_magnitude(values: &[f64], fs: f64, freq: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut acc = Complex::new(0.0, 0.0);
    for (i, &x) in values.iter().enumerate() {
        let theta = -2.0 * PI * freq * i as f64 / fs;
        acc += x * Complex::new(theta.cos(), theta.sin());
    }

    2.0 * acc.norm() / values.len() as f64
}
