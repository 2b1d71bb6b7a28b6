//! Integration tests for filtra-analysis.
//!
//! Tests measure what designed filters actually do to synthetic signals,
//! cross-checking the swept transfer function against FFT bins and
//! tone projections on filtered output.

use std::f64::consts::PI;

use filtra_analysis::{FrequencyResponse, magnitude_spectrum, tone_magnitude};
use filtra_core::{SampledSignal, butterworth};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate a sine wave at a given frequency and amplitude.
fn sine(freq_hz: f64, sample_rate: f64, num_samples: usize, amplitude: f64) -> Vec<f64> {
    (0..num_samples)
        .map(|i| amplitude * (2.0 * PI * freq_hz * i as f64 / sample_rate).sin())
        .collect()
}

/// Sum several equal-length signals sample by sample.
fn mix(signals: &[Vec<f64>]) -> Vec<f64> {
    let len = signals[0].len();
    (0..len).map(|i| signals.iter().map(|s| s[i]).sum()).collect()
}

// ===========================================================================
// 1. Tone projection on filtered output
// ===========================================================================

#[test]
fn low_pass_attenuates_the_higher_of_two_tones() {
    // Two tones an octave apart, both completing whole periods over the
    // window, filtered by a low-pass centered on the lower tone.
    let fs = 100.0;
    let input = mix(&[sine(2.0, fs, 100, 1.0), sine(4.0, fs, 100, 1.0)]);

    assert!((tone_magnitude(&input, fs, 2.0) - 1.0).abs() < 1e-9);
    assert!((tone_magnitude(&input, fs, 4.0) - 1.0).abs() < 1e-9);

    let signal = SampledSignal::new(fs, &input);
    let mut filter = filtra_core::low_pass(fs, 2.0, 1.0).unwrap();
    let filtered = filter.filter(&signal).unwrap();

    let out_lo = tone_magnitude(filtered.values(), fs, 2.0);
    let out_hi = tone_magnitude(filtered.values(), fs, 4.0);

    // The window is short enough that the startup transient still colors
    // both readings, so the bounds stay loose.
    assert!(out_lo > 0.9, "2 Hz tone should pass, read {out_lo}");
    assert!(out_hi < 0.3, "4 Hz tone should be attenuated, read {out_hi}");
    assert!(
        out_hi < out_lo / 3.0,
        "attenuation ordering should be clear: lo={out_lo} hi={out_hi}"
    );
}

// ===========================================================================
// 2. FFT bins on filtered output
// ===========================================================================

#[test]
fn band_pass_keeps_its_center_bin_and_drops_the_skirts() {
    // Three tones on exact FFT bins (8, 32, 128 cycles per 512 samples).
    let fs = 512.0;
    let n = 512;
    let input = mix(&[
        sine(8.0, fs, n, 1.0),
        sine(32.0, fs, n, 1.0),
        sine(128.0, fs, n, 1.0),
    ]);

    let signal = SampledSignal::new(fs, &input);
    let mut filter = filtra_core::band_pass(fs, 32.0, 1.0).unwrap();
    let filtered = filter.filter(&signal).unwrap();

    let bins_in = magnitude_spectrum(&input, n);
    let bins_out = magnitude_spectrum(filtered.values(), n);

    let center = bins_out[32] / bins_in[32];
    let low_skirt = bins_out[8] / bins_in[8];
    let high_skirt = bins_out[128] / bins_in[128];

    assert!(center > 0.9, "center bin should survive, ratio {center}");
    assert!(low_skirt < 0.35, "low skirt should drop, ratio {low_skirt}");
    assert!(high_skirt < 0.35, "high skirt should drop, ratio {high_skirt}");
    assert!(bins_out[32] > 3.0 * bins_out[8]);
    assert!(bins_out[32] > 3.0 * bins_out[128]);
}

// ===========================================================================
// 3. Swept response sanity
// ===========================================================================

#[test]
fn sweep_locates_the_butterworth_corner() {
    let filter = butterworth::low_pass(48000.0, 1000.0).unwrap();
    let sweep = FrequencyResponse::sweep(&filter.coefficients(), 48000.0, 10.0, 20000.0, 2048);

    let cutoff = sweep.cutoff_frequency(0.0).unwrap();
    assert!(
        (cutoff - 1000.0).abs() < 10.0,
        "-3 dB crossing should sit at the designed corner, got {cutoff}"
    );
}

#[test]
fn sweep_shows_the_notch_dip() {
    let filter = filtra_core::notch(1000.0, 60.0, 2.0).unwrap();
    let sweep = FrequencyResponse::sweep(&filter.coefficients(), 1000.0, 10.0, 500.0, 2048);

    assert!(
        sweep.magnitude_at(60.0) < -20.0,
        "notch center should be deeply rejected, got {} dB",
        sweep.magnitude_at(60.0)
    );
    assert!(
        sweep.magnitude_at(10.0) > -1.0,
        "well below the notch the response should be flat, got {} dB",
        sweep.magnitude_at(10.0)
    );
}

#[test]
fn sweep_agrees_with_a_tone_measurement() {
    // The swept magnitude is the designed response; a tone long enough to
    // bury the transient should measure the same gain.
    let fs = 1000.0;
    let mut filter = filtra_core::low_pass(fs, 100.0, 2.0).unwrap();
    let sweep = FrequencyResponse::sweep(&filter.coefficients(), fs, 1.0, 499.0, 4096);

    let freq = 50.0;
    let input = sine(freq, fs, 8000, 1.0);
    let signal = SampledSignal::new(fs, &input);
    let filtered = filter.filter(&signal).unwrap();

    // Measure over the settled tail only.
    let tail = &filtered.values()[4000..];
    let measured = tone_magnitude(tail, fs, freq);
    let designed = 10f64.powf(sweep.magnitude_at(freq) / 20.0);

    assert!(
        (measured - designed).abs() < 0.01,
        "measured {measured} vs designed {designed}"
    );
}
