//! Frequency-response demo: swept Bode data, cutoff search, spectrum checks.
//!
//! Run with: cargo run -p filtra-analysis --example response_demo

use filtra_analysis::{FrequencyResponse, magnitude_spectrum, tone_magnitude};
use filtra_core::{SampledSignal, butterworth};
use std::f64::consts::PI;

fn sine(freq_hz: f64, fs: f64, num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|i| (2.0 * PI * freq_hz * i as f64 / fs).sin())
        .collect()
}

fn main() -> Result<(), filtra_core::FilterError> {
    // --- Swept Butterworth response ---
    println!("=== Butterworth low-pass, fc = 1 kHz at 48 kHz ===\n");

    let fs = 48_000.0;
    let filter = butterworth::low_pass(fs, 1_000.0)?;
    let sweep = FrequencyResponse::sweep(&filter.coefficients(), fs, 10.0, 20_000.0, 2048);

    println!("{:>10} {:>12} {:>12}", "Freq (Hz)", "Mag (dB)", "Phase (deg)");
    println!("{:->10} {:->12} {:->12}", "", "", "");
    for freq in [100.0, 250.0, 500.0, 1_000.0, 2_000.0, 4_000.0, 8_000.0, 16_000.0] {
        println!(
            "{freq:>10.0} {:>12.2} {:>12.1}",
            sweep.magnitude_at(freq),
            sweep.phase_at(freq).to_degrees()
        );
    }

    match sweep.cutoff_frequency(0.0) {
        Some(fc) => println!("\n-3 dB crossing located at {fc:.1} Hz"),
        None => println!("\nno -3 dB crossing on the grid"),
    }

    // --- Notch dip ---
    println!("\n=== Notch at 60 Hz, two octaves wide, at 1 kHz ===\n");

    let notch = filtra_core::notch(1_000.0, 60.0, 2.0)?;
    let dip = FrequencyResponse::sweep(&notch.coefficients(), 1_000.0, 10.0, 500.0, 2048);

    println!("{:>10} {:>12}", "Freq (Hz)", "Mag (dB)");
    println!("{:->10} {:->12}", "", "");
    for freq in [20.0, 40.0, 55.0, 60.0, 65.0, 90.0, 180.0] {
        println!("{freq:>10.0} {:>12.2}", dip.magnitude_at(freq));
    }

    // --- Spectrum before and after a band-pass ---
    println!("\n=== Band-pass at 32 Hz on a three-tone mix (fs = 512) ===\n");

    let n = 512;
    let tones = [8.0, 32.0, 128.0];
    let input: Vec<f64> = (0..n)
        .map(|i| {
            tones
                .iter()
                .map(|&f| (2.0 * PI * f * i as f64 / 512.0).sin())
                .sum()
        })
        .collect();

    let signal = SampledSignal::new(512.0, &input);
    let mut band = filtra_core::band_pass(512.0, 32.0, 1.0)?;
    let filtered = band.filter(&signal)?;

    let bins_in = magnitude_spectrum(&input, n);
    let bins_out = magnitude_spectrum(filtered.values(), n);

    println!("{:>10} {:>12} {:>12} {:>8}", "Tone (Hz)", "In |X[k]|", "Out |Y[k]|", "Ratio");
    println!("{:->10} {:->12} {:->12} {:->8}", "", "", "", "");
    for &freq in &tones {
        let k = freq as usize * n / 512;
        println!(
            "{freq:>10.0} {:>12.2} {:>12.2} {:>8.3}",
            bins_in[k],
            bins_out[k],
            bins_out[k] / bins_in[k]
        );
    }

    // --- Long-tone measurement vs designed response ---
    println!("\n=== Measured vs designed gain, low_pass(1000, 100, 2) at 50 Hz ===\n");

    let fs = 1_000.0;
    let mut lp = filtra_core::low_pass(fs, 100.0, 2.0)?;
    let curve = FrequencyResponse::sweep(&lp.coefficients(), fs, 1.0, 499.0, 4096);

    let tone = sine(50.0, fs, 8_000);
    let tone_signal = SampledSignal::new(fs, &tone);
    let out = lp.filter(&tone_signal)?;
    let measured = tone_magnitude(&out.values()[4_000..], fs, 50.0);
    let designed = 10f64.powf(curve.magnitude_at(50.0) / 20.0);

    println!("designed |H(50 Hz)| = {designed:.6}");
    println!("measured amplitude  = {measured:.6}");

    println!("\nResponse demo complete.");
    Ok(())
}
