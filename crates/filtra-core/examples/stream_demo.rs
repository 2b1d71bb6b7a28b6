//! Filter design demo: designers, streaming, batch filtering, validation.
//!
//! Run with: cargo run -p filtra-core --example stream_demo

use filtra_core::{SampledSignal, Signal, butterworth, chebyshev};
use num_complex::Complex;
use std::f64::consts::PI;

fn rms(signal: &[f64]) -> f64 {
    let sum_sq: f64 = signal.iter().map(|&s| s * s).sum();
    (sum_sq / signal.len() as f64).sqrt()
}

fn main() -> Result<(), filtra_core::FilterError> {
    let fs = 1000.0;

    // --- Designed coefficients ---
    println!("=== Designed Coefficients (normalized by a0) ===\n");

    let designs = [
        ("low_pass(1000, 100, 1)", filtra_core::low_pass(fs, 100.0, 1.0)?),
        ("band_pass(1000, 150, 1)", filtra_core::band_pass(fs, 150.0, 1.0)?),
        ("notch(1000, 60, 2)", filtra_core::notch(fs, 60.0, 2.0)?),
        ("butterworth::low_pass(1000, 120)", butterworth::low_pass(fs, 120.0)?),
        (
            "chebyshev::type1_low_pass(1000, 120, 0.5)",
            chebyshev::type1_low_pass(fs, 120.0, 0.5)?,
        ),
    ];

    println!(
        "{:<42} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "Design", "b0", "b1", "b2", "a1", "a2"
    );
    println!(
        "{:-<42} {:->9} {:->9} {:->9} {:->9} {:->9}",
        "", "", "", "", "", ""
    );
    for (name, filter) in &designs {
        let c = filter.coefficients();
        println!(
            "{:<42} {:>9.5} {:>9.5} {:>9.5} {:>9.5} {:>9.5}",
            name, c.b0, c.b1, c.b2, c.a1, c.a2
        );
    }

    // --- Streaming a two-tone mix through a low-pass ---
    println!("\n=== Streaming: 20 Hz + 200 Hz through low_pass(1000, 80, 2) ===\n");

    let mut lp = filtra_core::low_pass(fs, 80.0, 2.0)?;
    let input: Vec<f64> = (0..2000)
        .map(|i| {
            let t = i as f64 / fs;
            (2.0 * PI * 20.0 * t).sin() + (2.0 * PI * 200.0 * t).sin()
        })
        .collect();
    let output: Vec<f64> = input.iter().map(|&x| lp.process(x)).collect();

    println!("input RMS (settled):  {:.4}", rms(&input[1000..]));
    println!("output RMS (settled): {:.4}", rms(&output[1000..]));

    println!("\nTransfer function at the two tones:");
    println!("{:>10} {:>12} {:>10}", "Freq (Hz)", "|H|", "Gain (dB)");
    println!("{:->10} {:->12} {:->10}", "", "", "");
    for freq in [20.0, 200.0] {
        let theta = 2.0 * PI * freq / fs;
        let h = lp.response(Complex::new(theta.cos(), theta.sin())).norm();
        println!("{freq:>10.1} {h:>12.5} {:>10.1}", 20.0 * h.log10());
    }

    // --- Batch filtering a stored signal ---
    println!("\n=== Batch: 2 Hz square-ish wave through band_pass(8, 2, 1) ===\n");

    let data = [0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0];
    let signal = SampledSignal::new(8.0, &data);
    let mut bp = filtra_core::band_pass(8.0, 2.0, 1.0)?;
    let filtered = bp.filter(&signal)?;

    println!("{:>8} {:>8} {:>10}", "t (s)", "x", "filtered");
    println!("{:->8} {:->8} {:->10}", "", "", "");
    for i in 0..signal.len() {
        let (t, x) = signal.sample(i);
        let (_, y) = filtered.sample(i);
        println!("{t:>8.3} {x:>8.3} {y:>10.5}");
    }

    // --- Validation ---
    println!("\n=== Parameter Validation ===\n");

    let rejected = [
        (
            "high_pass(100, 100, 1)",
            filtra_core::high_pass(100.0, 100.0, 1.0).unwrap_err(),
        ),
        (
            "notch(100, 50, 0)",
            filtra_core::notch(100.0, 50.0, 0.0).unwrap_err(),
        ),
        (
            "band_pass_from_q(100, 0, 1)",
            filtra_core::band_pass_from_q(100.0, 0.0, 1.0).unwrap_err(),
        ),
        (
            "chebyshev::type1_low_pass(100, 10, 2)",
            chebyshev::type1_low_pass(100.0, 10.0, 2.0).unwrap_err(),
        ),
    ];
    for (call, err) in &rejected {
        println!("{call:<40} -> {err}");
    }

    println!("\nFilter demo complete.");
    Ok(())
}
