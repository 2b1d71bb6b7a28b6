//! Swept frequency-response evaluation

use filtra_core::Coefficients;
use rustfft::num_complex::Complex;
use std::f64::consts::PI;

/// Swept frequency response of a designed filter
pub struct FrequencyResponse {
    /// Frequency grid (Hz)
    pub frequencies: Vec<f64>,
    /// Magnitude response (dB)
    pub magnitude_db: Vec<f64>,
    /// Phase response (radians)
    pub phase_rad: Vec<f64>,
}

impl FrequencyResponse {
    /// Evaluate the transfer function on a log-spaced frequency grid.
    ///
    /// Each grid point evaluates `H(e^{j 2 pi f / fs})` from the normalized
    /// coefficients, so the result is the exact designed response rather than
    /// a measurement of a filtered signal.
    ///
    /// # Arguments
    /// * `coeffs` - Normalized biquad coefficients
    /// * `fs` - Sample rate in Hz
    /// * `f_lo` - Grid start in Hz (must be positive for log spacing)
    /// * `f_hi` - Grid end in Hz
    /// * `points` - Number of grid points
    pub fn sweep(coeffs: &Coefficients, fs: f64, f_lo: f64, f_hi: f64, points: usize) -> Self {
        let mut frequencies = Vec::with_capacity(points);
        let mut magnitude_db = Vec::with_capacity(points);
        let mut phase_rad = Vec::with_capacity(points);

        let log_lo = f_lo.log10();
        let log_step = if points > 1 {
            (f_hi.log10() - log_lo) / (points - 1) as f64
        } else {
            0.0
        };

        for i in 0..points {
            let freq = 10f64.powf(log_lo + i as f64 * log_step);
            let omega = 2.0 * PI * freq / fs;
            let h = coeffs.response(Complex::new(omega.cos(), omega.sin()));

            frequencies.push(freq);
            magnitude_db.push(20.0 * h.norm().max(1e-10).log10());
            phase_rad.push(h.arg());
        }

        Self {
            frequencies,
            magnitude_db,
            phase_rad,
        }
    }

    /// Get magnitude in dB at a specific frequency (interpolated)
    pub fn magnitude_at(&self, freq_hz: f64) -> f64 {
        interpolate(&self.frequencies, &self.magnitude_db, freq_hz)
    }

    /// Get phase in radians at a specific frequency (interpolated)
    pub fn phase_at(&self, freq_hz: f64) -> f64 {
        interpolate(&self.frequencies, &self.phase_rad, freq_hz)
    }

    /// Find the first frequency where the magnitude crosses 3 dB below
    /// `reference_db`, scanning the grid from low to high.
    pub fn cutoff_frequency(&self, reference_db: f64) -> Option<f64> {
        let target = reference_db - 3.0;

        for i in 1..self.magnitude_db.len() {
            if self.magnitude_db[i] < target && self.magnitude_db[i - 1] >= target {
                let t = (target - self.magnitude_db[i - 1])
                    / (self.magnitude_db[i] - self.magnitude_db[i - 1]);
                return Some(
                    self.frequencies[i - 1] + t * (self.frequencies[i] - self.frequencies[i - 1]),
                );
            }
        }
        None
    }
}

/// Linear interpolation helper
fn interpolate(x: &[f64], y: &[f64], target_x: f64) -> f64 {
    if x.is_empty() {
        return 0.0;
    }

    if target_x <= x[0] {
        return y[0];
    }

    for i in 1..x.len() {
        if target_x <= x[i] {
            let t = (target_x - x[i - 1]) / (x[i] - x[i - 1]);
            return y[i - 1] + t * (y[i] - y[i - 1]);
        }
    }

    y[y.len() - 1]
}
