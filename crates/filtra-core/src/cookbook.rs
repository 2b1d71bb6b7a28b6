//! Cookbook filter designers parameterized by bandwidth.
//!
//! Implements the RBJ Audio EQ Cookbook formulas
//! (<http://shepazu.github.io/Audio-EQ-Cookbook/audio-eq-cookbook.html>) with
//! the bandwidth-in-octaves alpha conversion from [`crate::alpha`]. Each
//! designer validates its physical specification and returns a ready-to-run
//! [`Biquad`], or the specific [`FilterError`] describing what was wrong
//! with the request.

use core::f64::consts::{LN_2, PI};
use libm::{asinh, cos, sin};

use crate::alpha;
use crate::biquad::{Biquad, Coefficients};
use crate::error::FilterError;

/// Shared specification checks for designers driven by a working frequency.
///
/// Rejection order: non-positive frequencies first, then the Nyquist-side
/// aliasing violation.
pub(crate) fn validate_frequencies(fs: f64, f0: f64) -> Result<(), FilterError> {
    if fs <= 0.0 || f0 <= 0.0 {
        return Err(FilterError::BadFrequency);
    }
    if f0 >= fs {
        return Err(FilterError::BadWorkingFrequency);
    }
    Ok(())
}

/// Creates a low-pass filter.
///
/// # Arguments
///
/// * `fs` - Sampling frequency in Hz
/// * `f0` - Working (cutoff) frequency in Hz
/// * `bw` - Bandwidth in octaves between the -3 dB frequencies
pub fn low_pass(fs: f64, f0: f64, bw: f64) -> Result<Biquad, FilterError> {
    validate_frequencies(fs, f0)?;
    if bw <= 0.0 {
        return Err(FilterError::NegativeBandwidth);
    }
    let omega = 2.0 * PI * (f0 / fs);
    let cos_omega = cos(omega);
    let alpha = alpha::from_bandwidth(omega, bw)?;

    let b0 = (1.0 - cos_omega) / 2.0;
    let b1 = 1.0 - cos_omega;
    let a0 = 1.0 + alpha;
    let a1 = -2.0 * cos_omega;
    let a2 = 1.0 - alpha;

    #[cfg(feature = "tracing")]
    tracing::debug!("design low_pass: fs={fs} f0={f0} bw={bw}");
    Ok(Biquad::new(Coefficients::normalized(a0, a1, a2, b0, b1, b0)?))
}

/// Creates a high-pass filter.
///
/// # Arguments
///
/// * `fs` - Sampling frequency in Hz
/// * `f0` - Working (cutoff) frequency in Hz
/// * `bw` - Bandwidth in octaves between the -3 dB frequencies
pub fn high_pass(fs: f64, f0: f64, bw: f64) -> Result<Biquad, FilterError> {
    validate_frequencies(fs, f0)?;
    if bw <= 0.0 {
        return Err(FilterError::NegativeBandwidth);
    }
    let omega = 2.0 * PI * (f0 / fs);
    let cos_omega = cos(omega);
    let alpha = alpha::from_bandwidth(omega, bw)?;

    let b0 = (1.0 + cos_omega) / 2.0;
    let b1 = -(1.0 + cos_omega);
    let a0 = 1.0 + alpha;
    let a1 = -2.0 * cos_omega;
    let a2 = 1.0 - alpha;

    #[cfg(feature = "tracing")]
    tracing::debug!("design high_pass: fs={fs} f0={f0} bw={bw}");
    Ok(Biquad::new(Coefficients::normalized(a0, a1, a2, b0, b1, b0)?))
}

/// Creates a band-pass filter with constant 0 dB peak gain.
///
/// # Arguments
///
/// * `fs` - Sampling frequency in Hz
/// * `f0` - Center frequency in Hz
/// * `bw` - Bandwidth in octaves between the -3 dB frequencies
pub fn band_pass(fs: f64, f0: f64, bw: f64) -> Result<Biquad, FilterError> {
    validate_frequencies(fs, f0)?;
    if bw <= 0.0 {
        return Err(FilterError::NegativeBandwidth);
    }
    let omega = 2.0 * PI * (f0 / fs);
    let cos_omega = cos(omega);
    let alpha = alpha::from_bandwidth(omega, bw)?;

    let b0 = alpha;
    let b1 = 0.0;
    let b2 = -alpha;
    let a0 = 1.0 + alpha;
    let a1 = -2.0 * cos_omega;
    let a2 = 1.0 - alpha;

    #[cfg(feature = "tracing")]
    tracing::debug!("design band_pass: fs={fs} f0={f0} bw={bw}");
    Ok(Biquad::new(Coefficients::normalized(a0, a1, a2, b0, b1, b2)?))
}

/// Creates a band-pass filter from a peak gain instead of a center
/// frequency.
///
/// The center frequency is recovered from `c*sin(w0) = w0` where
/// `c = 2*asinh(1/(2*Q)) / (ln2 * bw)`, using two Newton iterations started
/// at the sampling frequency. The root is transcendental; the fixed
/// iteration count keeps results reproducible across builds.
///
/// # Arguments
///
/// * `fs` - Sampling frequency in Hz
/// * `q` - Peak gain
/// * `bw` - Bandwidth in octaves between the -3 dB frequencies
pub fn band_pass_from_q(fs: f64, q: f64, bw: f64) -> Result<Biquad, FilterError> {
    if fs <= 0.0 {
        return Err(FilterError::BadFrequency);
    }
    if bw <= 0.0 {
        return Err(FilterError::NegativeBandwidth);
    }
    if q <= 0.0 {
        return Err(FilterError::BadGain);
    }
    // c = w0/sin(w0).
    let c = 2.0 * asinh(1.0 / (2.0 * q)) / (LN_2 * bw);
    // f(x)  = c*sin(x) - x
    // f'(x) = c*cos(x) - 1
    let mut omega = fs;
    for _ in 0..2 {
        omega -= (c * sin(omega) - omega) / (c * cos(omega) - 1.0);
    }

    let sin_omega = sin(omega);
    let cos_omega = cos(omega);
    let alpha = alpha::from_bandwidth(omega, bw)?;

    let b0 = sin_omega / 2.0;
    let b1 = 0.0;
    let b2 = -b0;
    let a0 = 1.0 + alpha;
    let a1 = -2.0 * cos_omega;
    let a2 = 1.0 - alpha;

    #[cfg(feature = "tracing")]
    tracing::debug!("design band_pass_from_q: fs={fs} q={q} bw={bw} w0={omega}");
    Ok(Biquad::new(Coefficients::normalized(a0, a1, a2, b0, b1, b2)?))
}

/// Creates a notch filter.
///
/// # Arguments
///
/// * `fs` - Sampling frequency in Hz
/// * `f0` - Notched frequency in Hz (will be filtered out)
/// * `bw` - Bandwidth in octaves between the -3 dB frequencies
pub fn notch(fs: f64, f0: f64, bw: f64) -> Result<Biquad, FilterError> {
    validate_frequencies(fs, f0)?;
    if bw <= 0.0 {
        return Err(FilterError::NegativeBandwidth);
    }
    let omega = 2.0 * PI * (f0 / fs);
    let cos_omega = cos(omega);
    let alpha = alpha::from_bandwidth(omega, bw)?;

    let b0 = 1.0;
    let b1 = -2.0 * cos_omega;
    let a0 = 1.0 + alpha;
    let a1 = -2.0 * cos_omega;
    let a2 = 1.0 - alpha;

    #[cfg(feature = "tracing")]
    tracing::debug!("design notch: fs={fs} f0={f0} bw={bw}");
    Ok(Biquad::new(Coefficients::normalized(a0, a1, a2, b0, b1, b0)?))
}
