//! Butterworth designers derived through the bilinear transform.
//!
//! The analog low-pass prototype
//! (<https://www.robots.ox.ac.uk/~sjrob/Teaching/SP/l6.pdf>)
//!
//! ```text
//! H(s) = wc^2 / (s^2 + sqrt(2)*wc*s + wc^2)
//! ```
//!
//! maps to the z-domain through `s = (2/Ts)*(1-z^-1)/(1+z^-1)`. The analog
//! cutoff `wc` is pre-warped from the digital one, `wc_a = (2/Ts)*tan(wc_d*Ts/2)`;
//! skipping that step shifts the realized cutoff. With `td = tan(wc/(2*Fs))`
//! the `(2/Ts)` factors cancel, and clearing `(1+z^-1)^2` from the quotient
//! leaves
//!
//! ```text
//!            td^2 * (1 + 2*z^-1 + z^-2)
//! H(z) = -----------------------------------------------------------------
//!        (1+sqrt(2)*td+td^2) + (-2+2*td^2)*z^-1 + (1-sqrt(2)*td+td^2)*z^-2
//! ```
//!
//! The high-pass case starts from `H(s) = s^2 / (s^2 + sqrt(2)*wc*s + wc^2)`
//! and lands on the same denominator with numerator `(1 - z^-1)^2`.

use core::f64::consts::{PI, SQRT_2};
use libm::tan;

use crate::biquad::{Biquad, Coefficients};
use crate::cookbook::validate_frequencies;
use crate::error::FilterError;

/// Creates a second-order Butterworth low-pass filter.
///
/// The response is maximally flat in the passband with unity DC gain and
/// sits exactly 3 dB down at `fc`.
///
/// # Arguments
///
/// * `fs` - Sampling frequency in Hz
/// * `fc` - Cutoff frequency in Hz
pub fn low_pass(fs: f64, fc: f64) -> Result<Biquad, FilterError> {
    validate_frequencies(fs, fc)?;
    // Pre-warped analog cutoff folded into td = tan(wc/(2*Fs)).
    let wc = 2.0 * PI * fc;
    let td = tan(wc / (2.0 * fs));

    let b0 = td * td;
    let b1 = 2.0 * b0;
    let a0 = 1.0 + td * SQRT_2 + td * td;
    let a1 = -2.0 + 2.0 * td * td;
    let a2 = 1.0 - td * SQRT_2 + td * td;

    #[cfg(feature = "tracing")]
    tracing::debug!("design butterworth low_pass: fs={fs} fc={fc}");
    Ok(Biquad::new(Coefficients::normalized(a0, a1, a2, b0, b1, b0)?))
}

/// Creates a second-order Butterworth high-pass filter.
///
/// Unity gain at the Nyquist frequency, 3 dB down at `fc`, zero at DC.
///
/// # Arguments
///
/// * `fs` - Sampling frequency in Hz
/// * `fc` - Cutoff frequency in Hz
pub fn high_pass(fs: f64, fc: f64) -> Result<Biquad, FilterError> {
    validate_frequencies(fs, fc)?;
    let wc = 2.0 * PI * fc;
    let td = tan(wc / (2.0 * fs));

    let b0 = 1.0;
    let b1 = -2.0;
    let a0 = 1.0 + td * SQRT_2 + td * td;
    let a1 = -2.0 + 2.0 * td * td;
    let a2 = 1.0 - td * SQRT_2 + td * td;

    #[cfg(feature = "tracing")]
    tracing::debug!("design butterworth high_pass: fs={fs} fc={fc}");
    Ok(Biquad::new(Coefficients::normalized(a0, a1, a2, b0, b1, b0)?))
}
