//! Chebyshev Type I low-pass designer.
//!
//! The order-2 analog prototype is assembled from its complex conjugate
//! pole pair:
//!
//! ```text
//! H(s) = (1/(2*e)) / ((s - sp1)*(s - sp2))
//! sp_m = -sinh(asinh(1/e)/n)*sin(theta_m) + j*cosh(asinh(1/e)/n)*cos(theta_m)
//! theta_m = pi*(2*m - 1) / (2*n)
//! ```
//!
//! where `e` is the ripple parameter. The bilinear substitution
//! `s = (1/td)*(1-z^-1)/(1+z^-1)` with `td = tan(wc/(2*Fs))` then yields
//!
//! ```text
//! H(z) = (td^2/(2*e)) * (1 + 2*z^-1 + z^-2) / (d0 + d1*z^-1 + d2*z^-2)
//! d0 = 1 - td*(sp1+sp2) + td^2*sp1*sp2
//! d1 = -2 + 2*td^2*sp1*sp2
//! d2 = 1 + td*(sp1+sp2) + td^2*sp1*sp2
//! ```
//!
//! The pole sum and product are real-valued for a conjugate pair, so the
//! denominator collapses to real coefficients; the arithmetic is carried in
//! complex form until that final step. The resulting DC gain is the even
//! order ripple floor `1/sqrt(1 + e^2)`, with the passband peaking at unity
//! in between.

use core::f64::consts::PI;
use libm::{acosh, asinh, cos, cosh, sin, sinh, tan};
use num_complex::Complex;

use crate::biquad::{Biquad, Coefficients};
use crate::cookbook::validate_frequencies;
use crate::error::FilterError;

/// Filter order.
const N: f64 = 2.0;

/// The `m`-th pole of the order-2 Type I prototype.
fn pole(m: u32, ripple: f64) -> Complex<f64> {
    let theta = PI * (2.0 * f64::from(m) - 1.0) / (2.0 * N);
    let u = asinh(1.0 / ripple) / N;
    Complex::new(-sinh(u) * sin(theta), cosh(u) * cos(theta))
}

/// Creates a second-order Chebyshev Type I low-pass filter.
///
/// `fh` is the -3 dB attenuation frequency; in a Type I low-pass this sits
/// *above* the ripple cutoff, related by `wh = wc * cosh(acosh(1/e)/n)`.
/// The ripple parameter must lie in `(0, 1]`; outside that range the -3 dB
/// framing of `fh` loses its meaning and `acosh(1/e)` leaves its domain.
///
/// # Arguments
///
/// * `fs` - Sampling frequency in Hz
/// * `fh` - -3 dB attenuation frequency in Hz
/// * `ripple` - Ripple parameter `e`; passband gain ripples between
///   `1/sqrt(1+e^2)` and unity
pub fn type1_low_pass(fs: f64, fh: f64, ripple: f64) -> Result<Biquad, FilterError> {
    validate_frequencies(fs, fh)?;
    if !(ripple > 0.0 && ripple <= 1.0) {
        return Err(FilterError::BadGain);
    }
    // wh = wc * cosh(acosh(1/e)/n), so recover wc from the -3 dB edge
    // before pre-warping.
    let wc = 2.0 * PI * fh / cosh(acosh(1.0 / ripple) / N);
    let td = tan(wc / (2.0 * fs));

    let sp1 = pole(1, ripple);
    let sp2 = pole(2, ripple);
    let pole_sum = sp1 + sp2;
    let pole_product = sp1 * sp2;
    let tdc = Complex::new(td, 0.0);

    let b0 = td * td / (2.0 * ripple);
    let b1 = 2.0 * b0;
    let a0 = (1.0 - tdc * pole_sum + tdc * tdc * pole_product).re;
    let a1 = (-2.0 + 2.0 * tdc * tdc * pole_product).re;
    let a2 = (1.0 + tdc * pole_sum + tdc * tdc * pole_product).re;

    #[cfg(feature = "tracing")]
    tracing::debug!("design chebyshev type1_low_pass: fs={fs} fh={fh} ripple={ripple}");
    Ok(Biquad::new(Coefficients::normalized(a0, a1, a2, b0, b1, b0)?))
}
