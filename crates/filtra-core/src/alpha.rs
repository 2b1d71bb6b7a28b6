//! Bandwidth, Q, and shelf-slope conversions to the cookbook `alpha`.
//!
//! Every coefficient formula in this crate consumes its damping parameter as
//! the intermediate quantity `alpha` (see the RBJ Audio EQ Cookbook). The
//! three conversions here cover the three ways a caller can express damping:
//! bandwidth in octaves, quality factor Q, or a shelf-slope parameter S.
//!
//! All functions take the digital angular frequency `w0 = 2*pi*f0/Fs` in
//! radians per sample.

use crate::error::{Degeneracy, FilterError};
use core::f64::consts::LN_2;
use libm::{sin, sinh, sqrt};

/// Alpha from a bandwidth in octaves (between -3 dB frequencies for
/// band-pass and notch filters).
///
/// `alpha = sin(w0) * sinh(ln2/2 * bw * w0 / sin(w0))`
///
/// Returns [`FilterError::DegenerateDesign`] when `sin(w0)` vanishes or when
/// the `sinh` argument falls outside `(-1, 1)`. Designs near the Nyquist
/// rate blow the argument up and are rejected here rather than producing a
/// stable-looking but meaningless filter.
pub fn from_bandwidth(w0: f64, bw: f64) -> Result<f64, FilterError> {
    let sn = sin(w0);
    if sn == 0.0 {
        return Err(FilterError::DegenerateDesign(Degeneracy::SingularFrequency));
    }
    let sharg = LN_2 / 2.0 * bw * w0 / sn;
    // TODO: confirm whether the (-1, 1) bound is a real constraint or was
    // inherited from an asin-based variant of this relation; sinh itself is
    // defined for any argument. Until then the historical accept range holds.
    if !(sharg > -1.0 && sharg < 1.0) {
        return Err(FilterError::DegenerateDesign(Degeneracy::BandwidthArgument(
            sharg,
        )));
    }
    Ok(sn * sinh(sharg))
}

/// Alpha from a quality factor: `alpha = sin(w0) / (2*Q)`.
///
/// The EE definition of Q. Callers validate `q > 0` before converting.
#[inline]
pub fn from_q(w0: f64, q: f64) -> f64 {
    sin(w0) / (2.0 * q)
}

/// Alpha from a shelf-slope parameter S (shelving EQ designs).
///
/// `alpha = sin(w0)/2 * sqrt((A + 1/A) * (1/S - 1) + 2)`
///
/// With `S = 1` the shelf is as steep as it can be while the gain remains
/// monotonic in frequency; `A = sqrt(10^(dBgain/20))`.
#[inline]
pub fn from_shelf_slope(w0: f64, a: f64, s: f64) -> f64 {
    sin(w0) / 2.0 * sqrt((a + 1.0 / a) * (1.0 / s - 1.0) + 2.0)
}
