//! Second-order IIR section: normalized coefficients and the Direct Form I
//! evaluation engine.
//!
//! Every filter in this crate reduces to the biquad transfer function
//!
//! ```text
//! H(z) = (b0 + b1*z^-1 + b2*z^-2) / (a0 + a1*z^-1 + a2*z^-2)
//! ```
//!
//! stored here normalized by `a0`. [`Coefficients`] is the passive
//! description (and knows how to evaluate `H(z)` on the complex plane);
//! [`Biquad`] adds the sample-by-sample state needed to actually run the
//! recurrence.

use num_complex::Complex;

use crate::error::{Degeneracy, FilterError};
use crate::signal::{Filtered, Signal};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Transfer-function coefficients of a second-order section, normalized so
/// the leading denominator coefficient is one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Numerator tap on the current input.
    pub b0: f64,
    /// Numerator tap on the input one sample back.
    pub b1: f64,
    /// Numerator tap on the input two samples back.
    pub b2: f64,
    /// Denominator tap on the output one sample back.
    pub a1: f64,
    /// Denominator tap on the output two samples back.
    pub a2: f64,
}

impl Coefficients {
    /// Builds the normalized section from raw polynomial coefficients,
    /// dividing everything by `a0`.
    ///
    /// A zero `a0` has no finite normalization and is rejected as a
    /// degenerate design.
    pub fn normalized(
        a0: f64,
        a1: f64,
        a2: f64,
        b0: f64,
        b1: f64,
        b2: f64,
    ) -> Result<Self, FilterError> {
        if a0 == 0.0 {
            return Err(FilterError::DegenerateDesign(
                Degeneracy::ZeroLeadingCoefficient,
            ));
        }
        Ok(Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        })
    }

    /// Evaluates the transfer function at a point `z` on the complex plane.
    ///
    /// Sweeping `z = e^{jwT}` along the unit circle yields the filter's
    /// frequency response.
    pub fn response(&self, z: Complex<f64>) -> Complex<f64> {
        let zi = z.inv();
        let num = zi * (zi * self.b2 + self.b1) + self.b0;
        let den = zi * (zi * self.a2 + self.a1) + 1.0;
        num / den
    }
}

/// Direct Form I biquad engine.
///
/// Input and output history live in three-slot rings addressed by a shared
/// cursor; advancing the cursor retires the oldest slot, so the two most
/// recent samples of each ring are always in reach of the recurrence
///
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
/// ```
#[derive(Debug, Clone)]
pub struct Biquad {
    coeffs: Coefficients,
    /// Input history ring.
    x: [f64; 3],
    /// Output history ring.
    y: [f64; 3],
    /// Index of the newest slot in both rings.
    ptr: usize,
}

impl Biquad {
    /// Creates an engine over `coeffs` with silent history.
    pub fn new(coeffs: Coefficients) -> Self {
        Self {
            coeffs,
            x: [0.0; 3],
            y: [0.0; 3],
            ptr: 2,
        }
    }

    /// The section this engine evaluates.
    pub fn coefficients(&self) -> Coefficients {
        self.coeffs
    }

    /// Evaluates the section's transfer function at `z`.
    ///
    /// See [`Coefficients::response`].
    pub fn response(&self, z: Complex<f64>) -> Complex<f64> {
        self.coeffs.response(z)
    }

    /// Seeds both history rings with `value`, as if the filter had been
    /// resting at that level forever.
    ///
    /// Priming from the first sample of a signal suppresses the startup
    /// transient a silent history would produce.
    pub fn prime(&mut self, value: f64) {
        self.x = [value; 3];
        self.y = [value; 3];
        self.ptr = 2;
    }

    /// Clears both history rings to silence.
    pub fn reset(&mut self) {
        self.x = [0.0; 3];
        self.y = [0.0; 3];
        self.ptr = 2;
    }

    /// Pushes one input sample through the recurrence.
    ///
    /// The new output replaces the oldest slot and becomes the value
    /// reported by [`output`](Self::output). Samples are expected to be
    /// evenly spaced in time.
    pub fn advance(&mut self, input: f64) {
        self.ptr = (self.ptr + 1) % 3;
        let n = self.ptr;
        let nm1 = (self.ptr + 2) % 3;
        let nm2 = (self.ptr + 1) % 3;
        self.x[n] = input;
        self.y[n] = self.coeffs.b0 * input + self.coeffs.b1 * self.x[nm1]
            + self.coeffs.b2 * self.x[nm2]
            - self.coeffs.a1 * self.y[nm1]
            - self.coeffs.a2 * self.y[nm2];
    }

    /// The most recently computed output sample.
    pub fn output(&self) -> f64 {
        self.y[self.ptr]
    }

    /// Advances by one input sample and returns the freshly computed output.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        self.advance(input);
        self.output()
    }

    /// Runs a whole signal through the filter and returns the result on the
    /// same time axis.
    ///
    /// The history is primed from the signal's first value before any sample
    /// is processed. Signals of two samples or fewer cannot fill the
    /// recurrence and are rejected.
    pub fn filter<'a, S>(&mut self, signal: &'a S) -> Result<Filtered<'a, S>, FilterError>
    where
        S: Signal + ?Sized,
    {
        let len = signal.len();
        if len < 3 {
            return Err(FilterError::ShortSignal { len });
        }
        let (_, first) = signal.sample(0);
        self.prime(first);
        let mut values = Vec::with_capacity(len);
        for i in 0..len {
            let (_, v) = signal.sample(i);
            values.push(self.process(v));
        }
        Ok(Filtered::new(signal, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SampledSignal;

    fn passthrough() -> Coefficients {
        Coefficients {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
        }
    }

    #[test]
    fn normalization_divides_by_a0() {
        let c = Coefficients::normalized(2.0, 1.0, 0.5, 4.0, 2.0, 1.0).unwrap();
        assert_eq!(c.b0, 2.0);
        assert_eq!(c.b1, 1.0);
        assert_eq!(c.b2, 0.5);
        assert_eq!(c.a1, 0.5);
        assert_eq!(c.a2, 0.25);
    }

    #[test]
    fn zero_a0_is_degenerate() {
        let err = Coefficients::normalized(0.0, 1.0, 1.0, 1.0, 1.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            FilterError::DegenerateDesign(Degeneracy::ZeroLeadingCoefficient)
        );
    }

    #[test]
    fn passthrough_returns_input() {
        let mut f = Biquad::new(passthrough());
        for &v in &[1.0, -2.5, 7.0, 0.0] {
            assert_eq!(f.process(v), v);
        }
    }

    #[test]
    fn impulse_response_of_one_pole() {
        // y[n] = x[n] + 0.5 y[n-1] decays geometrically.
        let c = Coefficients {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: -0.5,
            a2: 0.0,
        };
        let mut f = Biquad::new(c);
        assert_eq!(f.process(1.0), 1.0);
        assert_eq!(f.process(0.0), 0.5);
        assert_eq!(f.process(0.0), 0.25);
        assert_eq!(f.process(0.0), 0.125);
    }

    #[test]
    fn recurrence_uses_both_history_depths() {
        // y[n] = x[n-2] delays by exactly two samples.
        let c = Coefficients {
            b0: 0.0,
            b1: 0.0,
            b2: 1.0,
            a1: 0.0,
            a2: 0.0,
        };
        let mut f = Biquad::new(c);
        assert_eq!(f.process(1.0), 0.0);
        assert_eq!(f.process(2.0), 0.0);
        assert_eq!(f.process(3.0), 1.0);
        assert_eq!(f.process(4.0), 2.0);
        assert_eq!(f.process(5.0), 3.0);
    }

    #[test]
    fn priming_holds_a_dc_steady_state() {
        // Unity DC gain: with every slot primed at the input level the
        // output must sit exactly at that level.
        let c = Coefficients {
            b0: 0.25,
            b1: 0.5,
            b2: 0.25,
            a1: 0.0,
            a2: 0.0,
        };
        let mut f = Biquad::new(c);
        f.prime(3.0);
        for _ in 0..16 {
            assert_eq!(f.process(3.0), 3.0);
        }
    }

    #[test]
    fn reset_clears_history() {
        let c = Coefficients {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: -0.9,
            a2: 0.0,
        };
        let mut f = Biquad::new(c);
        for _ in 0..8 {
            f.process(1.0);
        }
        f.reset();
        assert_eq!(f.output(), 0.0);
        assert_eq!(f.process(0.0), 0.0);
    }

    #[test]
    fn short_signal_is_rejected() {
        let s = SampledSignal::new(100.0, &[1.0, 2.0]);
        let mut f = Biquad::new(passthrough());
        assert_eq!(
            f.filter(&s).unwrap_err(),
            FilterError::ShortSignal { len: 2 }
        );
    }

    #[test]
    fn batch_matches_streaming() {
        let c = Coefficients {
            b0: 0.3,
            b1: 0.2,
            b2: 0.1,
            a1: -0.4,
            a2: 0.05,
        };
        let data: Vec<f64> = (0..64).map(|i| libm::sin(0.3 * i as f64)).collect();
        let s = SampledSignal::new(1000.0, &data);

        let mut batch = Biquad::new(c);
        let out = batch.filter(&s).unwrap();

        let mut stream = Biquad::new(c);
        stream.prime(data[0]);
        for (i, &v) in data.iter().enumerate() {
            let (t_in, _) = s.sample(i);
            let (t_out, y) = out.sample(i);
            assert_eq!(t_in, t_out);
            assert_eq!(stream.process(v), y);
        }
    }

    #[test]
    fn response_at_dc_sums_taps() {
        let c = Coefficients {
            b0: 0.2,
            b1: 0.3,
            b2: 0.1,
            a1: -0.5,
            a2: 0.1,
        };
        let h = c.response(Complex::new(1.0, 0.0));
        let expected = (0.2 + 0.3 + 0.1) / (1.0 - 0.5 + 0.1);
        assert!((h.re - expected).abs() < 1e-12);
        assert!(h.im.abs() < 1e-12);
    }
}
