//! Error types for filter design and filtering.
//!
//! Every designer validates its whole specification before building anything,
//! so a returned [`FilterError`] always means no filter was constructed.
//! All variants are plain validation outcomes except
//! [`FilterError::DegenerateDesign`], which reports design math that
//! collapsed (for example a zero leading denominator coefficient); retrying a
//! degenerate design with the same parameters cannot succeed.

/// Errors returned by filter designers and by batch filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterError {
    /// Working/cutoff/center frequency at or above the sampling frequency.
    BadWorkingFrequency,
    /// Bandwidth must be greater than zero.
    NegativeBandwidth,
    /// Zero or negative sampling or working frequency.
    BadFrequency,
    /// Gain, Q, or ripple parameter outside its valid range.
    BadGain,
    /// Signal too short to filter: the recurrence needs at least 3 samples.
    ShortSignal {
        /// Length of the rejected signal.
        len: usize,
    },
    /// The design math produced a degenerate (unstable or singular) filter.
    ///
    /// This denotes a fault in the design itself, not recoverable caller
    /// input: do not retry with the same parameters.
    DegenerateDesign(Degeneracy),
}

/// The specific way a filter design degenerated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Degeneracy {
    /// The unnormalized leading denominator coefficient `a0` was zero,
    /// indicating a pole on the unit circle or an infinite-Q design.
    ZeroLeadingCoefficient,
    /// `sin(w0) == 0`: the working frequency collapsed onto a multiple of
    /// the Nyquist rate where the bandwidth-to-alpha relation is singular.
    SingularFrequency,
    /// The bandwidth-to-alpha argument `ln2/2 * BW * w0 / sin(w0)` fell
    /// outside `(-1, 1)`. Carries the offending value.
    BandwidthArgument(f64),
}

impl core::fmt::Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BadWorkingFrequency => {
                write!(f, "working frequency must be below the sampling frequency")
            }
            Self::NegativeBandwidth => write!(f, "bandwidth must be greater than zero"),
            Self::BadFrequency => write!(f, "zero or negative frequency"),
            Self::BadGain => write!(f, "gain parameter outside valid range"),
            Self::ShortSignal { len } => {
                write!(f, "signal length must be greater than 2, got {len}")
            }
            Self::DegenerateDesign(d) => write!(f, "degenerate filter design: {d}"),
        }
    }
}

impl core::fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroLeadingCoefficient => write!(f, "leading coefficient a0 is zero"),
            Self::SingularFrequency => write!(f, "sin(w0) is zero"),
            Self::BandwidthArgument(v) => {
                write!(f, "bandwidth alpha argument {v:e} outside (-1, 1)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FilterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_texts() {
        assert_eq!(
            FilterError::BadWorkingFrequency.to_string(),
            "working frequency must be below the sampling frequency"
        );
        assert_eq!(
            FilterError::NegativeBandwidth.to_string(),
            "bandwidth must be greater than zero"
        );
        assert_eq!(FilterError::BadFrequency.to_string(), "zero or negative frequency");
        assert_eq!(
            FilterError::ShortSignal { len: 2 }.to_string(),
            "signal length must be greater than 2, got 2"
        );
    }

    #[test]
    fn degeneracy_display_carries_value() {
        let err = FilterError::DegenerateDesign(Degeneracy::BandwidthArgument(1.5));
        let msg = err.to_string();
        assert!(msg.contains("degenerate"), "got: {msg}");
        assert!(msg.contains("1.5e0"), "got: {msg}");
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(FilterError::BadGain, FilterError::BadGain);
        assert_ne!(
            FilterError::ShortSignal { len: 1 },
            FilterError::ShortSignal { len: 2 }
        );
    }
}
