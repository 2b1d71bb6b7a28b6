//! Frequency-response measurement for filtra biquad designs
//!
//! Companion crate to `filtra-core`: where the core crate designs and runs
//! filters, this one checks what they actually do to the spectrum.
//!
//! - [`response`] - exact swept evaluation of a designed transfer function
//! - [`spectrum`] - FFT and tone-projection measurements on filtered signals
//!
//! ## Example
//!
//! ```
//! use filtra_analysis::FrequencyResponse;
//! use filtra_core::butterworth;
//!
//! let filter = butterworth::low_pass(48_000.0, 1_000.0)?;
//! let sweep = FrequencyResponse::sweep(&filter.coefficients(), 48_000.0, 10.0, 20_000.0, 1024);
//!
//! let cutoff = sweep.cutoff_frequency(0.0).unwrap();
//! assert!((cutoff - 1_000.0).abs() < 15.0);
//! # Ok::<(), filtra_core::FilterError>(())
//! ```

pub mod response;
pub mod spectrum;

pub use response::FrequencyResponse;
pub use spectrum::{magnitude_spectrum, tone_magnitude};
