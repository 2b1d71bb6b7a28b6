//! Filtra Core - biquad IIR filter design and evaluation
//!
//! This crate designs second-order IIR (biquad) digital filters from
//! classical analog prototypes via the bilinear transform, and runs them
//! sample by sample or over whole stored signals.
//!
//! # Designers
//!
//! Cookbook designs parameterized by a bandwidth in octaves:
//!
//! - [`low_pass`], [`high_pass`], [`band_pass`], [`notch`]
//! - [`band_pass_from_q`] - peak-gain parameterization, center frequency
//!   recovered numerically
//!
//! Designs derived from analog prototypes with frequency pre-warping:
//!
//! - [`butterworth::low_pass`], [`butterworth::high_pass`]
//! - [`chebyshev::type1_low_pass`]
//!
//! Every designer validates its full specification up front and returns a
//! ready-to-run [`Biquad`] or a [`FilterError`] naming what was wrong.
//!
//! # Running a filter
//!
//! ```
//! use filtra_core::{SampledSignal, Signal};
//!
//! let mut lp = filtra_core::low_pass(1000.0, 100.0, 1.0)?;
//!
//! // Stream evenly spaced samples one at a time...
//! let y = lp.process(1.0);
//! assert!(y.is_finite());
//!
//! // ...or filter a whole signal in one pass.
//! let signal = SampledSignal::new(1000.0, &[0.0, 0.5, 1.0, 0.5, 0.0]);
//! let filtered = lp.filter(&signal)?;
//! assert_eq!(filtered.len(), signal.len());
//! # Ok::<(), filtra_core::FilterError>(())
//! ```
//!
//! # no_std Support
//!
//! The crate is `no_std` compatible for embedded filtering. Disable the
//! default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! filtra-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Per-sample causal**: `advance` is O(1), allocation-free, fixed state
//! - **Validate eagerly**: no partially constructed filter ever escapes
//! - **Pre-warp always**: analog-prototype designs pin their cutoff exactly
//! - **Complex arithmetic stays local**: only the Chebyshev derivation and
//!   the transfer-function evaluator touch [`num_complex`]

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod alpha;
pub mod biquad;
pub mod butterworth;
pub mod chebyshev;
pub mod cookbook;
pub mod error;
pub mod signal;

// Re-export main types at crate root
pub use biquad::{Biquad, Coefficients};
pub use cookbook::{band_pass, band_pass_from_q, high_pass, low_pass, notch};
pub use error::{Degeneracy, FilterError};
pub use signal::{Filtered, SampledSignal, Signal};
