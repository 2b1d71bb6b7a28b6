//! Signal containers: the read contract the filter consumes and the derived
//! view it produces.
//!
//! The core never needs more than indexed access to `(time, value)` pairs
//! and a length, so that is the whole [`Signal`] trait. [`SampledSignal`] is
//! the one concrete container shipped here (uniformly sampled values);
//! anything else — ring buffers, memory-mapped captures — can implement the
//! trait and be filtered the same way.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Read-only view of a stored digital signal.
///
/// `sample(i)` must be valid for every `i < len()`; implementations may
/// panic on out-of-range indices.
pub trait Signal {
    /// Number of data points.
    fn len(&self) -> usize;

    /// Whether the signal holds no data points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `i`-th data point as a `(time, value)` pair.
    fn sample(&self, index: usize) -> (f64, f64);
}

/// An owned, uniformly sampled signal: values spaced `1/fs` apart starting
/// at time zero.
#[derive(Debug, Clone, Default)]
pub struct SampledSignal {
    /// Sampling period in seconds.
    ts: f64,
    data: Vec<f64>,
}

impl SampledSignal {
    /// Copies `data` into a new signal sampled at `fs` Hz.
    ///
    /// An empty `data` slice or a non-positive `fs` yields an empty signal.
    pub fn new(fs: f64, data: &[f64]) -> Self {
        if data.is_empty() || fs <= 0.0 {
            return Self::default();
        }
        Self {
            ts: 1.0 / fs,
            data: data.to_vec(),
        }
    }

    /// Sampling period in seconds (zero for an empty signal).
    pub fn sampling_period(&self) -> f64 {
        self.ts
    }

    /// The raw value sequence.
    pub fn values(&self) -> &[f64] {
        &self.data
    }
}

impl Signal for SampledSignal {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn sample(&self, index: usize) -> (f64, f64) {
        (self.ts * index as f64, self.data[index])
    }
}

/// The result of batch-filtering a [`Signal`]: the source's time axis paired
/// with the computed value sequence.
///
/// Owns its values but borrows the source for time semantics, so it is
/// exactly as long as the source and never outlives it.
#[derive(Debug)]
pub struct Filtered<'a, S: ?Sized> {
    source: &'a S,
    values: Vec<f64>,
}

impl<'a, S: Signal + ?Sized> Filtered<'a, S> {
    pub(crate) fn new(source: &'a S, values: Vec<f64>) -> Self {
        debug_assert_eq!(source.len(), values.len());
        Self { source, values }
    }

    /// The computed value sequence.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the view, keeping only the computed values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl<S: Signal + ?Sized> Signal for Filtered<'_, S> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn sample(&self, index: usize) -> (f64, f64) {
        let (t, _) = self.source.sample(index);
        (t, self.values[index])
    }
}
