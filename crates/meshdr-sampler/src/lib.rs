//! # meshdr-sampler
//!
//! Turns one base mesh into a lazy sequence of randomly deformed meshes
//! and drives that sequence into a sink.
//!
//! - [`generator`] — [`SampleGenerator`] and its [`Samples`] iterator.
//! - [`runner`] — [`BatchRunner`], pulling every sample into a [`SampleSink`].
//! - [`sinks`] — STL directory writer and an in-memory collector.
//! - [`metrics`] — Timing and displacement summary of a batch.

pub mod generator;
pub mod metrics;
pub mod runner;
pub mod sinks;

pub use generator::{SampleGenerator, Samples, SamplingParams};
pub use metrics::BatchMetrics;
pub use runner::{BatchRunner, SampleSink};
