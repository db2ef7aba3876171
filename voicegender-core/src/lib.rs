//! Voice-based gender classification from a fundamental-frequency estimate.
//!
//! The pipeline runs strictly forward: decode a recording to a mono
//! waveform, take the magnitude spectrum of the raw sample block, build a
//! Harmonic Product Spectrum to make the fundamental stand out against
//! formants and strong harmonics, pick the dominant bin above 80 Hz, and
//! threshold the resulting frequency at 160 Hz.
//!
//! Two entry points: [`analyze`] reports every failure as a typed error,
//! while [`classify_file`] reproduces the original recognizer's contract of
//! collapsing all failures into [`GenderLabel::HighPitchOrUnknown`].

pub mod audio;
pub mod classify;
pub mod dsp;
pub mod error;
pub mod pipeline;
pub mod types;

pub use error::{AnalysisError, LoadError};
pub use pipeline::{analyze, classify_file, AnalysisParams};
pub use types::{Analysis, AudioSignal, GenderLabel, Spectrum};
