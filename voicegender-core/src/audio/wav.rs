use std::path::Path;

use crate::error::LoadError;

/// Decode a WAV file with hound.
///
/// Returns interleaved samples, channel count, and sample rate. Integer PCM
/// is scaled to `[-1, 1)`. The scale cannot affect the outcome: the
/// fundamental search compares only bins reinforced by every harmonic
/// order, so a uniform factor raises each candidate by the same power.
pub(crate) fn decode(path: &Path) -> Result<(Vec<f64>, usize, u32), LoadError> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let samples = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<f64>, hound::Error>>()?,
        hound::SampleFormat::Int => {
            let scale = (1u64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<Vec<f64>, hound::Error>>()?
        }
    };

    Ok((samples, spec.channels as usize, spec.sample_rate))
}
