mod codec;
mod wav;

use std::path::Path;

use crate::error::LoadError;
use crate::types::AudioSignal;

/// Decode a recording into a mono [`AudioSignal`].
///
/// WAV files go through hound; anything else is handed to symphonia's
/// format probe (FLAC and Ogg/Vorbis are enabled). Multi-channel audio is
/// downmixed by per-sample channel averaging. The file handle is dropped on
/// every path, success or failure.
pub fn load(path: &Path) -> Result<AudioSignal, LoadError> {
    let is_wav = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("wav"));

    let (interleaved, channels, sample_rate) = if is_wav {
        wav::decode(path)?
    } else {
        codec::decode(path)?
    };

    if sample_rate == 0 {
        return Err(LoadError::BadSampleRate(sample_rate));
    }
    if channels == 0 || interleaved.is_empty() {
        return Err(LoadError::EmptyAudio);
    }

    Ok(AudioSignal {
        samples: downmix(&interleaved, channels),
        sample_rate,
    })
}

/// Average interleaved channels into one sample per frame.
fn downmix(interleaved: &[f64], channels: usize) -> Vec<f64> {
    if channels == 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f64>() / frame.len() as f64)
        .collect()
}
