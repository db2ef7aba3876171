use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading or decoding a recording.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("WAV decode failed: {0}")]
    Wav(#[from] hound::Error),

    #[error("unsupported or corrupt container: {0}")]
    Codec(#[from] symphonia::core::errors::Error),

    #[error("container has no decodable audio track")]
    NoAudioTrack,

    #[error("audio stream contains no samples")]
    EmptyAudio,

    #[error("invalid sample rate: {0} Hz")]
    BadSampleRate(u32),
}

/// Failure anywhere in the spectral pipeline.
///
/// The strict entry point surfaces these to the caller; the compatibility
/// facade swallows them and reports `HighPitchOrUnknown` instead.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("signal is empty, cannot compute a spectrum")]
    EmptySignal,

    #[error("no spectral bin above the {cutoff_hz} Hz cutoff")]
    NoDominantBin { cutoff_hz: f64 },
}
