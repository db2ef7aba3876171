use std::path::Path;

use log::{debug, warn};

use crate::audio;
use crate::classify::{classify, GENDER_THRESHOLD_HZ, LOW_CUTOFF_HZ};
use crate::dsp::{find_fundamental, harmonic_product_spectrum, magnitude_spectrum, reinforced_len};
use crate::error::AnalysisError;
use crate::types::{Analysis, GenderLabel};

/// Tunables of the analysis. The defaults reproduce the original
/// recognizer: five harmonic orders, an 80 Hz search floor, and the 160 Hz
/// classification boundary.
#[derive(Clone, Debug)]
pub struct AnalysisParams {
    /// Harmonic orders folded into the product spectrum (`2..=num_harmonics`).
    pub num_harmonics: usize,
    /// Fundamental search floor in Hz (exclusive).
    pub low_cutoff_hz: f64,
    /// `LowPitch` / `HighPitchOrUnknown` boundary in Hz.
    pub threshold_hz: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            num_harmonics: 5,
            low_cutoff_hz: LOW_CUTOFF_HZ,
            threshold_hz: GENDER_THRESHOLD_HZ,
        }
    }
}

/// Run the full pipeline — load, magnitude spectrum, harmonic product
/// spectrum, fundamental search, threshold — reporting every failure to the
/// caller.
///
/// Each stage is a pure function of the previous stage's output; nothing is
/// shared across invocations, so concurrent calls on different files need
/// no coordination.
pub fn analyze(path: &Path, params: &AnalysisParams) -> Result<Analysis, AnalysisError> {
    let signal = audio::load(path)?;
    debug!(
        "{}: {} samples at {} Hz ({:.2}s)",
        path.display(),
        signal.samples.len(),
        signal.sample_rate,
        signal.duration_secs()
    );

    let spectrum = magnitude_spectrum(&signal)?;
    let hps = harmonic_product_spectrum(&spectrum, params.num_harmonics);
    // Only bins every harmonic order reinforced are comparable; the tail
    // past the shortest decimated copy still holds raw magnitudes.
    let search_bins = reinforced_len(hps.len(), params.num_harmonics);
    let fundamental_hz = find_fundamental(&hps, params.low_cutoff_hz, search_bins)?;
    debug!("{}: fundamental estimate {:.3} Hz", path.display(), fundamental_hz);

    Ok(Analysis {
        label: classify(fundamental_hz, params.threshold_hz),
        fundamental_hz,
    })
}

/// Compatibility entry point: classify a recording, collapsing *any*
/// failure into [`GenderLabel::HighPitchOrUnknown`].
///
/// A failed run is observationally indistinguishable from a genuine
/// high-pitch classification; that is the original recognizer's contract.
/// The suppressed error is logged at `warn` level, and callers that need
/// failure visibility should use [`analyze`] instead.
pub fn classify_file(path: &Path) -> GenderLabel {
    match analyze(path, &AnalysisParams::default()) {
        Ok(analysis) => analysis.label,
        Err(err) => {
            warn!(
                "{}: {err}; reporting {}",
                path.display(),
                GenderLabel::HighPitchOrUnknown.tag()
            );
            GenderLabel::HighPitchOrUnknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Write a tone as a 16-bit WAV; each harmonic is (frequency Hz, amplitude).
    fn write_tone_wav(
        dir: &Path,
        name: &str,
        partials: &[(f64, f64)],
        channels: u16,
        sample_rate: u32,
        num_samples: usize,
    ) -> PathBuf {
        let path = dir.join(name);
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for i in 0..num_samples {
            let t = i as f64 / sample_rate as f64;
            let value: f64 = partials
                .iter()
                .map(|&(freq, amp)| amp * (2.0 * std::f64::consts::PI * freq * t).sin())
                .sum();
            // Round rather than truncate: truncation concentrates the
            // quantization distortion on exact harmonics of the tone.
            let sample = (value * 16384.0).round() as i16;
            for _ in 0..channels {
                writer.write_sample(sample).unwrap();
            }
        }
        writer.finalize().unwrap();
        path
    }

    #[test]
    fn test_low_tone_classifies_as_m() {
        let dir = tempfile::tempdir().unwrap();
        // 120 Hz is an exact bin at 44100 Hz / 44100 samples.
        let path = write_tone_wav(dir.path(), "low.wav", &[(120.0, 1.0)], 1, 44100, 44100);

        let analysis = analyze(&path, &AnalysisParams::default()).unwrap();
        assert_eq!(analysis.label, GenderLabel::LowPitch);
        assert!((analysis.fundamental_hz - 120.0).abs() <= 1.0);
        assert_eq!(classify_file(&path), GenderLabel::LowPitch);
    }

    #[test]
    fn test_high_tone_classifies_as_k() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_tone_wav(dir.path(), "high.wav", &[(210.0, 1.0)], 1, 44100, 44100);

        let analysis = analyze(&path, &AnalysisParams::default()).unwrap();
        assert_eq!(analysis.label, GenderLabel::HighPitchOrUnknown);
        assert!((analysis.fundamental_hz - 210.0).abs() <= 1.0);
    }

    #[test]
    fn test_duplicated_stereo_matches_mono() {
        let dir = tempfile::tempdir().unwrap();
        // 130 Hz, exact bin at 44100 Hz / 22050 samples (2 Hz bins).
        let mono = write_tone_wav(dir.path(), "mono.wav", &[(130.0, 1.0)], 1, 44100, 22050);
        let stereo = write_tone_wav(dir.path(), "stereo.wav", &[(130.0, 1.0)], 2, 44100, 22050);

        let params = AnalysisParams::default();
        let a = analyze(&mono, &params).unwrap();
        let b = analyze(&stereo, &params).unwrap();
        assert_eq!(a.label, b.label);
        assert_eq!(a.fundamental_hz, b.fundamental_hz);
    }

    #[test]
    fn test_garbage_file_collapses_to_k() {
        let dir = tempfile::tempdir().unwrap();

        let empty = dir.path().join("empty.wav");
        std::fs::write(&empty, []).unwrap();
        assert_eq!(classify_file(&empty), GenderLabel::HighPitchOrUnknown);

        let junk = dir.path().join("notes.txt");
        std::fs::write(&junk, b"not a waveform").unwrap();
        assert_eq!(classify_file(&junk), GenderLabel::HighPitchOrUnknown);

        // The strict path keeps the failure distinguishable.
        assert!(matches!(
            analyze(&empty, &AnalysisParams::default()),
            Err(AnalysisError::Load(_))
        ));
    }

    #[test]
    fn test_missing_file_collapses_to_k() {
        let path = Path::new("/no/such/recording.wav");
        assert_eq!(classify_file(path), GenderLabel::HighPitchOrUnknown);
    }

    #[test]
    fn test_short_signal_has_no_dominant_bin() {
        let dir = tempfile::tempdir().unwrap();
        // 2 samples at a 100 Hz rate: the only bins are 0 and 50 Hz, both
        // at or below the 80 Hz cutoff.
        let path = write_tone_wav(dir.path(), "tiny.wav", &[(25.0, 1.0)], 1, 100, 2);

        assert!(matches!(
            analyze(&path, &AnalysisParams::default()),
            Err(AnalysisError::NoDominantBin { .. })
        ));
        assert_eq!(classify_file(&path), GenderLabel::HighPitchOrUnknown);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_tone_wav(dir.path(), "tone.wav", &[(140.0, 1.0)], 1, 44100, 22050);

        let params = AnalysisParams::default();
        let a = analyze(&path, &params).unwrap();
        let b = analyze(&path, &params).unwrap();
        assert_eq!(a.label, b.label);
        assert_eq!(a.fundamental_hz.to_bits(), b.fundamental_hz.to_bits());
        assert_eq!(classify_file(&path), classify_file(&path));
    }
}
