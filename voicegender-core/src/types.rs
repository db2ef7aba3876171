use std::fmt;

use serde::Serialize;

/// A decoded, mono waveform.
///
/// Multi-channel sources are downmixed at load time, so `samples` always
/// holds one amplitude per time index. Samples are `f64` because the
/// harmonic product spectrum multiplies up to five magnitude terms and the
/// resulting dynamic range overflows `f32` for realistic recording lengths.
#[derive(Clone, Debug)]
pub struct AudioSignal {
    pub samples: Vec<f64>,
    pub sample_rate: u32,
}

impl AudioSignal {
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Magnitude spectrum with its frequency-bin axis.
///
/// `magnitudes` and `frequencies` are parallel arrays of length
/// `floor(N/2) + 1` for an `N`-sample signal, with
/// `frequencies[i] = i * sample_rate / N` (strictly increasing). The
/// harmonic product spectrum reuses this shape; its values are products of
/// decimated magnitude copies rather than raw magnitudes.
#[derive(Clone, Debug)]
pub struct Spectrum {
    pub magnitudes: Vec<f64>,
    pub frequencies: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Width of one frequency bin in Hz (sample_rate / N).
    pub fn bin_width(&self) -> f64 {
        if self.frequencies.len() < 2 {
            return 0.0;
        }
        self.frequencies[1] - self.frequencies[0]
    }
}

/// The two-valued classification outcome.
///
/// There is deliberately no third "error" value: the compatibility facade
/// collapses every failure into `HighPitchOrUnknown`, matching the original
/// recognizer's output contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GenderLabel {
    /// Fundamental below the classification threshold; printed as `M`.
    #[serde(rename = "M")]
    LowPitch,
    /// Fundamental at or above the threshold, or analysis failed; printed
    /// as `K`.
    #[serde(rename = "K")]
    HighPitchOrUnknown,
}

impl GenderLabel {
    /// The single-character output tag used on stdout.
    pub fn tag(self) -> &'static str {
        match self {
            GenderLabel::LowPitch => "M",
            GenderLabel::HighPitchOrUnknown => "K",
        }
    }
}

impl fmt::Display for GenderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Outcome of a successful strict-path analysis, including the fundamental
/// estimate as a diagnostic alongside the label.
#[derive(Clone, Debug, Serialize)]
pub struct Analysis {
    pub label: GenderLabel,
    pub fundamental_hz: f64,
}
