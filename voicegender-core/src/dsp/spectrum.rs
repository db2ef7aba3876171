use realfft::RealFftPlanner;

use crate::error::AnalysisError;
use crate::types::{AudioSignal, Spectrum};

/// Magnitude of the real-input DFT over the non-negative frequency bins,
/// paired with the matching frequency axis.
///
/// No window is applied; the transform runs over the full raw sample block,
/// so the bin width is `sample_rate / N` and the output length is
/// `floor(N/2) + 1`.
pub fn magnitude_spectrum(signal: &AudioSignal) -> Result<Spectrum, AnalysisError> {
    let n = signal.samples.len();
    if n == 0 {
        return Err(AnalysisError::EmptySignal);
    }

    let fft = RealFftPlanner::<f64>::new().plan_fft_forward(n);
    let mut input = signal.samples.clone();
    let mut output = fft.make_output_vec();
    fft.process(&mut input, &mut output).expect("FFT failed");

    let magnitudes: Vec<f64> = output.iter().map(|c| c.norm()).collect();
    let step = signal.sample_rate as f64 / n as f64;
    let frequencies: Vec<f64> = (0..magnitudes.len()).map(|i| i as f64 * step).collect();

    Ok(Spectrum {
        magnitudes,
        frequencies,
    })
}
