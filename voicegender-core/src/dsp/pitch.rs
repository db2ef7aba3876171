use crate::error::AnalysisError;
use crate::types::Spectrum;

/// Pick the dominant frequency above `cutoff_hz` from the first
/// `search_bins` bins of a (product) spectrum.
///
/// Bins at or below the cutoff are skipped; this drops DC, sub-bass rumble,
/// and decimation edge artifacts. For a harmonic product spectrum,
/// `search_bins` should be [`reinforced_len`](crate::dsp::hps::reinforced_len):
/// tail bins past the shortest decimated copy hold raw one-term magnitudes
/// that are incommensurable with the multiplied prefix. For a plain
/// magnitude spectrum, pass its full length.
///
/// Ties keep the first occurrence (stable argmax). When no qualifying bin
/// exists — pathologically low sample rates or very short signals — this is
/// a reported error, never a silent default.
pub fn find_fundamental(
    spectrum: &Spectrum,
    cutoff_hz: f64,
    search_bins: usize,
) -> Result<f64, AnalysisError> {
    let mut best: Option<(usize, f64)> = None;

    for (i, (&freq, &mag)) in spectrum
        .frequencies
        .iter()
        .zip(spectrum.magnitudes.iter())
        .take(search_bins)
        .enumerate()
    {
        if freq <= cutoff_hz {
            continue;
        }
        match best {
            Some((_, best_mag)) if mag <= best_mag => {}
            _ => best = Some((i, mag)),
        }
    }

    best.map(|(i, _)| spectrum.frequencies[i])
        .ok_or(AnalysisError::NoDominantBin { cutoff_hz })
}
