use crate::dsp::decimate::decimate;
use crate::types::Spectrum;

/// Build the Harmonic Product Spectrum of a magnitude spectrum.
///
/// The fundamental of a voiced signal is often not its energy peak; formants
/// and strong harmonics dominate. Multiplying frequency-compressed copies of
/// the spectrum reinforces bins whose energy recurs at integer multiples
/// (true harmonics) and suppresses peaks that do not recur.
///
/// The accumulator starts as a copy of the input magnitudes. For each
/// harmonic order `h` in `2..=num_harmonics`, the *original* magnitudes are
/// decimated by `h` and multiplied element-wise over the overlapping prefix;
/// bins past the shorter decimated copy are untouched by that order. The
/// output keeps the input's length and frequency axis.
///
/// Values grow multiplicatively (up to `num_harmonics` magnitude terms per
/// bin) and are deliberately not normalized: only the relative ordering of
/// bins matters to the argmax downstream.
pub fn harmonic_product_spectrum(spectrum: &Spectrum, num_harmonics: usize) -> Spectrum {
    let mut product = spectrum.magnitudes.clone();

    for harmonic in 2..=num_harmonics {
        let compressed = decimate(&spectrum.magnitudes, harmonic);
        for (acc, &c) in product.iter_mut().zip(compressed.iter()) {
            *acc *= c;
        }
    }

    Spectrum {
        magnitudes: product,
        frequencies: spectrum.frequencies.clone(),
    }
}

/// Number of leading bins multiplied by every harmonic order, i.e. the
/// length of the shortest decimated copy (`ceil(len / num_harmonics)`).
///
/// Bins past this prefix carry fewer product terms — the tail keeps its raw
/// one-term magnitudes — so their values are not comparable to the fully
/// reinforced prefix and must stay out of the fundamental search. Within
/// the prefix every bin carries the same number of terms, which also makes
/// the argmax invariant to a uniform scaling of the input magnitudes.
pub fn reinforced_len(spectrum_len: usize, num_harmonics: usize) -> usize {
    if num_harmonics <= 1 {
        return spectrum_len;
    }
    spectrum_len.div_ceil(num_harmonics)
}
