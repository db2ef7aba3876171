pub mod decimate;
pub mod hps;
pub mod pitch;
pub mod spectrum;

pub use decimate::decimate;
pub use hps::{harmonic_product_spectrum, reinforced_len};
pub use pitch::find_fundamental;
pub use spectrum::magnitude_spectrum;
