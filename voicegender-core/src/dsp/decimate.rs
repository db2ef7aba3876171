use std::f64::consts::PI;

/// Decimate a sequence by an integer factor with FIR anti-aliasing.
///
/// A linear-phase windowed-sinc low-pass (Hamming window, `10 * factor + 1`
/// taps, cutoff at the post-decimation Nyquist) is applied center-aligned,
/// so peaks keep their positions, and every `factor`-th sample of the
/// filtered result is kept. Output length is `ceil(len / factor)`.
///
/// The low-pass step is what makes this a decimator rather than plain
/// subsampling: energy above the compressed Nyquist would otherwise fold
/// back as spurious peaks on the compressed axis.
pub fn decimate(input: &[f64], factor: usize) -> Vec<f64> {
    assert!(factor >= 1, "decimation factor must be at least 1");
    if factor == 1 || input.len() <= 1 {
        return input.to_vec();
    }

    let kernel = lowpass_kernel(factor);
    let half = (kernel.len() / 2) as isize;
    let len = input.len() as isize;

    (0..input.len())
        .step_by(factor)
        .map(|i| {
            let mut acc = 0.0;
            for (j, &k) in kernel.iter().enumerate() {
                let idx = i as isize + j as isize - half;
                if idx >= 0 && idx < len {
                    acc += k * input[idx as usize];
                }
            }
            acc
        })
        .collect()
}

/// Windowed-sinc low-pass kernel with cutoff `0.5 / factor` cycles/sample,
/// normalized to unit DC gain.
fn lowpass_kernel(factor: usize) -> Vec<f64> {
    let taps = 10 * factor + 1;
    let center = (taps - 1) as f64 / 2.0;
    let fc = 0.5 / factor as f64;

    let mut kernel: Vec<f64> = (0..taps)
        .map(|i| {
            let t = i as f64 - center;
            let sinc = if t == 0.0 {
                2.0 * fc
            } else {
                (2.0 * PI * fc * t).sin() / (PI * t)
            };
            let hamming = 0.54 - 0.46 * (2.0 * PI * i as f64 / (taps - 1) as f64).cos();
            sinc * hamming
        })
        .collect();

    let sum: f64 = kernel.iter().sum();
    for k in &mut kernel {
        *k /= sum;
    }
    kernel
}
