use crate::types::GenderLabel;

/// Classification boundary between typical male and female fundamental
/// frequency ranges, in Hz.
pub const GENDER_THRESHOLD_HZ: f64 = 160.0;

/// Floor for the fundamental search, in Hz. Bins at or below it (DC,
/// rumble, decimation edge artifacts) never qualify as the fundamental.
pub const LOW_CUTOFF_HZ: f64 = 80.0;

/// Threshold rule mapping a fundamental-frequency estimate to a label:
/// strictly below the boundary is `LowPitch`, at or above is
/// `HighPitchOrUnknown`. The pipeline passes [`GENDER_THRESHOLD_HZ`] by
/// default.
pub fn classify(fundamental_hz: f64, threshold_hz: f64) -> GenderLabel {
    if fundamental_hz < threshold_hz {
        GenderLabel::LowPitch
    } else {
        GenderLabel::HighPitchOrUnknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_ranges() {
        assert_eq!(classify(110.0, GENDER_THRESHOLD_HZ), GenderLabel::LowPitch);
        assert_eq!(
            classify(220.0, GENDER_THRESHOLD_HZ),
            GenderLabel::HighPitchOrUnknown
        );
    }

    #[test]
    fn test_boundary_is_half_open() {
        assert_eq!(classify(159.999, GENDER_THRESHOLD_HZ), GenderLabel::LowPitch);
        assert_eq!(
            classify(160.0, GENDER_THRESHOLD_HZ),
            GenderLabel::HighPitchOrUnknown
        );
    }
}
