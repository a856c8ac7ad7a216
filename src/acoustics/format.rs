//! Magnitude formatting
//!
//! Ordinary magnitudes (|exponent| < 3) print as fixed-point with six
//! decimals. Everything else prints as `m.mm × 10⁺e` / `m.mm × 10⁻e`, with
//! the sign carried by the superscript marker and the exponent digits
//! unsigned.

/// Exponent magnitude at which fixed-point output switches to mantissa form
const FIXED_POINT_LIMIT: i64 = 3;

/// log10 values this close to an integer are treated as exact powers of ten
const LOG_SNAP_TOLERANCE: f64 = 1e-9;

/// Format `value` for display
///
/// ```
/// use decibel_lab::acoustics::format_scientific;
///
/// assert_eq!(format_scientific(0.0), "0");
/// assert_eq!(format_scientific(5.0), "5.000000");
/// assert_eq!(format_scientific(3.16e-4), "3.16 × 10⁻4");
/// ```
pub fn format_scientific(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return format_non_finite(value);
    }

    let exponent = value.abs().log10().floor();
    if (exponent as i64).abs() < FIXED_POINT_LIMIT {
        return format!("{:.6}", value);
    }

    let mut mantissa = value / 10.0_f64.powf(exponent);
    if !mantissa.is_finite() {
        // Subnormal inputs: 10^exponent itself underflows to zero
        let half = (exponent / 2.0).trunc();
        mantissa = value / 10.0_f64.powf(half) / 10.0_f64.powf(exponent - half);
    }

    format_mantissa(mantissa, exponent as i64)
}

/// Format the intensity that `decibel` represents against `reference`
///
/// Works in the log domain, so levels whose intensity does not fit in an
/// `f64` (anything past roughly 3200 dB) still render, e.g. 10000 dB reads
/// `1.00 × 10⁺988`.
pub fn format_intensity_for_decibel(decibel: f64, reference: f64) -> String {
    if !decibel.is_finite() {
        return format_non_finite(decibel);
    }

    let mut log_value = reference.log10() + decibel / 10.0;
    if (log_value - log_value.round()).abs() < LOG_SNAP_TOLERANCE {
        log_value = log_value.round();
    }

    let exponent = log_value.floor();
    if (exponent as i64).abs() < FIXED_POINT_LIMIT {
        return format!("{:.6}", 10.0_f64.powf(log_value));
    }

    let mantissa = 10.0_f64.powf(log_value - exponent);
    format_mantissa(mantissa, exponent as i64)
}

fn format_mantissa(mantissa: f64, exponent: i64) -> String {
    let marker = if exponent >= 0 { '⁺' } else { '⁻' };
    format!("{:.2} × 10{}{}", mantissa, marker, exponent.abs())
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acoustics::{intensity_from_decibel, HEARING_THRESHOLD, THEORETICAL_MINIMUM};
    use test_case::test_case;

    #[test]
    fn test_zero() {
        assert_eq!(format_scientific(0.0), "0");
        assert_eq!(format_scientific(-0.0), "0");
    }

    #[test_case(5.0, "5.000000" ; "single digit")]
    #[test_case(0.5, "0.500000" ; "one tenth range")]
    #[test_case(123.456, "123.456000" ; "hundreds")]
    #[test_case(-42.0, "-42.000000" ; "negative")]
    #[test_case(0.01, "0.010000" ; "two below")]
    fn test_fixed_point(value: f64, expected: &str) {
        assert_eq!(format_scientific(value), expected);
    }

    #[test_case(3.16e-4, "3.16 × 10⁻4" ; "city traffic")]
    #[test_case(1e-12, "1.00 × 10⁻12" ; "threshold of hearing")]
    #[test_case(2500.0, "2.50 × 10⁺3" ; "thousands")]
    #[test_case(-4.2e7, "-4.20 × 10⁺7" ; "negative large")]
    #[test_case(1e-3, "1.00 × 10⁻3" ; "lawn mower")]
    fn test_mantissa_form(value: f64, expected: &str) {
        assert_eq!(format_scientific(value), expected);
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_scientific(f64::INFINITY), "∞");
        assert_eq!(format_scientific(f64::NEG_INFINITY), "-∞");
        assert_eq!(format_scientific(f64::NAN), "NaN");
    }

    #[test]
    fn test_subnormal_does_not_produce_nan() {
        let rendered = format_scientific(5e-324);
        assert!(rendered.ends_with("× 10⁻324"), "got {}", rendered);
        assert!(!rendered.contains("NaN"));
    }

    #[test]
    fn test_intensity_for_decibel_matches_direct_format() {
        for db in [0.0, 30.0, 60.0, 85.0, 120.0, 140.0, 194.0] {
            let direct = format_scientific(intensity_from_decibel(db));
            let logged = format_intensity_for_decibel(db, HEARING_THRESHOLD);
            assert_eq!(direct, logged, "mismatch at {} dB", db);
        }
    }

    #[test]
    fn test_intensity_for_decibel_beyond_f64() {
        assert!(intensity_from_decibel(10000.0).is_infinite());
        assert_eq!(format_intensity_for_decibel(10000.0, HEARING_THRESHOLD), "1.00 × 10⁺988");
    }

    #[test]
    fn test_intensity_for_decibel_theoretical_reference() {
        assert_eq!(format_intensity_for_decibel(0.0, THEORETICAL_MINIMUM), "1.00 × 10⁻16");
    }
}
