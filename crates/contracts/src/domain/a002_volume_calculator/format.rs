//! Rendering of the computed volume and of the result sentence.

/// Text before the value in the result sentence.
pub const RESULT_PREFIX: &str = "Maximum ";
/// Unit printed right after the value.
pub const RESULT_UNIT: &str = "cm³";
/// Text after the unit.
pub const RESULT_SUFFIX: &str = " worth of filler material would be needed.";

/// Format a volume: exact integers without decimals, everything else with
/// exactly two.
pub fn format_volume(volume: f64) -> String {
    if volume.is_infinite() {
        return if volume > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if volume.fract() == 0.0 {
        format!("{:.0}", volume)
    } else {
        format_two_decimals(volume)
    }
}

/// Two decimals rounded from the exact binary value of `value`.
///
/// `{:.2}` already rounds the exact value but breaks exact ties to even.
/// The only exactly representable ties at two decimals are odd multiples
/// of 1/8; those round away from zero instead (0.125 -> 0.13).
fn format_two_decimals(value: f64) -> String {
    // Scaling by a power of two is exact.
    let eighths = value.abs() * 8.0;
    if eighths.fract() != 0.0 || eighths % 2.0 != 1.0 {
        return format!("{:.2}", value);
    }

    // value = e/8, so value * 100 = 25e/2 with 25e odd; take the upper neighbour.
    let cents = (25 * eighths as u64 + 1) / 2;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

/// Plain-text result sentence for an already formatted value.
pub fn result_message(formatted: &str) -> String {
    format!("{RESULT_PREFIX}{formatted} {RESULT_UNIT}{RESULT_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_decimals() {
        assert_eq!(format_volume(24.0), "24");
        assert_eq!(format_volume(1.5 * 2.0 * 2.0), "6");
        assert_eq!(format_volume(1_000_000.0), "1000000");
    }

    #[test]
    fn test_fractions_have_two_decimals() {
        assert_eq!(format_volume(1.1 * 1.0 * 1.0), "1.10");
        assert_eq!(format_volume(2.0 / 3.0), "0.67");
        assert_eq!(format_volume(0.001), "0.00");
    }

    #[test]
    fn test_near_ties_round_exact_binary_value() {
        // Decimal literals just below the tie keep the lower cent.
        let cases = [
            (2.675, "2.67"),
            (10.235, "10.23"),
            (0.615, "0.61"),
            (1.115, "1.11"),
        ];
        for (value, expected) in cases {
            assert_eq!(format_volume(value), expected, "{value}");
        }
    }

    #[test]
    fn test_exact_ties_round_up() {
        let cases = [
            (0.5 * 0.5 * 0.5, "0.13"),
            (0.375, "0.38"),
            (2.625, "2.63"),
            (10.875, "10.88"),
            (-0.125, "-0.13"),
        ];
        for (value, expected) in cases {
            assert_eq!(format_volume(value), expected, "{value}");
        }
    }

    #[test]
    fn test_overflow() {
        assert_eq!(format_volume(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_result_message() {
        assert_eq!(
            result_message("24"),
            "Maximum 24 cm³ worth of filler material would be needed."
        );
    }
}
