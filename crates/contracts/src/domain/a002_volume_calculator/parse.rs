/// Parse the longest numeric prefix of `input`, the way a browser's
/// `parseFloat` does.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12abc"`
/// yields `12.0`. The literal `Infinity` (with an optional sign) yields an
/// infinite value. Returns `None` when no numeric prefix exists.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let infinite = if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(infinite);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_leading_number("24"), Some(24.0));
        assert_eq!(parse_leading_number("-5"), Some(-5.0));
        assert_eq!(parse_leading_number("+1.25"), Some(1.25));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("5."), Some(5.0));
    }

    #[test]
    fn test_prefix_and_whitespace() {
        assert_eq!(parse_leading_number("  7 cm"), Some(7.0));
        assert_eq!(parse_leading_number("3.5.1"), Some(3.5));
        assert_eq!(parse_leading_number("1,5"), Some(1.0));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parse_leading_number("1e3"), Some(1000.0));
        assert_eq!(parse_leading_number("2.5E-1"), Some(0.25));
        assert_eq!(parse_leading_number("4e"), Some(4.0));
        assert_eq!(parse_leading_number("4e+"), Some(4.0));
        assert_eq!(parse_leading_number("1e400"), Some(f64::INFINITY));
    }

    #[test]
    fn test_infinity_literal() {
        assert_eq!(parse_leading_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_number("-Infinityx"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_leading_number("inf"), None);
    }

    #[test]
    fn test_no_number() {
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("-.e1"), None);
    }
}
