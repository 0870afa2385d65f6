//! Number parsing, rounding and display formatting
//!
//! The calculator stores its operands as text. These helpers convert between
//! that text and `f64` using the same conventions a browser would: lenient
//! prefix parsing, shortest round-trip output, and an explicit exponent sign.

/// Digit entry never grows the current entry past this many characters.
pub const MAX_ENTRY_LEN: usize = 15;

/// Entries longer than this render in exponential notation.
pub const DISPLAY_LEN_LIMIT: usize = 12;

/// Fractional digits shown in exponential notation.
pub const EXPONENT_DIGITS: usize = 6;

/// Results are rounded to this many decimal places.
pub const ROUNDING_DECIMALS: i32 = 12;

/// Parse an operand the way `parseFloat` does.
///
/// The longest prefix that forms a valid decimal number wins, so `"5."` is 5
/// and `"1e+21."` is 1e21. Text with no numeric prefix (`"-"`, `""`) yields
/// NaN, which the calculator reports as an invalid operation.
pub fn parse_operand(text: &str) -> f64 {
    let text = text.trim_start();
    let candidate_len = text
        .find(|c: char| !matches!(c, '0'..='9' | '.' | 'e' | 'E' | '+' | '-'))
        .unwrap_or(text.len());
    let candidate = &text[..candidate_len];

    // Only ASCII survives the filter above, so every index is a char boundary.
    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Round to `ROUNDING_DECIMALS` places, halves toward positive infinity.
///
/// Suppresses binary artifacts such as `0.1 + 0.2 = 0.30000000000000004`.
/// Integral values are returned untouched, as is anything whose scaled form
/// would overflow.
pub fn round_result(value: f64) -> f64 {
    if value.fract() == 0.0 {
        return value;
    }

    let scale = 10f64.powi(ROUNDING_DECIMALS);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }

    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / scale
}

/// Format a result as the new current entry.
///
/// Magnitudes in `[1e-6, 1e21)` print in plain decimal notation, everything
/// else in exponent form (`1e+21`, `1.5e-7`). Negative zero prints as `"0"`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{}", value)
    } else {
        with_signed_exponent(format!("{:e}", value))
    }
}

/// Significant digits needed to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 767;

/// Exponential notation with a fixed number of fractional digits,
/// e.g. `to_exponential(123456789000000.0, 6) == "1.234568e+14"`.
///
/// Rounds half away from zero on exact ties (`1234568500000` becomes
/// `1.234569e+12`), where `{:e}` alone would round half to even.
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    let exact = format!("{:.*e}", EXACT_DIGITS + fraction_digits, value);
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        // inf and NaN
        return exact;
    };
    let Ok(mut exponent) = exponent.parse::<i32>() else {
        return with_signed_exponent(exact);
    };

    let sign = if mantissa.starts_with('-') && value != 0.0 { "-" } else { "" };
    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let mut kept = digits[..=fraction_digits].to_vec();
    if digits[fraction_digits + 1] >= 5 {
        match kept.iter().rposition(|&d| d != 9) {
            Some(pos) => {
                kept[pos] += 1;
                kept[pos + 1..].fill(0);
            }
            None => {
                // 9.99..95 carries into the next power of ten
                kept.fill(0);
                kept[0] = 1;
                exponent += 1;
            }
        }
    }

    let mut text = String::with_capacity(fraction_digits + 8);
    text.push_str(sign);
    text.push(char::from(b'0' + kept[0]));
    if fraction_digits > 0 {
        text.push('.');
        text.extend(kept[1..].iter().map(|&d| char::from(b'0' + d)));
    }
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    text.push_str(&format!("e{}{}", exponent_sign, exponent.abs()));
    text
}

/// Render the current entry for the display.
pub fn render_entry(entry: &str) -> String {
    if entry.len() > DISPLAY_LEN_LIMIT {
        to_exponential(parse_operand(entry), EXPONENT_DIGITS)
    } else {
        entry.to_string()
    }
}

fn with_signed_exponent(text: String) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_operand("42"), 42.0);
        assert_eq!(parse_operand("0.5"), 0.5);
        assert_eq!(parse_operand("-3.25"), -3.25);
    }

    #[test]
    fn test_parse_trailing_decimal_point() {
        assert_eq!(parse_operand("5."), 5.0);
        assert_eq!(parse_operand("0."), 0.0);
    }

    #[test]
    fn test_parse_uses_longest_prefix() {
        assert_eq!(parse_operand("1e+21."), 1e21);
        assert_eq!(parse_operand("12e"), 12.0);
        assert_eq!(parse_operand("7abc"), 7.0);
    }

    #[test]
    fn test_parse_without_numeric_prefix_is_nan() {
        assert!(parse_operand("-").is_nan());
        assert!(parse_operand("").is_nan());
        assert!(parse_operand("inf").is_nan());
        assert!(parse_operand("NaN").is_nan());
    }

    #[test]
    fn test_round_removes_float_artifacts() {
        assert_eq!(round_result(0.1 + 0.2), 0.3);
        assert_eq!(round_result(1.1 * 3.0), 3.3);
    }

    #[test]
    fn test_round_keeps_integers_exact() {
        assert_eq!(round_result(123456789000000.0), 123456789000000.0);
        assert_eq!(round_result(9007199254740993.0), 9007199254740993.0);
    }

    #[test]
    fn test_round_negative_results() {
        assert_eq!(round_result(-0.1 - 0.2), -0.3);
    }

    #[test]
    fn test_round_tiny_values_to_zero() {
        assert_eq!(round_result(1e-13), 0.0);
    }

    #[test]
    fn test_round_passes_non_finite_through() {
        assert_eq!(round_result(f64::INFINITY), f64::INFINITY);
        assert!(round_result(f64::NAN).is_nan());
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_number(55.0), "55");
        assert_eq!(format_number(0.3), "0.3");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_exponent_forms() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2e25), "-2e+25");
    }

    #[test]
    fn test_to_exponential() {
        assert_eq!(to_exponential(123456789000000.0, 6), "1.234568e+14");
        assert_eq!(to_exponential(0.000000000001, 6), "1.000000e-12");
        assert_eq!(to_exponential(-5e20, 6), "-5.000000e+20");
    }

    #[test]
    fn test_to_exponential_rounds_ties_up() {
        assert_eq!(to_exponential(1234568500000.0, 6), "1.234569e+12");
        assert_eq!(to_exponential(1234568.5, 6), "1.234569e+6");
        assert_eq!(to_exponential(-1234568.5, 6), "-1.234569e+6");
        assert_eq!(to_exponential(2.5, 0), "3e+0");
    }

    #[test]
    fn test_to_exponential_carries_into_exponent() {
        assert_eq!(to_exponential(9999999500000.0, 6), "1.000000e+13");
        assert_eq!(to_exponential(0.0, 6), "0.000000e+0");
    }

    #[test]
    fn test_to_exponential_non_finite() {
        assert_eq!(to_exponential(f64::INFINITY, 6), "inf");
        assert_eq!(to_exponential(f64::NAN, 6), "NaN");
    }

    #[test]
    fn test_render_entry_threshold() {
        assert_eq!(render_entry("123456789012"), "123456789012");
        assert_eq!(render_entry("1234567890123"), "1.234568e+12");
        assert_eq!(render_entry("1234568.500000"), "1.234569e+6");
    }
}
