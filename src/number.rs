//! Decimal text for floats.
//!
//! Floats are rounded to 14 significant digits and trailing zeros are
//! dropped. Values whose decimal exponent falls outside `-4..=13` switch to
//! exponent notation with an uppercase `E` and an explicit sign, so `1e20`
//! is written `1.0E+20` and `1e-7` is written `1.0E-7`.

/// Significant digits kept when a float is written.
const FLOAT_PRECISION: usize = 14;

/// Formats a float the way GGON writers print numbers.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-INF" } else { "INF" }.to_string();
    }

    let (digits, decpt) = significant_digits(value.abs());
    let mut out = String::with_capacity(digits.len() + 8);
    if value.is_sign_negative() {
        out.push('-');
    }

    if decpt < -3 || decpt > FLOAT_PRECISION as i32 {
        let exponent = decpt - 1;
        out.push_str(&digits[..1]);
        out.push('.');
        if digits.len() > 1 {
            out.push_str(&digits[1..]);
        } else {
            out.push('0');
        }
        out.push('E');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.unsigned_abs().to_string());
    } else if decpt <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat(decpt.unsigned_abs() as usize));
        out.push_str(&digits);
    } else {
        let int_len = decpt as usize;
        if digits.len() > int_len {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        } else {
            out.push_str(&digits);
            out.push_str(&"0".repeat(int_len - digits.len()));
        }
    }
    out
}

/// Splits a finite, non-negative float into its rounded significant digits
/// and the position of the decimal point, so that `value = 0.DIGITS * 10^decpt`.
fn significant_digits(value: f64) -> (String, i32) {
    if value == 0.0 {
        return ("0".to_string(), 1);
    }

    let sci = format!("{:.*e}", FLOAT_PRECISION - 1, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let significant = digits.trim_end_matches('0').len().max(1);
    digits.truncate(significant);
    (digits, exponent + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_plain_notation() {
        assert_eq!(format_float(3.14), "3.14");
        assert_eq!(format_float(1.0), "1");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(250.0), "250");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(1e13), "10000000000000");
        assert_eq!(format_float(1e14), "1.0E+14");
    }

    #[test]
    fn test_rounds_to_fourteen_digits() {
        assert_eq!(format_float(0.1 + 0.2), "0.3");
        assert_eq!(format_float(1.0 / 3.0), "0.33333333333333");
        assert_eq!(format_float(2.0 / 3.0), "0.66666666666667");
        assert_eq!(format_float(99999999999999.99), "1.0E+14");
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(format_float(1e20), "1.0E+20");
        assert_eq!(format_float(-1e20), "-1.0E+20");
        assert_eq!(format_float(1e-7), "1.0E-7");
        assert_eq!(format_float(0.00001234), "1.234E-5");
        assert_eq!(format_float(1.5e300), "1.5E+300");
    }

    #[test]
    fn test_zero_and_non_finite() {
        assert_eq!(format_float(0.0), "0");
        assert_eq!(format_float(-0.0), "-0");
        assert_eq!(format_float(f64::INFINITY), "INF");
        assert_eq!(format_float(f64::NEG_INFINITY), "-INF");
        assert_eq!(format_float(f64::NAN), "NAN");
    }
}
