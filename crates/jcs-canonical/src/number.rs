//! Canonical number formatting
//!
//! Canonical JSON requires the digit layout produced by the ECMAScript
//! `Number::toString` algorithm: the shortest decimal digit sequence that
//! round-trips to the same double, printed in plain notation while the
//! decimal exponent stays within `(-7, 21]` and in exponential notation
//! (`1e+21`, `1e-7`) outside that range.
//!
//! The shortest digit sequence itself comes from the standard library's
//! scientific formatting, which emits the minimal digits that uniquely
//! identify the value; the layout rules on top of those digits live here.

use crate::error::CanonicalError;

/// Format a finite double as its unique canonical decimal text.
///
/// Negative zero formats as `"0"`. Integers within the plain-notation
/// range print without a fractional part or exponent; everything else uses
/// a lowercase `e` with an explicit exponent sign.
///
/// # Errors
///
/// Returns `CanonicalError::InvalidNumber` for NaN and ±Infinity. The
/// caller must sanitize non-finite values before canonicalizing.
///
/// # Example
///
/// ```rust
/// use jcs_canonical::format_number;
///
/// assert_eq!(format_number(1.0).unwrap(), "1");
/// assert_eq!(format_number(-0.0).unwrap(), "0");
/// assert_eq!(format_number(1e21).unwrap(), "1e+21");
/// assert!(format_number(f64::NAN).is_err());
/// ```
pub fn format_number(value: f64) -> Result<String, CanonicalError> {
    if !value.is_finite() {
        return Err(CanonicalError::InvalidNumber {
            path: String::new(),
        });
    }
    Ok(format_finite(value))
}

/// Lay out a finite double per the ECMAScript rules.
pub(crate) fn format_finite(value: f64) -> String {
    if value == 0.0 {
        // Covers negative zero as well.
        return "0".to_string();
    }

    // Shortest unique digits and decimal exponent, e.g.
    // -0.00012345 -> sign "-", digits "12345", exponent -4.
    let sci = format!("{:e}", value);
    let (mantissa, exp) = sci
        .split_once('e')
        .expect("scientific formatting always contains an exponent");
    let exp: i64 = exp.parse().expect("exponent is a decimal integer");
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|&c| c != '.').collect();

    // value = 0.<digits> * 10^n with k significant digits
    let k = digits.len() as i64;
    let n = exp + 1;

    let mut out = String::with_capacity(digits.len() + 8);
    out.push_str(sign);

    if k <= n && n <= 21 {
        // Integer, possibly with trailing zeros: 1230000
        out.push_str(&digits);
        for _ in 0..(n - k) {
            out.push('0');
        }
    } else if 0 < n && n <= 21 {
        // Decimal point inside the digits: 123.456
        out.push_str(&digits[..n as usize]);
        out.push('.');
        out.push_str(&digits[n as usize..]);
    } else if -6 < n && n <= 0 {
        // Zeros between the point and the digits: 0.000123
        out.push_str("0.");
        for _ in 0..(-n) {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        // Exponential notation: d.ddd e±x
        out.push_str(&digits[..1]);
        if k > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        let e = n - 1;
        if e >= 0 {
            out.push('+');
        }
        out.push_str(&e.to_string());
    }
    out
}
