//! Rational approximation of decimal amounts.
//!
//! Quantities are stored as `f64`. For display they are approximated by the
//! closest fraction whose denominator does not exceed
//! [`MAX_FRACTION_DENOMINATOR`], then written the way a recipe card would
//! write them: `"1½"`, `"⅓"`, `"2 3/16"`.

use crate::constants::MAX_FRACTION_DENOMINATOR;

const UNICODE_FRACTIONS: &[(i64, i64, &str)] = &[
    (1, 2, "½"),
    (1, 3, "⅓"),
    (2, 3, "⅔"),
    (1, 4, "¼"),
    (3, 4, "¾"),
    (1, 5, "⅕"),
    (2, 5, "⅖"),
    (3, 5, "⅗"),
    (4, 5, "⅘"),
    (1, 6, "⅙"),
    (5, 6, "⅚"),
    (1, 8, "⅛"),
    (3, 8, "⅜"),
    (5, 8, "⅝"),
    (7, 8, "⅞"),
];

/// Closest fraction `numerator / denominator` to `value` with
/// `1 <= denominator <= max_denominator`.
///
/// Walks the continued fraction expansion and picks between the last
/// convergent and the best semiconvergent, so the result is the best
/// approximation under the bound. Non-finite input yields `0/1`.
#[must_use]
pub fn approximate(value: f64, max_denominator: i64) -> (i64, i64) {
    if !value.is_finite() || max_denominator < 1 {
        return (0, 1);
    }
    if value < 0.0 {
        let (n, d) = approximate(-value, max_denominator);
        return (-n, d);
    }

    let (mut p0, mut q0, mut p1, mut q1) = (0_i64, 1_i64, 1_i64, 0_i64);
    let mut x = value;
    let mut bounded = false;

    loop {
        let a = x.floor();
        let q2 = q0 as f64 + a * q1 as f64;
        if q2 > max_denominator as f64 {
            bounded = true;
            break;
        }
        let a = a as i64;
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2 as i64);

        let remainder = x - a as f64;
        if remainder < 1e-12 {
            break;
        }
        x = 1.0 / remainder;
    }

    if !bounded || q1 == 0 {
        return (p1, q1.max(1));
    }

    let k = (max_denominator - q0) / q1;
    let (semi_p, semi_q) = (p0 + k * p1, q0 + k * q1);
    let semi_error = (semi_p as f64 / semi_q as f64 - value).abs();
    let convergent_error = (p1 as f64 / q1 as f64 - value).abs();
    if convergent_error <= semi_error {
        (p1, q1)
    } else {
        (semi_p, semi_q)
    }
}

/// Format an amount as a mixed number with unicode glyphs where available.
///
/// ```rust
/// use recipe_cost::fraction::format_amount;
///
/// assert_eq!(format_amount(1.5), "1½");
/// assert_eq!(format_amount(0.3333), "⅓");
/// assert_eq!(format_amount(2.0), "2");
/// assert_eq!(format_amount(2.1875), "2 3/16");
/// ```
#[must_use]
pub fn format_amount(value: f64) -> String {
    let (numerator, denominator) = approximate(value, MAX_FRACTION_DENOMINATOR);
    if numerator == 0 {
        return "0".to_string();
    }

    let sign = if numerator < 0 { "-" } else { "" };
    let numerator = numerator.abs();
    let whole = numerator / denominator;
    let remainder = numerator % denominator;

    let glyph = UNICODE_FRACTIONS
        .iter()
        .find(|(n, d, _)| *n == remainder && *d == denominator)
        .map(|(_, _, glyph)| *glyph);

    let text = match (whole, remainder, glyph) {
        (w, 0, _) => w.to_string(),
        (0, _, Some(glyph)) => glyph.to_string(),
        (0, r, None) => format!("{r}/{denominator}"),
        (w, _, Some(glyph)) => format!("{w}{glyph}"),
        (w, r, None) => format!("{w} {r}/{denominator}"),
    };
    format!("{sign}{text}")
}

/// Label of a scale multiplier: `"1x"`, `"1_2x"`, `"3_2x"`.
#[must_use]
pub fn scale_label(multiplier: f64) -> String {
    let (numerator, denominator) = approximate(multiplier, MAX_FRACTION_DENOMINATOR);
    if denominator == 1 {
        format!("{numerator}x")
    } else {
        format!("{numerator}_{denominator}x")
    }
}
