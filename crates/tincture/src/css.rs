//! Numeric formatting for CSS color functions.
//!
//! CSS consumers expect the compact notation produced by C's `%g` and
//! `%.0f` conversions, e.g. `0.3` rather than `0.300000`.

/// Significant digits used by [`general`].
const PRECISION: i32 = 6;

/// Format a value like C's `%g`: six significant digits, trailing zeros
/// trimmed, exponent notation for exponents below -4 or from 6 upwards.
pub(crate) fn general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the target precision may bump the exponent (999999.5 -> 1e+06),
    // so take it from the rounded scientific form.
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Format a value like C's `%.0f` (ties round to even).
pub(crate) fn integral(value: f64) -> String {
    format!("{value:.0}")
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
