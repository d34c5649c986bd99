/// Fractional digits kept for percentage values
pub const DEFAULT_PERCENT_DIGITS: usize = 2;

/// Fractional digits kept for raw magnitudes
pub const DEFAULT_MAGNITUDE_DIGITS: usize = 3;

/// Kind of value being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Share of a reference total, rendered with a `%` suffix
    Percentage,
    /// Raw magnitude (time, samples, ...)
    Plain,
}

/// Fixed-precision, trimmed rendering of metric values.
///
/// Values are rounded to at most N fractional digits, ties away from zero,
/// then trailing zeros (and a dangling period) are dropped: `12.0` becomes
/// `12%`, `0.1234` becomes `0.123`. No digit grouping is applied and the
/// decimal separator is always a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricFormatter {
    percent_digits: usize,
    magnitude_digits: usize,
}

impl Default for MetricFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PERCENT_DIGITS, DEFAULT_MAGNITUDE_DIGITS)
    }
}

impl MetricFormatter {
    /// Create a formatter with explicit precision per kind
    #[must_use]
    pub const fn new(percent_digits: usize, magnitude_digits: usize) -> Self {
        Self {
            percent_digits,
            magnitude_digits,
        }
    }

    #[must_use]
    pub const fn percent_digits(&self) -> usize {
        self.percent_digits
    }

    #[must_use]
    pub const fn magnitude_digits(&self) -> usize {
        self.magnitude_digits
    }

    /// Render `value` as a display string.
    ///
    /// Negative and non-finite inputs are rendered as-is (`-1.5`, `NaN`,
    /// `inf`); this is a display helper, not a validator.
    #[must_use]
    pub fn format(&self, value: f64, kind: MetricKind) -> String {
        match kind {
            MetricKind::Percentage => {
                let mut out = fixed_trimmed(value, self.percent_digits);
                out.push('%');
                out
            }
            MetricKind::Plain => fixed_trimmed(value, self.magnitude_digits),
        }
    }
}

/// Format with the default precision (2 digits for percentages, 3 otherwise)
#[must_use]
pub fn format_metric(value: f64, kind: MetricKind) -> String {
    MetricFormatter::default().format(value, kind)
}

fn fixed_trimmed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut out = round_half_away(value, digits);
    if out.contains('.') {
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            out.pop();
        }
    }
    // -0.0001 rounds to "-0"
    if out == "-0" {
        out.remove(0);
    }
    out
}

/// Round the shortest decimal form of `value` to `digits` fractional digits,
/// ties away from zero: `0.125` becomes `0.13`, `-0.0625` becomes `-0.063`.
fn round_half_away(value: f64, digits: usize) -> String {
    // f64 Display never uses an exponent
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let sign = if value.is_sign_negative() { "-" } else { "" };

    if frac_part.len() <= digits {
        return format!("{sign}{repr}");
    }

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes()[digits] >= b'5' {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            int_len += 1;
        }
    }

    let (int_digits, frac_digits) = kept.split_at(int_len);
    let mut out = String::with_capacity(kept.len() + 2);
    out.push_str(sign);
    out.extend(int_digits.iter().map(|&b| char::from(b)));
    if !frac_digits.is_empty() {
        out.push('.');
        out.extend(frac_digits.iter().map(|&b| char::from(b)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fractional_digits(s: &str) -> usize {
        s.split_once('.').map_or(0, |(_, frac)| frac.len())
    }

    #[test]
    fn percentage_rounds_and_trims() {
        assert_eq!(format_metric(12.0, MetricKind::Percentage), "12%");
        assert_eq!(format_metric(12.345, MetricKind::Percentage), "12.35%");
        assert_eq!(format_metric(3.0, MetricKind::Percentage), "3%");
        assert_eq!(format_metric(0.5, MetricKind::Percentage), "0.5%");
        assert_eq!(format_metric(100.0, MetricKind::Percentage), "100%");
    }

    #[test]
    fn plain_rounds_and_trims() {
        assert_eq!(format_metric(0.1, MetricKind::Plain), "0.1");
        assert_eq!(format_metric(0.1234, MetricKind::Plain), "0.123");
        assert_eq!(format_metric(0.4567, MetricKind::Plain), "0.457");
        assert_eq!(format_metric(250.0, MetricKind::Plain), "250");
        assert_eq!(format_metric(0.0, MetricKind::Plain), "0");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_metric(0.125, MetricKind::Percentage), "0.13%");
        assert_eq!(format_metric(12.125, MetricKind::Percentage), "12.13%");
        assert_eq!(format_metric(1.005, MetricKind::Percentage), "1.01%");
        assert_eq!(format_metric(0.0625, MetricKind::Plain), "0.063");
        assert_eq!(format_metric(0.1875, MetricKind::Plain), "0.188");
        assert_eq!(format_metric(-0.125, MetricKind::Percentage), "-0.13%");
    }

    #[test]
    fn rounding_carries_into_integer_part() {
        assert_eq!(format_metric(99.995, MetricKind::Percentage), "100%");
        assert_eq!(format_metric(9.9996, MetricKind::Plain), "10");
        assert_eq!(MetricFormatter::new(0, 3).format(0.5, MetricKind::Percentage), "1%");
    }

    #[test]
    fn no_digit_grouping() {
        assert_eq!(format_metric(1_234_567.5, MetricKind::Plain), "1234567.5");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_metric(-1.5, MetricKind::Plain), "-1.5");
        assert_eq!(format_metric(-12.345, MetricKind::Percentage), "-12.35%");
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(format_metric(-0.0, MetricKind::Plain), "0");
        assert_eq!(format_metric(-0.0001, MetricKind::Plain), "0");
        assert_eq!(format_metric(-0.001, MetricKind::Percentage), "0%");
    }

    #[test]
    fn non_finite_values_render_literally() {
        assert_eq!(format_metric(f64::NAN, MetricKind::Plain), "NaN");
        assert_eq!(format_metric(f64::INFINITY, MetricKind::Percentage), "inf%");
        assert_eq!(format_metric(f64::NEG_INFINITY, MetricKind::Plain), "-inf");
    }

    #[test]
    fn custom_precision() {
        let formatter = MetricFormatter::new(0, 1);
        assert_eq!(formatter.format(12.6, MetricKind::Percentage), "13%");
        assert_eq!(formatter.format(0.1234, MetricKind::Plain), "0.1");
    }

    proptest! {
        #[test]
        fn proptest_percentage_has_suffix_and_two_digits(value in 0.0f64..1.0e9) {
            let out = format_metric(value, MetricKind::Percentage);
            prop_assert!(out.ends_with('%'));
            let number = out.trim_end_matches('%');
            prop_assert!(fractional_digits(number) <= 2);
            prop_assert!(!number.ends_with('.'));
        }

        #[test]
        fn proptest_plain_has_at_most_three_digits(value in 0.0f64..1.0e9) {
            let out = format_metric(value, MetricKind::Plain);
            prop_assert!(fractional_digits(&out) <= 3);
            prop_assert!(!out.contains(','));
            if out.contains('.') {
                prop_assert!(!out.ends_with('0'));
            }
        }
    }
}
