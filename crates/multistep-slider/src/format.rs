//! Short labels for slider values.

const UNITS: [(f64, &str); 3] = [(1.0e3, "K"), (1.0e6, "M"), (1.0e9, "B")];

/// Abbreviate a value with a K/M/B suffix.
///
/// Values up to one thousand print as whole numbers. Larger values use the
/// biggest unit not exceeding them, with one decimal and a trailing `.0`
/// dropped. A value that rounds up to a thousand of its unit moves to the
/// next unit.
///
/// ```
/// use multistep_slider::abbreviate;
///
/// assert_eq!(abbreviate(50_000.0), "50K");
/// assert_eq!(abbreviate(1_500_000.0), "1.5M");
/// assert_eq!(abbreviate(999_999.0), "1M");
/// assert_eq!(abbreviate(1_000.0), "1000");
/// ```
#[must_use]
pub fn abbreviate(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude.is_nan() || magnitude <= 1.0e3 {
        return format!("{value:.0}");
    }

    let mut unit = UNITS
        .iter()
        .rposition(|(scale, _)| magnitude >= *scale)
        .unwrap_or(0);
    let mut scaled = round_tenths(value / UNITS[unit].0);
    while scaled.abs() >= 1.0e3 && unit + 1 < UNITS.len() {
        unit += 1;
        scaled = round_tenths(value / UNITS[unit].0);
    }

    let text = format!("{scaled:.1}");
    let digits = text.strip_suffix(".0").unwrap_or(&text);
    format!("{digits}{}", UNITS[unit].1)
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
