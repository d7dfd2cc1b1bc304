use serde::{Deserialize, Serialize};

/// How chart values are written in labels and ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// Thousands separators, up to three fraction digits (`1,234.5`).
    #[default]
    Grouped,
    /// Exactly one fraction digit, no separators (`1234.5`).
    Fixed,
}

impl NumberFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            NumberFormat::Grouped => grouped(value),
            NumberFormat::Fixed => format!("{value:.1}"),
        }
    }

    /// d3-format string handed to Plotly for axis ticks.
    pub fn tick_format(self) -> &'static str {
        match self {
            NumberFormat::Grouped => ",.3~f",
            NumberFormat::Fixed => ".1f",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "grouped" => Some(NumberFormat::Grouped),
            "fixed" => Some(NumberFormat::Fixed),
            _ => None,
        }
    }
}

/// Percentage label with one decimal, e.g. `25.0%`.
pub fn percent_label(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        let f = NumberFormat::Grouped;
        assert_eq!(f.format(0.0), "0");
        assert_eq!(f.format(999.0), "999");
        assert_eq!(f.format(1000.0), "1,000");
        assert_eq!(f.format(1234567.891), "1,234,567.891");
        assert_eq!(f.format(1234.5), "1,234.5");
        assert_eq!(f.format(0.12345), "0.123");
        assert_eq!(f.format(-45210.75), "-45,210.75");
        assert_eq!(f.format(-0.0001), "0");
    }

    #[test]
    fn test_fixed() {
        let f = NumberFormat::Fixed;
        assert_eq!(f.format(1234.56), "1234.6");
        assert_eq!(f.format(7.0), "7.0");
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(33.333), "33.3%");
        assert_eq!(percent_label(10.0), "10.0%");
    }
}
