use chrono::{DateTime, Utc};

pub(crate) const FINISHED_AT_FORMAT: &str = "%d.%m.%Y %H:%M";

/// `DD.MM.YYYY HH:mm`, or `N/A` for a missing timestamp.
pub fn format_finished_at(at: Option<DateTime<Utc>>) -> String {
    at.map(|at| at.format(FINISHED_AT_FORMAT).to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn format_ratio(value: f64) -> String {
    format!("{value:.2}")
}

/// Render a `0.0..=1.0` fraction as a percentage with two decimals.
pub fn format_fraction_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::at;

    #[test]
    fn test_format_finished_at() {
        assert_eq!(format_finished_at(at(3, 7)), "03.09.2024 07:00");
        assert_eq!(format_finished_at(None), "N/A");
    }

    #[test]
    fn test_format_numbers() {
        assert_eq!(format_ratio(1.0 / 3.0), "0.33");
        assert_eq!(format_fraction_percent(0.2125), "21.25%");
        assert_eq!(format_fraction_percent(2.0 / 3.0), "66.67%");
    }
}
