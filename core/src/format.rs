//! Stateless display helpers shared by the chart renderers and the CLI.

/// Currency symbol of the single supported locale.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format a duration given in hours as a compact human string:
/// under an hour as minutes, under a day as hours (+ leftover minutes),
/// otherwise days (+ leftover hours). Zero remainders are omitted.
pub fn format_duration(hours: f64) -> String {
    if hours < 1.0 {
        let minutes = (hours * 60.0).floor() as u64;
        format!("{}m", minutes)
    } else if hours < 24.0 {
        let h = hours.floor();
        let m = ((hours - h) * 60.0).floor() as u64;
        if m > 0 {
            format!("{}h {}m", h as u64, m)
        } else {
            format!("{}h", h as u64)
        }
    } else {
        let days = (hours / 24.0).floor() as u64;
        let h = (hours % 24.0).floor() as u64;
        if h > 0 {
            format!("{}d {}h", days, h)
        } else {
            format!("{}d", days)
        }
    }
}

/// Currency with two decimals, used in chart detail lines.
pub fn format_currency(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

/// Currency rounded to whole units, used for axis ticks.
pub fn format_axis_amount(amount: f64) -> String {
    format!("{}{:.0}", CURRENCY_SYMBOL, amount)
}

/// Share of `value` in `total` as a percentage. A zero total yields 0 rather
/// than dividing; zero-data charts take the empty-state path before this is
/// ever reached, but the helper must be safe on its own.
pub fn percentage_of(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_under_an_hour_is_minutes() {
        assert_eq!(format_duration(0.5), "30m");
        assert_eq!(format_duration(0.0), "0m");
    }

    #[test]
    fn duration_under_a_day_is_hours_and_minutes() {
        assert_eq!(format_duration(1.5), "1h 30m");
        assert_eq!(format_duration(2.0), "2h");
        assert_eq!(format_duration(23.0), "23h");
    }

    #[test]
    fn duration_over_a_day_is_days_and_hours() {
        assert_eq!(format_duration(25.0), "1d 1h");
        assert_eq!(format_duration(48.0), "2d");
    }

    #[test]
    fn currency_precision() {
        assert_eq!(format_currency(75.25), "₹75.25");
        assert_eq!(format_currency(150.0), "₹150.00");
        assert_eq!(format_axis_amount(150.5), "₹150");
    }

    #[test]
    fn percentage_never_divides_by_zero() {
        assert_eq!(percentage_of(3.0, 10.0), 30.0);
        assert_eq!(percentage_of(5.0, 0.0), 0.0);
    }
}
