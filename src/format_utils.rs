use js_sys::Date;
use wasm_bindgen::JsValue;

use crate::domain::shares::SECONDS_PER_DAY;

/// Countdown label for a locked package.
///
/// - days left    -> `Dd Hh Mm`
/// - hours left   -> `Hh Mm Ss`
/// - minutes left -> `Mm Ss`
/// - otherwise    -> `Ss`
pub fn format_time_remaining(seconds: u64) -> String {
    let days = seconds / SECONDS_PER_DAY;
    let hours = (seconds % SECONDS_PER_DAY) / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Two-decimal dollar figure, e.g. `$1.30`.
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}

/// Thousands-separated number with up to three fraction digits and no
/// trailing zeros: `15420.5 -> 15,420.5`, `1250 -> 1,250`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

/// Local calendar date as `M/D/YYYY`.
pub fn format_short_date(timestamp: u64) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp as f64));
    format!("{}/{}/{}", date.get_month() + 1, date.get_date(), date.get_full_year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_picks_the_largest_unit() {
        assert_eq!(format_time_remaining(4 * SECONDS_PER_DAY + 3 * 3600 + 120), "4d 3h 2m");
        assert_eq!(format_time_remaining(3600 + 61), "1h 1m 1s");
        assert_eq!(format_time_remaining(125), "2m 5s");
        assert_eq!(format_time_remaining(9), "9s");
        assert_eq!(format_time_remaining(0), "0s");
    }

    #[test]
    fn grouping_matches_dashboard_figures() {
        assert_eq!(format_grouped(19275.63), "19,275.63");
        assert_eq!(format_grouped(15420.5), "15,420.5");
        assert_eq!(format_grouped(1250.0), "1,250");
        assert_eq!(format_grouped(12.0), "12");
        assert_eq!(format_grouped(1_000_000.0), "1,000,000");
        assert_eq!(format_grouped(-4275.63), "-4,275.63");
        assert_eq!(format_grouped(-0.0001), "0");
    }

    #[test]
    fn usd_keeps_two_decimals() {
        assert_eq!(format_usd(1.3), "$1.30");
        assert_eq!(format_usd(1250.5), "$1250.50");
    }
}
