//! Display formatting for raw snapshot values
//!
//! Each formatter pins the placeholder its dashboard field historically used
//! ("0.00" for currency-like amounts, "-" elsewhere). The placeholders are
//! intentionally not unified across fields.

use chrono::{TimeZone, Utc};

/// Currency-like amount, 2 decimal places. Missing -> "0.00".
pub fn amount(v: Option<f64>) -> String {
    match v {
        Some(n) if n.is_finite() => format!("{:.2}", n),
        _ => "0.00".to_string(),
    }
}

/// Edge metric, 4 decimal places. Missing -> "-".
pub fn edge(v: Option<f64>) -> String {
    match v {
        Some(n) if n.is_finite() => format!("{:.4}", n),
        _ => "-".to_string(),
    }
}

/// Percentage, 1 decimal place with a trailing %. Missing -> "-".
pub fn percent(v: Option<f64>) -> String {
    match v {
        Some(n) if n.is_finite() => format!("{:.1}%", n),
        _ => "-".to_string(),
    }
}

/// Unix-epoch seconds to a UTC date string. Zero/invalid -> "-".
pub fn unix_date(ts: i64) -> String {
    if ts <= 0 {
        return "-".to_string();
    }
    match Utc.timestamp_opt(ts, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Final path segment of a platform-separated path.
///
/// The agent records artifact paths with whatever separator its host uses, so
/// both `\` and `/` are treated as separators here.
pub fn file_name(path: &str) -> String {
    path.rsplit(['\\', '/']).next().unwrap_or(path).to_string()
}

/// Join an artifact filename onto a relative base directory.
pub fn artifact_link(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), file_name(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_rounding_and_placeholder() {
        assert_eq!(amount(Some(12.345)), "12.35");
        assert_eq!(amount(Some(0.0)), "0.00");
        assert_eq!(amount(None), "0.00");
        assert_eq!(amount(Some(f64::NAN)), "0.00");
    }

    #[test]
    fn test_edge_four_decimals() {
        assert_eq!(edge(Some(0.123456)), "0.1235");
        assert_eq!(edge(Some(-0.2)), "-0.2000");
        assert_eq!(edge(None), "-");
    }

    #[test]
    fn test_percent_one_decimal() {
        assert_eq!(percent(Some(33.333)), "33.3%");
        assert_eq!(percent(Some(0.0)), "0.0%");
        assert_eq!(percent(None), "-");
    }

    #[test]
    fn test_unix_date() {
        assert_eq!(unix_date(1700000000), "2023-11-14 22:13");
        assert_eq!(unix_date(0), "-");
        assert_eq!(unix_date(-5), "-");
    }

    #[test]
    fn test_file_name_windows_separators() {
        assert_eq!(file_name("a\\b\\c.md"), "c.md");
        assert_eq!(file_name("outbox/post.md"), "post.md");
        assert_eq!(file_name("mixed\\dir/img.png"), "img.png");
        assert_eq!(file_name("bare.md"), "bare.md");
    }

    #[test]
    fn test_artifact_link() {
        assert_eq!(artifact_link("../outbox", "a\\b\\c.md"), "../outbox/c.md");
        assert_eq!(artifact_link("../outbox/", "x/y.png"), "../outbox/y.png");
    }
}
