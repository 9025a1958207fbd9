use js_sys::Date;
use shared::month_name;

/// Current date in YYYY-MM-DD format.
pub fn current_date() -> String {
    let now = Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

pub fn current_year() -> i32 {
    Date::new_0().get_full_year() as i32
}

pub fn current_month() -> u32 {
    // JavaScript months are 0-indexed
    Date::new_0().get_month() + 1
}

/// Years offered by the month filters: two back through two ahead.
pub fn year_options() -> Vec<i32> {
    let year = current_year();
    (year - 2..=year + 2).collect()
}

/// "June 19, 2025" style rendering of a YYYY-MM-DD date string.
pub fn format_date_for_display(date_str: &str) -> String {
    if let Some((year, month, day)) = parse_date_string(date_str) {
        format!("{} {}, {}", month_name(month), day, year)
    } else {
        date_str.to_string()
    }
}

/// Display form for server timestamps ("2025-06-19T08:00:00"): the date part
/// rendered as above, with the clock time kept when present.
pub fn format_timestamp(raw: &str) -> String {
    let mut parts = raw.splitn(2, 'T');
    let date_part = parts.next().unwrap_or(raw);
    let formatted = format_date_for_display(date_part);
    match parts.next() {
        Some(time) => {
            let clock: String = time.chars().take(5).collect();
            format!("{} {}", formatted, clock)
        }
        None => formatted,
    }
}

/// Parse YYYY-MM-DD into components.
pub fn parse_date_string(date_str: &str) -> Option<(u32, u32, u32)> {
    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let year = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let day = parts[2].parse::<u32>().ok()?;

    if (1..=12).contains(&month) && (1..=31).contains(&day) {
        Some((year, month, day))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date_string("2025-06-19"), Some((2025, 6, 19)));
        assert_eq!(parse_date_string("2025-13-01"), None);
        assert_eq!(parse_date_string("2025-06"), None);
        assert_eq!(parse_date_string("not-a-date"), None);
    }

    #[test]
    fn formats_dates_and_timestamps() {
        assert_eq!(format_date_for_display("2025-06-19"), "June 19, 2025");
        assert_eq!(format_date_for_display("garbage"), "garbage");
        assert_eq!(
            format_timestamp("2025-06-19T08:05:00"),
            "June 19, 2025 08:05"
        );
        assert_eq!(format_timestamp("2025-06-19"), "June 19, 2025");
    }
}
