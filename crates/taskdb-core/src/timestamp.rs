//! Conversion between stored timestamps and human-friendly display text.
//!
//! Timestamps are stored as plain text in the canonical form
//! `YYYY-MM-DDTHH:MM:SS` (local wall-clock time, no offset). Everything in
//! this module is pure apart from [`now`], and nothing here returns an error
//! to the caller: text that does not parse is shown as-is.
//!
//! # Examples
//!
//! ```rust
//! use taskdb_core::timestamp::format_display;
//!
//! assert_eq!(
//!     format_display("2025-10-17T17:00:00"),
//!     "17th October 2025, Friday, 5 pm"
//! );
//! assert_eq!(
//!     format_display("2025-10-17T17:07:00"),
//!     "17th October 2025, Friday, 5:07 pm"
//! );
//! assert_eq!(format_display(""), "—");
//! assert_eq!(format_display("next week"), "next week");
//! ```

use jiff::{
    civil::{Date, DateTime, Time},
    tz::TimeZone,
    Timestamp, Zoned,
};

/// Shown in place of an empty timestamp.
pub const PLACEHOLDER: &str = "—";

/// strftime pattern of the stored form.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses stored timestamp text into a civil date-time.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS[.fff]]`, the same with a space separator,
/// a trailing offset or `Z` (the wall-clock reading is kept, `Z` as UTC), and
/// a bare `YYYY-MM-DD` (taken as midnight). Returns `None` for anything else,
/// including empty text.
pub fn parse(text: &str) -> Option<DateTime> {
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = text.parse::<DateTime>() {
        return Some(dt);
    }
    if let Ok(ts) = text.parse::<Timestamp>() {
        return Some(ts.to_zoned(TimeZone::UTC).datetime());
    }
    text.parse::<Date>().ok().map(|date| date.to_datetime(Time::midnight()))
}

/// Renders a date-time in the stored form. Sub-second precision is dropped.
pub fn canonical(dt: DateTime) -> String {
    dt.strftime(CANONICAL_FORMAT).to_string()
}

/// Returns the current local instant in the stored form.
pub fn now() -> String {
    canonical(Zoned::now().datetime())
}

/// Merges an independently chosen calendar date and time of day into the
/// stored form.
pub fn combine(date: Date, time: Time) -> String {
    canonical(date.to_datetime(time))
}

/// English ordinal for a day of the month: `1st`, `2nd`, `11th`, `23rd`.
pub fn ordinal(n: u32) -> String {
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{n}{suffix}")
}

/// Formats stored timestamp text for display.
///
/// Produces `17th October 2025, Friday, 5 pm`, or `5:07 pm` when the minute
/// is non-zero. Empty input yields [`PLACEHOLDER`]; input that does not parse
/// is returned unchanged.
pub fn format_display(text: &str) -> String {
    if text.is_empty() {
        return PLACEHOLDER.to_string();
    }
    match parse(text) {
        Some(dt) => friendly(dt),
        None => text.to_string(),
    }
}

fn friendly(dt: DateTime) -> String {
    let hour = dt.hour();
    let meridiem = if hour < 12 { "am" } else { "pm" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    let clock = match dt.minute() {
        0 => format!("{hour12} {meridiem}"),
        minute => format!("{hour12}:{minute:02} {meridiem}"),
    };
    // day() is always 1..=31
    let day = u32::try_from(dt.day()).unwrap_or_default();
    format!(
        "{} {}, {}",
        ordinal(day),
        dt.strftime("%B %Y, %A"),
        clock
    )
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    #[test]
    fn test_ordinal_suffixes() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (30, "30th"),
            (31, "31st"),
            (111, "111th"),
            (101, "101st"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal(n), expected, "ordinal({n})");
        }
    }

    #[test]
    fn test_format_display_day_suffixes() {
        let days = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
        ];
        for (day, suffix) in days {
            let text = format!("2025-10-{day:02}T09:00:00");
            let shown = format_display(&text);
            assert!(
                shown.starts_with(&format!("{day}{suffix} October 2025")),
                "{text} rendered as {shown}"
            );
        }
    }

    #[test]
    fn test_minute_zero_is_elided() {
        assert_eq!(
            format_display("2025-10-17T17:00:00"),
            "17th October 2025, Friday, 5 pm"
        );
        assert_eq!(
            format_display("2025-10-17T17:07:00"),
            "17th October 2025, Friday, 5:07 pm"
        );
    }

    #[test]
    fn test_noon_and_midnight_use_twelve() {
        assert_eq!(
            format_display("2025-10-17T00:00:00"),
            "17th October 2025, Friday, 12 am"
        );
        assert_eq!(
            format_display("2025-10-17T12:30:00"),
            "17th October 2025, Friday, 12:30 pm"
        );
        assert_eq!(
            format_display("2025-01-01T09:05:00"),
            "1st January 2025, Wednesday, 9:05 am"
        );
    }

    #[test]
    fn test_placeholder_and_passthrough() {
        assert_eq!(format_display(""), "—");
        assert_eq!(format_display("tomorrow-ish"), "tomorrow-ish");
        assert_eq!(format_display("2025-13-40T99:00:00"), "2025-13-40T99:00:00");
        assert_eq!(format_display(" "), " ");
    }

    #[test]
    fn test_lenient_input_shapes() {
        assert_eq!(
            format_display("2025-10-17 17:00"),
            "17th October 2025, Friday, 5 pm"
        );
        assert_eq!(
            format_display("2025-10-17"),
            "17th October 2025, Friday, 12 am"
        );
        assert_eq!(
            format_display("2025-10-17T17:00:00Z"),
            "17th October 2025, Friday, 5 pm"
        );
        assert_eq!(
            format_display("2025-10-17T17:07:00+05:30"),
            "17th October 2025, Friday, 5:07 pm"
        );
    }

    #[test]
    fn test_combine_produces_canonical_text() {
        let combined = combine(date(2025, 10, 17), time(17, 7, 0, 0));
        assert_eq!(combined, "2025-10-17T17:07:00");

        let with_subsec = combine(date(2025, 3, 4), time(8, 0, 5, 123_000_000));
        assert_eq!(with_subsec, "2025-03-04T08:00:05");
    }

    #[test]
    fn test_now_is_canonical_and_parseable() {
        let stamp = now();
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[10..11], "T");
        let parsed = parse(&stamp).expect("now() should parse back");
        assert_eq!(canonical(parsed), stamp);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(parse("").is_none());
    }
}
