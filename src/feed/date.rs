use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display format for publication dates, e.g. `20 September 2025`.
const DISPLAY_FORMAT: &str = "%d %B %Y";

/// Layouts tried on `day month year time` once the weekday and zone are gone.
/// `%B` also accepts abbreviated month names when parsing.
const LENIENT_FORMATS: [&str; 2] = ["%d %B %Y %H:%M:%S", "%d %B %Y %H:%M"];

/// Outcome of normalizing an item's `pubDate`.
///
/// A date that cannot be parsed is not an error: the raw string is kept so the
/// article still shows whatever the feed published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PubDate {
    /// Parsed date reformatted for display.
    Formatted(String),
    /// Source string, verbatim, because it did not parse.
    Raw(String),
}

impl PubDate {
    /// The text to show on the page.
    pub fn as_str(&self) -> &str {
        match self {
            PubDate::Formatted(s) | PubDate::Raw(s) => s,
        }
    }
}

/// Parse an RSS `pubDate` and reformat it as `DD Month YYYY`.
///
/// Strict RFC 2822 is tried first. Dates real feeds get slightly wrong (a
/// weekday that does not match, a full weekday or month name, a missing or
/// non-standard zone such as `CEST`) are then read leniently from their
/// `day month year time` part.
///
/// The date is shown in the timezone it was published in; no conversion to
/// local time or UTC happens. Any failure, including an empty string, yields
/// [`PubDate::Raw`] holding `raw` unmodified.
pub fn normalize_date(raw: &str) -> PubDate {
    let trimmed = raw.trim();
    let parsed = DateTime::parse_from_rfc2822(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
        .or_else(|| parse_lenient(trimmed));

    match parsed {
        Some(date) => PubDate::Formatted(date.format(DISPLAY_FORMAT).to_string()),
        None => {
            tracing::debug!(raw = %raw, "Unparseable pubDate, keeping raw value");
            PubDate::Raw(raw.to_string())
        }
    }
}

/// Reads `[Weekday,] day month year time [zone]`, ignoring the weekday and zone.
fn parse_lenient(s: &str) -> Option<NaiveDate> {
    let mut tokens: Vec<&str> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens
        .first()
        .is_some_and(|t| t.chars().all(char::is_alphabetic))
    {
        tokens.remove(0);
    }
    if !(4..=5).contains(&tokens.len()) {
        return None;
    }

    let stamp = tokens[..4].join(" ");
    LENIENT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&stamp, fmt).ok())
        .map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc2822_with_weekday() {
        assert_eq!(
            normalize_date("Sat, 20 Sep 2025 08:15:00 +0000"),
            PubDate::Formatted("20 September 2025".into())
        );
    }

    #[test]
    fn test_rfc2822_named_zone_and_single_digit_day() {
        assert_eq!(
            normalize_date("Thu, 4 Sep 2025 23:30:00 GMT"),
            PubDate::Formatted("04 September 2025".into())
        );
    }

    #[test]
    fn test_keeps_publisher_timezone() {
        // 23:30 at -0500 is already the next day in UTC.
        assert_eq!(
            normalize_date("Tue, 30 Sep 2025 23:30:00 -0500").as_str(),
            "30 September 2025"
        );
    }

    #[test]
    fn test_surrounding_whitespace_still_parses() {
        assert_eq!(
            normalize_date("\n  Mon, 01 Dec 2025 10:00:00 +0100  "),
            PubDate::Formatted("01 December 2025".into())
        );
    }

    #[test]
    fn test_wrong_weekday_still_formats() {
        // 20 Sep 2025 is a Saturday.
        assert_eq!(
            normalize_date("Fri, 20 Sep 2025 08:15:00 +0000"),
            PubDate::Formatted("20 September 2025".into())
        );
    }

    #[test]
    fn test_non_standard_zone_name() {
        assert_eq!(
            normalize_date("Sat, 20 Sep 2025 08:15:00 CEST").as_str(),
            "20 September 2025"
        );
    }

    #[test]
    fn test_missing_zone() {
        assert_eq!(
            normalize_date("Sat, 20 Sep 2025 08:15:00").as_str(),
            "20 September 2025"
        );
    }

    #[test]
    fn test_full_weekday_name() {
        assert_eq!(
            normalize_date("Saturday, 20 Sep 2025 08:15:00 +0000").as_str(),
            "20 September 2025"
        );
    }

    #[test]
    fn test_full_month_name() {
        assert_eq!(
            normalize_date("Sat, 20 September 2025 08:15:00 +0000").as_str(),
            "20 September 2025"
        );
    }

    #[test]
    fn test_no_weekday_and_no_seconds() {
        assert_eq!(
            normalize_date("4 Sep 2025 09:30 GMT").as_str(),
            "04 September 2025"
        );
    }

    #[test]
    fn test_date_without_time_stays_raw() {
        assert_eq!(normalize_date("20 Sep 2025"), PubDate::Raw("20 Sep 2025".into()));
    }

    #[test]
    fn test_impossible_day_stays_raw() {
        let raw = "Tue, 31 Sep 2025 08:15:00 +0000";
        assert_eq!(normalize_date(raw), PubDate::Raw(raw.into()));
    }

    #[test]
    fn test_garbage_falls_back_to_raw() {
        assert_eq!(normalize_date("not-a-date"), PubDate::Raw("not-a-date".into()));
    }

    #[test]
    fn test_iso8601_is_not_rfc2822() {
        let raw = "2025-09-20T08:15:00Z";
        assert_eq!(normalize_date(raw), PubDate::Raw(raw.into()));
    }

    #[test]
    fn test_empty_falls_back_to_empty_raw() {
        assert_eq!(normalize_date(""), PubDate::Raw(String::new()));
    }

    #[test]
    fn test_raw_is_verbatim_including_whitespace() {
        let raw = "  sometime last week ";
        assert_eq!(normalize_date(raw).as_str(), raw);
    }
}
