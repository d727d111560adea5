//! Parsing and formatting of transaction dates.
//!
//! The remote API sends dates as free-form strings. Three shapes are accepted,
//! tried in order:
//!
//! 1. RFC 3339 with an offset, e.g. `2024-02-01T10:30:00Z`.
//! 2. A naive date-time, `2024-02-01T10:30:00` or `2024-02-01 10:30:00`,
//!    optionally with fractional seconds, or without seconds at all
//!    (`2024-02-01T10:30`). Interpreted as UTC.
//! 3. A bare date, `2024-02-01`. Interpreted as UTC midnight.
//!
//! A JSON number is read as milliseconds since the Unix epoch. Anything else,
//! `null` included, is kept as [`TxDate::Invalid`] so that a single bad row
//! never prevents the rest of the list from rendering.

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::Datelike;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// The date of a transaction as received from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxDate {
    /// A successfully parsed instant.
    Valid(DateTime<Utc>),
    /// The raw text of a date that matched none of the accepted formats.
    Invalid(String),
}

impl TxDate {
    /// Parses `s` according to the accepted formats listed in the module docs.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::Valid(dt.with_timezone(&Utc));
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Self::Valid(naive.and_utc());
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Self::Valid(midnight.and_utc());
            }
        }

        Self::Invalid(s.to_string())
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Valid(dt) => Some(*dt),
            Self::Invalid(_) => None,
        }
    }

    /// Orders two dates so that the most recent comes first.
    ///
    /// Invalid dates compare greater than every valid date, so they land at the
    /// end of a newest-first list. Two invalid dates compare equal, which keeps
    /// their input order under a stable sort.
    pub fn cmp_newest_first(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Valid(a), Self::Valid(b)) => b.cmp(a),
            (Self::Valid(_), Self::Invalid(_)) => Ordering::Less,
            (Self::Invalid(_), Self::Valid(_)) => Ordering::Greater,
            (Self::Invalid(_), Self::Invalid(_)) => Ordering::Equal,
        }
    }

    /// Formats as `DD Mon YYYY`, e.g. `01 Feb 2024`.
    pub fn to_day_month_year(&self) -> String {
        match self {
            Self::Valid(dt) => format!(
                "{:02} {} {}",
                dt.day(),
                MONTHS[dt.month0() as usize],
                dt.year()
            ),
            Self::Invalid(_) => self.to_string(),
        }
    }

    /// Formats as a short en-US date, `M/D/YYYY`.
    pub fn to_short_date(&self) -> String {
        match self {
            Self::Valid(dt) => format!("{}/{}/{}", dt.month(), dt.day(), dt.year()),
            Self::Invalid(_) => self.to_string(),
        }
    }
}

impl Default for TxDate {
    fn default() -> Self {
        Self::Invalid(String::new())
    }
}

impl From<String> for TxDate {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for TxDate {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for TxDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Self::parse(&s),
            Value::Number(n) => n
                .as_i64()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(Self::Valid)
                .unwrap_or_else(|| Self::Invalid(n.to_string())),
            other => Self::Invalid(other.to_string()),
        })
    }
}

impl fmt::Display for TxDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::Invalid(_) => write!(f, "Invalid Date"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_bare_date_as_utc_midnight() {
        let date = TxDate::parse("2024-02-01");
        assert_eq!(
            date.instant(),
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let date = TxDate::parse("2024-02-01T10:30:00+02:00");
        assert_eq!(
            date.instant(),
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn parses_naive_datetime_both_separators() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 5, 14, 0, 9).unwrap();
        assert_eq!(TxDate::parse("2024-03-05T14:00:09").instant(), Some(expected));

        let with_fraction = TxDate::parse("2024-03-05 14:00:09.250").instant().unwrap();
        assert_eq!(with_fraction.timestamp(), expected.timestamp());
        assert_eq!(with_fraction.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn parses_naive_datetime_without_seconds() {
        let expected = Utc.with_ymd_and_hms(2024, 2, 1, 10, 30, 0).unwrap();
        assert_eq!(TxDate::parse("2024-02-01T10:30").instant(), Some(expected));
        assert_eq!(TxDate::parse("2024-02-01 10:30").instant(), Some(expected));
    }

    #[test]
    fn decodes_epoch_millis_and_tolerates_null() {
        let date: TxDate = serde_json::from_str("1706745600000").unwrap();
        assert_eq!(
            date.instant(),
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        );

        let null: TxDate = serde_json::from_str("null").unwrap();
        assert!(null.instant().is_none());
        assert_eq!(null.to_day_month_year(), "Invalid Date");

        let object: TxDate = serde_json::from_str(r#"{"when":"today"}"#).unwrap();
        assert!(matches!(object, TxDate::Invalid(_)));
    }

    #[test]
    fn garbage_is_invalid_and_keeps_raw_text() {
        assert_eq!(TxDate::parse("yesterday"), TxDate::Invalid("yesterday".to_string()));
        assert_eq!(TxDate::parse("2024-13-45"), TxDate::Invalid("2024-13-45".to_string()));
    }

    #[test]
    fn invalid_dates_order_after_valid_ones() {
        let valid = TxDate::parse("1999-01-01");
        let invalid = TxDate::parse("not a date");
        assert_eq!(valid.cmp_newest_first(&invalid), Ordering::Less);
        assert_eq!(invalid.cmp_newest_first(&valid), Ordering::Greater);
        assert_eq!(invalid.cmp_newest_first(&invalid.clone()), Ordering::Equal);
    }

    #[test]
    fn newer_orders_before_older() {
        let older = TxDate::parse("2024-01-01");
        let newer = TxDate::parse("2024-02-01");
        assert_eq!(newer.cmp_newest_first(&older), Ordering::Less);
    }

    #[test]
    fn formats_day_month_year() {
        assert_eq!(TxDate::parse("2024-02-01").to_day_month_year(), "01 Feb 2024");
        assert_eq!(TxDate::parse("2023-12-25T23:59:59Z").to_day_month_year(), "25 Dec 2023");
        assert_eq!(TxDate::parse("??").to_day_month_year(), "Invalid Date");
    }

    #[test]
    fn formats_short_date() {
        assert_eq!(TxDate::parse("2024-02-01").to_short_date(), "2/1/2024");
        assert_eq!(TxDate::parse("").to_short_date(), "Invalid Date");
    }
}
