//! A type for dates.
//!
//! This module uses [`time`] under the hood.

use thiserror::Error;
pub use time::Month;
use time::{
    macros::{format_description, time},
    Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset,
};

/// An UTC date.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct DateTime(OffsetDateTime);

impl DateTime {
    /// Create a date from the year, month, day, hour, minute, second, and
    /// nanosecond components.
    pub fn new(
        year: i32,
        month: Month,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> Result<Self, DateTimeError> {
        Ok(Self(OffsetDateTime::new_utc(
            Date::from_calendar_date(year, month, day)?,
            Time::from_hms_nano(hour, minute, second, nanosecond)?,
        )))
    }

    /// Current date and time.
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Parse a date string.
    ///
    /// Dates without an offset are assumed to be UTC.
    pub fn parse(input: &str) -> Result<Self, DateTimeError> {
        use time::format_description::well_known::{Iso8601, Rfc2822, Rfc3339};

        let input = input.trim();

        let dt = OffsetDateTime::parse(input, &Rfc3339)
            .or_else(|_| OffsetDateTime::parse(input, &Iso8601::DEFAULT))
            .or_else(|_| {
                PrimitiveDateTime::parse(
                    input,
                    format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second]]]"),
                )
                .or_else(|_| {
                    PrimitiveDateTime::parse(
                        input,
                        format_description!(
                            "[year]-[month]-[day] [hour]:[minute][optional [:[second]]]"
                        ),
                    )
                })
                .map(|dt| dt.assume_utc())
            })
            .or_else(|_| {
                Date::parse(input, format_description!("[year]-[month]-[day]"))
                    .map(|d| d.with_time(time!(0:00)).assume_utc())
            })
            .or_else(|_| OffsetDateTime::parse(input, &Rfc2822))
            .map_err(|_| DateTimeError::Parse(input.to_owned()))?;

        Ok(Self(dt))
    }

    /// Format as RFC 3339 in UTC, e.g. `2009-01-06T20:57:53Z`.
    pub fn to_rfc3339(&self) -> Result<String, DateTimeError> {
        use time::format_description::well_known::Rfc3339;

        Ok(self.0.to_offset(UtcOffset::UTC).format(&Rfc3339)?)
    }
}

impl From<OffsetDateTime> for DateTime {
    fn from(value: OffsetDateTime) -> Self {
        Self(value)
    }
}

/// Date error.
#[derive(Debug, Error)]
pub enum DateTimeError {
    /// Component out of range error.
    #[error(transparent)]
    ComponentRange(#[from] time::error::ComponentRange),
    /// Format error.
    #[error(transparent)]
    Format(#[from] time::error::Format),
    /// Parse error.
    #[error("failed to parse date and time `{0}`")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::{DateTime, Month};

    #[test]
    fn parse() {
        // Atom
        assert_eq!(
            DateTime::new(2009, Month::January, 6, 20, 57, 53, 0).unwrap(),
            DateTime::parse("2009-01-06T20:57:53Z").unwrap()
        );

        // RFC 3339 with offset
        assert_eq!(
            DateTime::new(2003, Month::December, 13, 12, 29, 29, 0).unwrap(),
            DateTime::parse("2003-12-13T08:29:29-04:00").unwrap()
        );

        // RFC 3339 with fraction
        assert_eq!(
            DateTime::new(1985, Month::April, 12, 23, 20, 50, 520_000_000).unwrap(),
            DateTime::parse("1985-04-12T23:20:50.52Z").unwrap()
        );

        // yyyy-mm-dd hh:mm:ss
        assert_eq!(
            DateTime::new(1985, Month::April, 12, 23, 20, 50, 0).unwrap(),
            DateTime::parse("1985-04-12 23:20:50").unwrap()
        );

        // yyyy-mm-ddThh:mm
        assert_eq!(
            DateTime::new(1985, Month::April, 12, 23, 20, 0, 0).unwrap(),
            DateTime::parse("1985-04-12T23:20").unwrap()
        );

        // yyyy-mm-dd
        assert_eq!(
            DateTime::new(1985, Month::April, 12, 0, 0, 0, 0).unwrap(),
            DateTime::parse("1985-04-12").unwrap()
        );

        // RFC 2822
        assert_eq!(
            DateTime::new(1993, Month::June, 12, 13, 25, 19, 0).unwrap(),
            DateTime::parse("Sat, 12 Jun 1993 13:25:19 GMT").unwrap()
        );
    }

    #[test]
    fn parse_invalid() {
        const CASES: [&str; 5] = [
            "",
            "yesterday",
            "2009-13-06T20:57:53Z",
            "2009-01-06T25:57:53Z",
            "06/01/2009",
        ];

        for input in CASES {
            assert!(
                DateTime::parse(input).is_err(),
                "DateTime::parse({input:?}) should fail"
            );
        }
    }

    #[test]
    fn to_rfc3339() {
        const CASES: [(&str, &str); 3] = [
            ("2009-01-06T20:57:53Z", "2009-01-06T20:57:53Z"),
            ("2003-12-13T08:29:29-04:00", "2003-12-13T12:29:29Z"),
            ("1985-04-12T23:20:50.52Z", "1985-04-12T23:20:50.52Z"),
        ];

        for (input, expected) in CASES {
            assert_eq!(
                DateTime::parse(input).unwrap().to_rfc3339().unwrap(),
                expected
            );
        }
    }
}
