//! Calendar normalization shared by construction and calendar arithmetic.
//!
//! Components outside of their usual ranges carry into the next larger unit:
//! month 13 is January of the following year, February 30 is March 1 or 2,
//! and hour 24 is midnight of the following day.

use jiff::{
    civil::{Date, DateTime, Time},
    Span,
};

use crate::Error;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;

/// Unnormalized civil date and clock components.
#[derive(Debug, Clone, Copy)]
pub struct Fields {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub nanosecond: i64,
}

impl From<DateTime> for Fields {
    fn from(datetime: DateTime) -> Self {
        Self {
            year: i64::from(datetime.year()),
            month: i64::from(datetime.month()),
            day: i64::from(datetime.day()),
            hour: i64::from(datetime.hour()),
            minute: i64::from(datetime.minute()),
            second: i64::from(datetime.second()),
            nanosecond: i64::from(datetime.subsec_nanosecond()),
        }
    }
}

impl Fields {
    #[allow(clippy::cast_possible_truncation)] // all casts are range-reduced first
    pub fn normalize(self) -> Result<DateTime, Error> {
        let months = self
            .year
            .checked_mul(12)
            .and_then(|months| months.checked_add(self.month - 1))
            .ok_or_else(|| Error::OutOfRange(format!("year {} is too large", self.year)))?;
        let year = i16::try_from(months.div_euclid(12))
            .map_err(|_| Error::OutOfRange(format!("year {}", months.div_euclid(12))))?;
        let month = (months.rem_euclid(12) + 1) as i8;

        let clock = i128::from(self.hour) * NANOS_PER_HOUR
            + i128::from(self.minute) * NANOS_PER_MINUTE
            + i128::from(self.second) * NANOS_PER_SECOND
            + i128::from(self.nanosecond);
        let carried_days = clock.div_euclid(NANOS_PER_DAY);
        let clock = clock.rem_euclid(NANOS_PER_DAY);

        let days = i64::try_from(i128::from(self.day) - 1 + carried_days)
            .map_err(|_| Error::OutOfRange(format!("{carried_days} days")))?;
        let span = Span::new()
            .try_days(days)
            .map_err(|err| Error::out_of_range(&err))?;
        let date = Date::new(year, month, 1)
            .and_then(|first| first.checked_add(span))
            .map_err(|err| Error::out_of_range(&err))?;

        let time = Time::new(
            (clock / NANOS_PER_HOUR) as i8,
            (clock % NANOS_PER_HOUR / NANOS_PER_MINUTE) as i8,
            (clock % NANOS_PER_MINUTE / NANOS_PER_SECOND) as i8,
            (clock % NANOS_PER_SECOND) as i32,
        )
        .map_err(|err| Error::out_of_range(&err))?;

        Ok(date.to_datetime(time))
    }
}

#[cfg(test)]
fn fields(year: i64, month: i64, day: i64, hour: i64, minute: i64) -> Fields {
    Fields {
        year,
        month,
        day,
        hour,
        minute,
        second: 0,
        nanosecond: 0,
    }
}

#[test]
fn in_range_components_are_unchanged() {
    let datetime = fields(2024, 1, 15, 12, 30).normalize().unwrap();
    assert_eq!(datetime, jiff::civil::date(2024, 1, 15).at(12, 30, 0, 0));
}

#[test]
fn overflowing_components_carry() {
    assert_eq!(
        fields(2024, 13, 1, 0, 0).normalize().unwrap(),
        jiff::civil::date(2025, 1, 1).at(0, 0, 0, 0)
    );
    assert_eq!(
        fields(2025, 2, 29, 0, 0).normalize().unwrap(),
        jiff::civil::date(2025, 3, 1).at(0, 0, 0, 0)
    );
    assert_eq!(
        fields(2024, 12, 31, 24, 0).normalize().unwrap(),
        jiff::civil::date(2025, 1, 1).at(0, 0, 0, 0)
    );
    assert_eq!(
        fields(2024, 1, 1, 0, 90).normalize().unwrap(),
        jiff::civil::date(2024, 1, 1).at(1, 30, 0, 0)
    );
}

#[test]
fn underflowing_components_borrow() {
    assert_eq!(
        fields(2024, 0, 1, 0, 0).normalize().unwrap(),
        jiff::civil::date(2023, 12, 1).at(0, 0, 0, 0)
    );
    assert_eq!(
        fields(2024, 3, 0, 0, 0).normalize().unwrap(),
        jiff::civil::date(2024, 2, 29).at(0, 0, 0, 0)
    );
    assert_eq!(
        fields(2024, 1, 1, -1, 0).normalize().unwrap(),
        jiff::civil::date(2023, 12, 31).at(23, 0, 0, 0)
    );
}

#[test]
fn unrepresentable_years_are_errors() {
    assert!(matches!(
        fields(40_000, 1, 1, 0, 0).normalize(),
        Err(Error::OutOfRange(_))
    ));
}
