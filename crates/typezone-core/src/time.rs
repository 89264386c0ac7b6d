use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Write},
    marker::PhantomData,
    ops::{Add, Sub},
    str::FromStr,
    time::SystemTime,
};

use derive_where::derive_where;
use jiff::{
    civil::{Date, DateTime, Weekday},
    fmt::strtime,
    tz::TimeZone,
    SignedDuration, Timestamp, Zoned,
};

use crate::{civil::Fields, Error, Moment, Zone};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// A moment in time that is displayed in the time zone `Z`.
///
/// Internally only the absolute instant is stored. The zone is applied each
/// time the value is formatted or broken into calendar components, so the
/// zone never affects equality, ordering or hashing: two `Time`s in
/// different zones that denote the same instant compare equal.
///
/// Changing the zone of a value requires an explicit call to
/// [`Time::from_moment`], which keeps the instant and re-tags it with a new
/// zone.
///
/// The default value is the zero instant, 1970-01-01T00:00:00Z.
#[derive_where(Clone, Copy, Hash)]
pub struct Time<Z: Zone> {
    timestamp: Timestamp,
    _zone: PhantomData<Z>,
}

impl<Z> Time<Z>
where
    Z: Zone,
{
    /// The zero instant: January 1, 1970 00:00:00 UTC.
    pub const ZERO: Self = Self {
        timestamp: Timestamp::UNIX_EPOCH,
        _zone: PhantomData,
    };

    /// Returns the current time.
    #[must_use]
    pub fn now() -> Self {
        Self::from(Timestamp::now())
    }

    /// Returns the instant at which the clocks in `Z` show the given date
    /// and time.
    ///
    /// Components outside of their normal ranges are normalized by carrying
    /// into the next larger unit, so month 13 of 2024 is January 2025 and
    /// February 30 is the first or second of March. When the clock time is
    /// skipped or repeated by a daylight saving transition, the later
    /// instant is chosen for a gap and the earlier for a fold.
    ///
    /// Returns [`Error::ZoneNotFound`] if `Z` cannot be resolved.
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        nanosecond: i32,
    ) -> Result<Self, Error> {
        let datetime = Fields {
            year: i64::from(year),
            month: i64::from(month),
            day: i64::from(day),
            hour: i64::from(hour),
            minute: i64::from(minute),
            second: i64::from(second),
            nanosecond: i64::from(nanosecond),
        }
        .normalize()?;
        Self::from_datetime(&Z::resolve()?, datetime)
    }

    /// Re-tags the instant of `moment` with the zone `Z`. The instant itself
    /// is never changed.
    ///
    /// This is the only way to move a value between zones.
    #[must_use]
    pub fn from_moment(moment: impl Moment) -> Self {
        Self::from(moment.timestamp())
    }

    /// Parses `text` using the strftime-style `pattern`.
    ///
    /// If the text contains a UTC offset, that offset determines the
    /// instant. Otherwise the clock time is interpreted in `Z`, which
    /// fails with [`Error::ZoneNotFound`] if `Z` cannot be resolved.
    pub fn parse(pattern: &str, text: &str) -> Result<Self, Error> {
        let parsed = strtime::parse(pattern, text).map_err(|err| Error::parse(&err))?;
        let timestamp = if parsed.offset().is_some() {
            parsed.to_timestamp()
        } else {
            let zone = Z::resolve()?;
            parsed
                .to_datetime()
                .and_then(|datetime| zone.to_timestamp(datetime))
        }
        .map_err(|err| Error::parse(&err))?;
        Ok(Self::from(timestamp))
    }

    /// Returns the time `seconds` plus `nanoseconds` after the Unix epoch.
    /// `nanoseconds` may be outside of `0..1_000_000_000` and may be negative.
    pub fn unix(seconds: i64, nanoseconds: i64) -> Result<Self, Error> {
        Self::from_nanosecond(i128::from(seconds) * NANOS_PER_SECOND + i128::from(nanoseconds))
    }

    /// Returns the time `milliseconds` after the Unix epoch.
    pub fn unix_milli(milliseconds: i64) -> Result<Self, Error> {
        Timestamp::from_millisecond(milliseconds)
            .map(Self::from)
            .map_err(|err| Error::out_of_range(&err))
    }

    /// Returns the time `microseconds` after the Unix epoch.
    pub fn unix_micro(microseconds: i64) -> Result<Self, Error> {
        Timestamp::from_microsecond(microseconds)
            .map(Self::from)
            .map_err(|err| Error::out_of_range(&err))
    }

    /// Returns the time `nanoseconds` after the Unix epoch.
    pub fn from_nanosecond(nanoseconds: i128) -> Result<Self, Error> {
        Timestamp::from_nanosecond(nanoseconds)
            .map(Self::from)
            .map_err(|err| Error::out_of_range(&err))
    }

    fn from_datetime(zone: &TimeZone, datetime: DateTime) -> Result<Self, Error> {
        zone.to_timestamp(datetime)
            .map(Self::from)
            .map_err(|err| Error::out_of_range(&err))
    }

    /// Returns the zone-neutral instant exactly as it is stored.
    #[must_use]
    pub fn to_timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns this instant projected into `Z`.
    #[must_use]
    pub fn to_zoned(&self) -> Zoned {
        self.timestamp.to_zoned(Z::time_zone())
    }

    /// Returns this instant projected into an arbitrary runtime zone.
    ///
    /// The result is an untyped [`Zoned`]: the compiler can no longer tell
    /// which zone it is displayed in.
    #[must_use]
    pub fn in_time_zone(&self, zone: TimeZone) -> Zoned {
        self.timestamp.to_zoned(zone)
    }

    /// Returns this instant projected into the system's local time zone.
    ///
    /// The local zone is only known at runtime, so this forfeits the
    /// compile-time guarantee that the rest of this type provides.
    #[must_use]
    pub fn to_local(&self) -> Zoned {
        self.timestamp.to_zoned(TimeZone::system())
    }

    /// Returns the resolved zone `Z`.
    #[must_use]
    pub fn time_zone(&self) -> TimeZone {
        Z::time_zone()
    }

    /// Returns the IANA identifier of `Z`.
    #[must_use]
    pub fn zone_name(&self) -> &'static str {
        Z::NAME
    }

    /// Formats this time in `Z` using a strftime-style `pattern`, such as
    /// `"%Y-%m-%d %H:%M:%S %Z"`.
    pub fn format(&self, pattern: &str) -> Result<String, Error> {
        strtime::format(pattern, &self.to_zoned()).map_err(|err| Error::Format(err.to_string()))
    }

    /// Returns the calendar date in `Z`.
    #[must_use]
    pub fn date(&self) -> Date {
        self.to_zoned().date()
    }

    /// Returns the calendar date and clock time in `Z`.
    #[must_use]
    pub fn datetime(&self) -> DateTime {
        self.to_zoned().datetime()
    }

    /// Returns the hour, minute and second in `Z`.
    #[must_use]
    pub fn clock(&self) -> (i8, i8, i8) {
        let zoned = self.to_zoned();
        (zoned.hour(), zoned.minute(), zoned.second())
    }

    /// Returns the year in `Z`.
    #[must_use]
    pub fn year(&self) -> i16 {
        self.to_zoned().year()
    }

    /// Returns the month in `Z`, from 1 to 12.
    #[must_use]
    pub fn month(&self) -> i8 {
        self.to_zoned().month()
    }

    /// Returns the day of the month in `Z`, starting at 1.
    #[must_use]
    pub fn day(&self) -> i8 {
        self.to_zoned().day()
    }

    /// Returns the hour in `Z`, from 0 to 23.
    #[must_use]
    pub fn hour(&self) -> i8 {
        self.to_zoned().hour()
    }

    /// Returns the minute in `Z`, from 0 to 59.
    #[must_use]
    pub fn minute(&self) -> i8 {
        self.to_zoned().minute()
    }

    /// Returns the second in `Z`, from 0 to 59.
    #[must_use]
    pub fn second(&self) -> i8 {
        self.to_zoned().second()
    }

    /// Returns the fractional second in nanoseconds, from 0 to 999,999,999.
    #[must_use]
    pub fn subsec_nanosecond(&self) -> i32 {
        self.to_zoned().subsec_nanosecond()
    }

    /// Returns the day of the week in `Z`.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.to_zoned().weekday()
    }

    /// Returns the day of the year in `Z`, from 1 to 366.
    #[must_use]
    pub fn day_of_year(&self) -> i16 {
        self.to_zoned().day_of_year()
    }

    /// Returns the ISO 8601 week-numbering year and week in `Z`. January 1
    /// through 3 may belong to the last week of the previous year, and
    /// December 29 through 31 may belong to week 1 of the next year.
    #[must_use]
    pub fn iso_week(&self) -> (i16, i8) {
        let week = self.date().iso_week_date();
        (week.year(), week.week())
    }

    /// Returns the abbreviation of the zone in effect at this instant, such
    /// as `EST` or `EDT`, and its offset from UTC in seconds.
    #[must_use]
    pub fn zone(&self) -> (String, i32) {
        let zone = Z::time_zone();
        let info = zone.to_offset_info(self.timestamp);
        (info.abbreviation().to_string(), info.offset().seconds())
    }

    /// Returns true if daylight saving time is in effect in `Z` at this
    /// instant.
    #[must_use]
    pub fn is_dst(&self) -> bool {
        Z::time_zone().to_offset_info(self.timestamp).dst().is_dst()
    }

    /// Returns the start and end of the offset period that contains this
    /// instant. A side of the period with no transition, including both
    /// sides for UTC, is reported as [`Time::ZERO`].
    #[must_use]
    pub fn zone_bounds(&self) -> (Self, Self) {
        let zone = Z::time_zone();
        // `preceding` is exclusive, but a transition exactly at this instant
        // starts the current period.
        let start = self
            .timestamp
            .checked_add(SignedDuration::from_nanos(1))
            .ok()
            .and_then(|after| zone.preceding(after).next())
            .map_or(Self::ZERO, |transition| Self::from(transition.timestamp()));
        let end = zone
            .following(self.timestamp)
            .next()
            .map_or(Self::ZERO, |transition| Self::from(transition.timestamp()));
        (start, end)
    }

    /// Returns the number of whole seconds since the Unix epoch.
    #[must_use]
    pub fn as_second(&self) -> i64 {
        self.timestamp.as_second()
    }

    /// Returns the number of whole milliseconds since the Unix epoch.
    #[must_use]
    pub fn as_millisecond(&self) -> i64 {
        self.timestamp.as_millisecond()
    }

    /// Returns the number of whole microseconds since the Unix epoch.
    #[must_use]
    pub fn as_microsecond(&self) -> i64 {
        self.timestamp.as_microsecond()
    }

    /// Returns the number of nanoseconds since the Unix epoch.
    #[must_use]
    pub fn as_nanosecond(&self) -> i128 {
        self.timestamp.as_nanosecond()
    }

    /// Returns this time shifted by `duration`, or an error if the result
    /// is not representable.
    pub fn checked_add(&self, duration: SignedDuration) -> Result<Self, Error> {
        self.timestamp
            .checked_add(duration)
            .map(Self::from)
            .map_err(|err| Error::out_of_range(&err))
    }

    /// Returns this time shifted by `duration`, clamped to the range of
    /// representable instants.
    #[must_use]
    pub fn saturating_add(&self, duration: SignedDuration) -> Self {
        self.checked_add(duration)
            .unwrap_or_else(|_| Self::from(saturated(duration.is_negative())))
    }

    /// Adds calendar years, months and days as observed on the clocks in
    /// `Z`, keeping the clock time. Overflowing dates carry forward, so
    /// February 29, 2024 plus one year is March 1, 2025.
    pub fn checked_add_date(&self, years: i32, months: i32, days: i32) -> Result<Self, Error> {
        let zone = Z::resolve()?;
        let mut fields = Fields::from(self.timestamp.to_zoned(zone.clone()).datetime());
        fields.year += i64::from(years);
        fields.month += i64::from(months);
        fields.day += i64::from(days);
        Self::from_datetime(&zone, fields.normalize()?)
    }

    /// Like [`Time::checked_add_date`], but clamps to the range of
    /// representable instants.
    #[must_use]
    pub fn add_date(&self, years: i32, months: i32, days: i32) -> Self {
        match self.checked_add_date(years, months, days) {
            Ok(time) => time,
            Err(err @ Error::ZoneNotFound { .. }) => {
                panic!("time zone database is unusable: {err}")
            }
            Err(_) => Self::from(saturated((years, months, days) < (0, 0, 0))),
        }
    }

    /// Rounds down to a multiple of `unit` since the zero instant. A
    /// non-positive `unit` returns `self` unchanged.
    #[must_use]
    pub fn truncate(&self, unit: SignedDuration) -> Self {
        let unit = unit.as_nanos();
        if unit <= 0 {
            return *self;
        }
        let nanos = self.timestamp.as_nanosecond();
        Self::from_nanosecond_saturating(nanos - nanos.rem_euclid(unit))
    }

    /// Rounds to the nearest multiple of `unit` since the zero instant.
    /// Halfway values round up. A non-positive `unit` returns `self`
    /// unchanged.
    #[must_use]
    pub fn round(&self, unit: SignedDuration) -> Self {
        let unit = unit.as_nanos();
        if unit <= 0 {
            return *self;
        }
        let nanos = self.timestamp.as_nanosecond();
        let remainder = nanos.rem_euclid(unit);
        let rounded = if remainder + remainder < unit {
            nanos - remainder
        } else {
            nanos - remainder + unit
        };
        Self::from_nanosecond_saturating(rounded)
    }

    fn from_nanosecond_saturating(nanoseconds: i128) -> Self {
        Self::from_nanosecond(nanoseconds)
            .unwrap_or_else(|_| Self::from(saturated(nanoseconds < 0)))
    }

    /// Returns the elapsed time from `earlier` to `self`, negative when
    /// `earlier` is after `self`.
    #[must_use]
    pub fn duration_since(&self, earlier: impl Moment) -> SignedDuration {
        self.timestamp.duration_since(earlier.timestamp())
    }

    /// Returns true if `self` is strictly before `other`.
    #[must_use]
    pub fn is_before(&self, other: impl Moment) -> bool {
        self.timestamp < other.timestamp()
    }

    /// Returns true if `self` is strictly after `other`.
    #[must_use]
    pub fn is_after(&self, other: impl Moment) -> bool {
        self.timestamp > other.timestamp()
    }

    /// Returns true if `self` and `other` denote the same instant, whatever
    /// zones they are displayed in.
    #[must_use]
    pub fn equal(&self, other: impl Moment) -> bool {
        self.timestamp == other.timestamp()
    }

    /// Compares the instants of `self` and `other`.
    #[must_use]
    pub fn compare(&self, other: impl Moment) -> Ordering {
        self.timestamp.cmp(&other.timestamp())
    }

    /// Returns true if this is the zero instant.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.timestamp == Timestamp::UNIX_EPOCH
    }

    fn write_rfc3339(&self, f: &mut impl Write) -> fmt::Result {
        let zoned = self.to_zoned();
        let year = zoned.year();
        if (0..=9999).contains(&year) {
            write!(f, "{year:04}")?;
        } else {
            // Years outside of 0000-9999 need the signed six digit form.
            let sign = if year < 0 { '-' } else { '+' };
            write!(f, "{sign}{:06}", year.unsigned_abs())?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}",
            zoned.month(),
            zoned.day(),
            zoned.hour(),
            zoned.minute(),
            zoned.second()
        )?;

        let nanos = zoned.subsec_nanosecond();
        if nanos > 0 {
            if nanos % 1_000_000 == 0 {
                // Rendering any precision beyond milliseconds will yield 0s
                write!(f, ".{:03}", nanos / 1_000_000)?;
            } else if nanos % 1_000 == 0 {
                write!(f, ".{:06}", nanos / 1_000)?;
            } else {
                write!(f, ".{nanos:09}")?;
            }
        }

        let offset = zoned.offset().seconds();
        if offset == 0 {
            return f.write_char('Z');
        }
        let sign = if offset < 0 { '-' } else { '+' };
        let offset = offset.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", offset / 3600, offset / 60 % 60)?;
        if offset % 60 != 0 {
            // Local mean time offsets predating standard time.
            write!(f, ":{:02}", offset % 60)?;
        }
        Ok(())
    }
}

fn saturated(negative: bool) -> Timestamp {
    if negative {
        Timestamp::MIN
    } else {
        Timestamp::MAX
    }
}

impl<Z> Default for Time<Z>
where
    Z: Zone,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<Z> From<Timestamp> for Time<Z>
where
    Z: Zone,
{
    fn from(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            _zone: PhantomData,
        }
    }
}

impl<Z> From<&Zoned> for Time<Z>
where
    Z: Zone,
{
    fn from(zoned: &Zoned) -> Self {
        Self::from(zoned.timestamp())
    }
}

impl<Z> From<Time<Z>> for Timestamp
where
    Z: Zone,
{
    fn from(time: Time<Z>) -> Self {
        time.timestamp
    }
}

impl<Z> TryFrom<SystemTime> for Time<Z>
where
    Z: Zone,
{
    type Error = Error;

    fn try_from(time: SystemTime) -> Result<Self, Error> {
        Timestamp::try_from(time)
            .map(Self::from)
            .map_err(|err| Error::out_of_range(&err))
    }
}

impl<Z> From<Time<Z>> for SystemTime
where
    Z: Zone,
{
    fn from(time: Time<Z>) -> Self {
        Self::from(time.timestamp)
    }
}

impl<Z> Add<SignedDuration> for Time<Z>
where
    Z: Zone,
{
    type Output = Self;

    fn add(self, rhs: SignedDuration) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl<Z> Sub<SignedDuration> for Time<Z>
where
    Z: Zone,
{
    type Output = Self;

    fn sub(self, rhs: SignedDuration) -> Self::Output {
        self.timestamp
            .checked_sub(rhs)
            .map_or_else(|_| Self::from(saturated(!rhs.is_negative())), Self::from)
    }
}

impl<Z, Other> Sub<Time<Other>> for Time<Z>
where
    Z: Zone,
    Other: Zone,
{
    type Output = SignedDuration;

    fn sub(self, rhs: Time<Other>) -> Self::Output {
        self.duration_since(rhs)
    }
}

impl<Z, Other> PartialEq<Time<Other>> for Time<Z>
where
    Z: Zone,
    Other: Zone,
{
    fn eq(&self, other: &Time<Other>) -> bool {
        self.timestamp == other.timestamp
    }
}

impl<Z> Eq for Time<Z> where Z: Zone {}

impl<Z> PartialEq<Timestamp> for Time<Z>
where
    Z: Zone,
{
    fn eq(&self, other: &Timestamp) -> bool {
        self.timestamp == *other
    }
}

impl<Z, Other> PartialOrd<Time<Other>> for Time<Z>
where
    Z: Zone,
    Other: Zone,
{
    fn partial_cmp(&self, other: &Time<Other>) -> Option<Ordering> {
        Some(self.timestamp.cmp(&other.timestamp))
    }
}

impl<Z> Ord for Time<Z>
where
    Z: Zone,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

impl<Z> PartialOrd<Timestamp> for Time<Z>
where
    Z: Zone,
{
    fn partial_cmp(&self, other: &Timestamp) -> Option<Ordering> {
        Some(self.timestamp.cmp(other))
    }
}

impl<Z> Display for Time<Z>
where
    Z: Zone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rfc3339(f)
    }
}

impl<Z> Debug for Time<Z>
where
    Z: Zone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time<{}>({self})", Z::NAME)
    }
}

impl<Z> FromStr for Time<Z>
where
    Z: Zone,
{
    type Err = Error;

    /// Parses an RFC 3339 timestamp. The offset in the text determines the
    /// instant; the result is displayed in `Z` regardless of that offset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Timestamp>()
            .map(Self::from)
            .map_err(|err| Error::parse(&err))
    }
}
