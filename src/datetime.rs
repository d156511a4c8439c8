use core::fmt;

use jiff::{
    civil::{self, Weekday},
    tz::{Offset, TimeZone},
    Error, Zoned,
};

use crate::arith;
use crate::provider::CalendarProvider;

/// A timezone-aware datetime bundling this crate's conveniences.
///
/// `DateTime` wraps a [`jiff::Zoned`] and exposes field accessors,
/// `with_` style setters, comparison helpers and the intent-preserving
/// arithmetic from [`add_months`](crate::add_months),
/// [`add_years`](crate::add_years) and
/// [`add_weekdays`](crate::add_weekdays) as methods. It deliberately
/// does not re-export the rest of Jiff's surface; convert to a `Zoned`
/// (cheap, via [`DateTime::to_zoned`] or `From`) when you need
/// formatting, parsing, rounding or spans.
///
/// Values are immutable. Every setter and arithmetic method returns a
/// new `DateTime` and leaves the receiver untouched.
///
/// # Example
///
/// ```
/// use jiff::tz::TimeZone;
/// use jiff_extra::DateTime;
///
/// let dt = DateTime::new(2014, 5, 31, 12, 0, 0, TimeZone::UTC)?;
/// let next = dt.add_months(1)?;
/// assert_eq!((next.year(), next.month(), next.day()), (2014, 6, 30));
/// assert_eq!(next.hour(), 12);
/// # Ok::<(), jiff::Error>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct DateTime(Zoned);

impl DateTime {
    /// Creates a new `DateTime` from civil fields and a time zone.
    ///
    /// Sub-second components start at zero; conversions from
    /// [`jiff::Zoned`] preserve whatever precision the `Zoned` has.
    ///
    /// # Errors
    ///
    /// This returns an error when the fields do not name a valid
    /// civil datetime (for example, a day of `31` in June), following
    /// the same rules as [`jiff::civil::DateTime::new`].
    pub fn new(
        year: i16,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        time_zone: TimeZone,
    ) -> Result<DateTime, Error> {
        let dt = civil::DateTime::new(year, month, day, hour, minute, second, 0)?;
        Ok(DateTime(dt.to_zoned(time_zone)?))
    }

    /// Returns the current datetime in the system time zone.
    pub fn now() -> DateTime {
        DateTime(Zoned::now())
    }

    /// Converts this value to the underlying [`jiff::Zoned`].
    pub fn to_zoned(&self) -> Zoned {
        self.0.clone()
    }

    /// Returns the year, in the range `-9999..=9999`.
    pub fn year(&self) -> i16 {
        self.0.year()
    }

    /// Returns the month, in the range `1..=12`.
    pub fn month(&self) -> i8 {
        self.0.month()
    }

    /// Returns the day of the month, in the range `1..=31`.
    pub fn day(&self) -> i8 {
        self.0.day()
    }

    /// Returns the hour, in the range `0..=23`.
    pub fn hour(&self) -> i8 {
        self.0.hour()
    }

    /// Returns the minute, in the range `0..=59`.
    pub fn minute(&self) -> i8 {
        self.0.minute()
    }

    /// Returns the second, in the range `0..=59`.
    pub fn second(&self) -> i8 {
        self.0.second()
    }

    /// Returns the fractional second in whole microseconds, in the
    /// range `0..=999_999`.
    pub fn microsecond(&self) -> i32 {
        self.0.subsec_nanosecond() / 1_000
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the day of the year, in the range `1..=366`.
    pub fn day_of_year(&self) -> i16 {
        self.0.day_of_year()
    }

    /// Returns the number of days in the current month.
    pub fn days_in_month(&self) -> i8 {
        self.0.days_in_month()
    }

    /// Returns the ISO 8601 week number, in the range `1..=53`.
    ///
    /// The week containing the year's first Thursday is week one, so
    /// the first days of January can belong to the last week of the
    /// previous ISO year, and vice versa at the end of December.
    pub fn week_of_year(&self) -> i8 {
        self.0.date().iso_week_date().week()
    }

    /// Returns the week of the month, in the range `1..=5`, where days
    /// `1..=7` are week one.
    pub fn week_of_month(&self) -> i8 {
        (self.day() - 1) / 7 + 1
    }

    /// Returns the quarter, in the range `1..=4`.
    pub fn quarter(&self) -> i8 {
        (self.month() - 1) / 3 + 1
    }

    /// Returns the time zone offset in effect.
    pub fn offset(&self) -> Offset {
        self.0.offset()
    }

    /// Returns the IANA time zone identifier, if there is one.
    ///
    /// Fixed-offset zones have no identifier.
    pub fn time_zone_name(&self) -> Option<&str> {
        self.0.time_zone().iana_name()
    }

    /// Returns the number of seconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp().as_second()
    }

    /// Returns the number of milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp().as_millisecond()
    }

    /// Returns true when the year is a leap year.
    pub fn in_leap_year(&self) -> bool {
        self.0.in_leap_year()
    }

    /// Returns true when this datetime falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Returns true when daylight saving time is in effect.
    pub fn is_dst(&self) -> bool {
        self.0
            .time_zone()
            .to_offset_info(self.0.timestamp())
            .dst()
            .is_dst()
    }

    /// Returns true when the offset in effect is UTC.
    ///
    /// This is an offset test, not a time zone identity test: it is
    /// also true in an IANA zone while that zone's offset is zero.
    pub fn is_utc(&self) -> bool {
        self.offset() == Offset::UTC
    }

    /// Returns a new `DateTime` with the given year.
    ///
    /// # Errors
    ///
    /// This returns an error when the resulting date would be invalid,
    /// e.g. moving `2012-02-29` to a non-leap year. Use
    /// [`DateTime::add_years`] for clamping semantics.
    pub fn with_year(&self, year: i16) -> Result<DateTime, Error> {
        Ok(DateTime(self.0.with().year(year).build()?))
    }

    /// Returns a new `DateTime` with the given month.
    ///
    /// # Errors
    ///
    /// This returns an error when the current day does not exist in
    /// the target month, e.g. setting January 31st to February. Use
    /// [`DateTime::add_months`] for clamping semantics.
    pub fn with_month(&self, month: i8) -> Result<DateTime, Error> {
        Ok(DateTime(self.0.with().month(month).build()?))
    }

    /// Returns a new `DateTime` with the given day of the month.
    ///
    /// # Errors
    ///
    /// This returns an error when the day does not exist in the
    /// current month.
    pub fn with_day(&self, day: i8) -> Result<DateTime, Error> {
        Ok(DateTime(self.0.with().day(day).build()?))
    }

    /// Returns a new `DateTime` with the given hour.
    ///
    /// # Errors
    ///
    /// This returns an error when the hour is outside `0..=23`.
    pub fn with_hour(&self, hour: i8) -> Result<DateTime, Error> {
        Ok(DateTime(self.0.with().hour(hour).build()?))
    }

    /// Returns a new `DateTime` with the given minute.
    ///
    /// # Errors
    ///
    /// This returns an error when the minute is outside `0..=59`.
    pub fn with_minute(&self, minute: i8) -> Result<DateTime, Error> {
        Ok(DateTime(self.0.with().minute(minute).build()?))
    }

    /// Returns a new `DateTime` with the given second.
    ///
    /// # Errors
    ///
    /// This returns an error when the second is outside `0..=59`.
    pub fn with_second(&self, second: i8) -> Result<DateTime, Error> {
        Ok(DateTime(self.0.with().second(second).build()?))
    }

    /// Returns a new `DateTime` on the given weekday of the current
    /// ISO week (Monday through Sunday), preserving the time of day.
    ///
    /// # Errors
    ///
    /// This returns an error only at the edges of Jiff's representable
    /// range.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::{civil::Weekday, tz::TimeZone};
    /// use jiff_extra::DateTime;
    ///
    /// // 2015-04-20 is a Monday.
    /// let dt = DateTime::new(2015, 4, 20, 13, 37, 42, TimeZone::UTC)?;
    /// let wed = dt.with_weekday(Weekday::Wednesday)?;
    /// assert_eq!(wed.day(), 22);
    /// assert_eq!((wed.hour(), wed.minute()), (13, 37));
    /// # Ok::<(), jiff::Error>(())
    /// ```
    pub fn with_weekday(&self, weekday: Weekday) -> Result<DateTime, Error> {
        let diff = i64::from(weekday.to_monday_one_offset())
            - i64::from(self.weekday().to_monday_one_offset());
        self.add_days(diff)
    }

    /// Returns a new `DateTime` in the given ISO 8601 week of the
    /// year, on the same weekday and time of day.
    ///
    /// # Errors
    ///
    /// This returns an error only at the edges of Jiff's representable
    /// range.
    pub fn with_week_of_year(&self, week: i8) -> Result<DateTime, Error> {
        let diff = i64::from(week) - i64::from(self.week_of_year());
        self.add_days(diff * 7)
    }

    /// Returns true when this datetime is strictly before `other`.
    ///
    /// Comparisons are between instants: two datetimes in different
    /// time zones compare by the moment they refer to.
    pub fn is_before(&self, other: &DateTime) -> bool {
        self < other
    }

    /// Returns true when this datetime is before or equal to `other`.
    pub fn is_before_or_equal(&self, other: &DateTime) -> bool {
        self <= other
    }

    /// Returns true when this datetime is strictly after `other`.
    pub fn is_after(&self, other: &DateTime) -> bool {
        self > other
    }

    /// Returns true when this datetime is after or equal to `other`.
    pub fn is_after_or_equal(&self, other: &DateTime) -> bool {
        self >= other
    }

    /// Returns true when both values fall on the same civil date,
    /// ignoring the time of day.
    ///
    /// Each value's date is taken in its own time zone.
    pub fn is_same_date(&self, other: &DateTime) -> bool {
        self.0.date() == other.0.date()
    }

    /// Adds whole calendar days, negative values moving into the past.
    ///
    /// # Errors
    ///
    /// This returns an error when the result would fall outside Jiff's
    /// representable range.
    pub fn add_days(&self, days: i64) -> Result<DateTime, Error> {
        self.0.checked_add_days(days).map(DateTime)
    }

    /// Adds months, staying in the intended target month and clamping
    /// only the day. See [`add_months`](crate::add_months).
    ///
    /// # Errors
    ///
    /// This returns an error when the result would fall outside Jiff's
    /// representable range.
    pub fn add_months(&self, months: i64) -> Result<DateTime, Error> {
        arith::add_months(&self.0, months).map(DateTime)
    }

    /// Subtracts months under the same rules as
    /// [`DateTime::add_months`].
    ///
    /// # Errors
    ///
    /// This returns an error when the result would fall outside Jiff's
    /// representable range.
    pub fn sub_months(&self, months: i64) -> Result<DateTime, Error> {
        // i64::MIN has no negation; substitute a count the provider
        // rejects as out of range.
        self.add_months(months.checked_neg().unwrap_or(i64::MAX))
    }

    /// Adds years, keeping the month and clamping only the
    /// Feb-29-to-Feb-28 case. See [`add_years`](crate::add_years).
    ///
    /// # Errors
    ///
    /// This returns an error when the result would fall outside Jiff's
    /// representable range.
    pub fn add_years(&self, years: i64) -> Result<DateTime, Error> {
        arith::add_years(&self.0, years).map(DateTime)
    }

    /// Subtracts years under the same rules as
    /// [`DateTime::add_years`].
    ///
    /// # Errors
    ///
    /// This returns an error when the result would fall outside Jiff's
    /// representable range.
    pub fn sub_years(&self, years: i64) -> Result<DateTime, Error> {
        self.add_years(years.checked_neg().unwrap_or(i64::MAX))
    }

    /// Moves weekday steps, skipping Saturdays and Sundays. See
    /// [`add_weekdays`](crate::add_weekdays).
    ///
    /// # Errors
    ///
    /// This returns an error when the result would fall outside Jiff's
    /// representable range.
    pub fn add_weekdays(&self, weekdays: i64) -> Result<DateTime, Error> {
        arith::add_weekdays(&self.0, weekdays).map(DateTime)
    }

    /// Returns the signed number of whole months from this datetime to
    /// `other`, computed purely from the year and month fields.
    ///
    /// Days and times of day are ignored: January 31st to February 1st
    /// is one month, while January 1st to January 31st is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use jiff_extra::DateTime;
    ///
    /// let jan = DateTime::new(2014, 1, 1, 0, 0, 0, TimeZone::UTC)?;
    /// let dec = DateTime::new(2014, 12, 31, 0, 0, 0, TimeZone::UTC)?;
    /// assert_eq!(jan.diff_in_months(&dec), 11);
    /// assert_eq!(dec.diff_in_months(&jan), -11);
    /// # Ok::<(), jiff::Error>(())
    /// ```
    pub fn diff_in_months(&self, other: &DateTime) -> i64 {
        let years = i64::from(other.year()) - i64::from(self.year());
        let months = i64::from(other.month()) - i64::from(self.month());
        years * 12 + months
    }

    /// Decomposes this datetime into its [`Parts`].
    pub fn parts(&self) -> Parts {
        Parts {
            year: self.year(),
            month: self.month(),
            day: self.day(),
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
            microsecond: self.microsecond(),
            quarter: self.quarter(),
            weekday: self.weekday().to_monday_one_offset(),
            day_of_year: self.day_of_year(),
            week_of_year: self.week_of_year(),
            time_zone: self.time_zone_name().map(str::to_owned),
            offset_seconds: self.offset().seconds(),
            timestamp: self.timestamp(),
            timestamp_millis: self.timestamp_millis(),
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Zoned> for DateTime {
    fn from(x: Zoned) -> DateTime {
        DateTime(x)
    }
}

impl From<DateTime> for Zoned {
    fn from(x: DateTime) -> Zoned {
        x.0
    }
}

/// An exploded view of a [`DateTime`], one public field per component.
///
/// This is the crate's serialization surface: with the `serde` feature
/// enabled, `Parts` implements `serde::Serialize` and produces one
/// flat map of the fields below. Weekday numbering is ISO, Monday=1
/// through Sunday=7, and `week_of_year` is the ISO 8601 week number.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parts {
    /// The year, in the range `-9999..=9999`.
    pub year: i16,
    /// The month, in the range `1..=12`.
    pub month: i8,
    /// The day of the month, in the range `1..=31`.
    pub day: i8,
    /// The hour, in the range `0..=23`.
    pub hour: i8,
    /// The minute, in the range `0..=59`.
    pub minute: i8,
    /// The second, in the range `0..=59`.
    pub second: i8,
    /// The fractional second in whole microseconds.
    pub microsecond: i32,
    /// The quarter, in the range `1..=4`.
    pub quarter: i8,
    /// The ISO weekday number, Monday=1 through Sunday=7.
    pub weekday: i8,
    /// The day of the year, in the range `1..=366`.
    pub day_of_year: i16,
    /// The ISO 8601 week number.
    pub week_of_year: i8,
    /// The IANA time zone identifier, when there is one.
    pub time_zone: Option<String>,
    /// The time zone offset in effect, in seconds east of UTC.
    pub offset_seconds: i32,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Milliseconds since the Unix epoch.
    pub timestamp_millis: i64,
}
