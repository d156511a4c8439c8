use jiff::{
    civil::{self, Weekday},
    Error, Span, Zoned,
};

/// The day-granular calendar primitives the arithmetic in this crate
/// is written against.
///
/// Everything in [`add_months`](crate::add_months),
/// [`add_years`](crate::add_years) and
/// [`add_weekdays`](crate::add_weekdays) is expressed in terms of this
/// trait, so the arithmetic works for any calendar value that can add
/// whole days and report its month and weekday. Implementations are
/// provided for [`jiff::civil::Date`], [`jiff::civil::DateTime`] and
/// [`jiff::Zoned`].
///
/// # Month addition semantics
///
/// [`checked_add_months`](CalendarProvider::checked_add_months) is the
/// provider's *own* month addition, whatever it does when the
/// day-of-month doesn't exist in the target month. Jiff constrains the
/// day; other calendars overflow into the following month. The
/// verification loop in [`add_months`](crate::add_months) produces the
/// same intent-preserving result either way, so implementations should
/// simply delegate and not try to fix up overflow themselves.
pub trait CalendarProvider: Clone {
    /// Adds a number of whole calendar days, negative values moving
    /// into the past.
    fn checked_add_days(&self, days: i64) -> Result<Self, Error>;

    /// Adds a number of months using the provider's native semantics.
    fn checked_add_months(&self, months: i64) -> Result<Self, Error>;

    /// Adds a number of years using the provider's native semantics.
    fn checked_add_years(&self, years: i64) -> Result<Self, Error>;

    /// Returns the month, in the range `1..=12`.
    fn month(&self) -> i8;

    /// Returns the day of the week.
    fn weekday(&self) -> Weekday;

    /// Returns true when this value falls on a Saturday or a Sunday.
    fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Saturday | Weekday::Sunday)
    }
}

impl CalendarProvider for civil::Date {
    fn checked_add_days(&self, days: i64) -> Result<civil::Date, Error> {
        self.checked_add(Span::new().try_days(days)?)
    }

    fn checked_add_months(
        &self,
        months: i64,
    ) -> Result<civil::Date, Error> {
        self.checked_add(Span::new().try_months(months)?)
    }

    fn checked_add_years(&self, years: i64) -> Result<civil::Date, Error> {
        self.checked_add(Span::new().try_years(years)?)
    }

    fn month(&self) -> i8 {
        civil::Date::month(*self)
    }

    fn weekday(&self) -> Weekday {
        civil::Date::weekday(*self)
    }
}

impl CalendarProvider for civil::DateTime {
    fn checked_add_days(
        &self,
        days: i64,
    ) -> Result<civil::DateTime, Error> {
        self.checked_add(Span::new().try_days(days)?)
    }

    fn checked_add_months(
        &self,
        months: i64,
    ) -> Result<civil::DateTime, Error> {
        self.checked_add(Span::new().try_months(months)?)
    }

    fn checked_add_years(
        &self,
        years: i64,
    ) -> Result<civil::DateTime, Error> {
        self.checked_add(Span::new().try_years(years)?)
    }

    fn month(&self) -> i8 {
        civil::DateTime::month(*self)
    }

    fn weekday(&self) -> Weekday {
        civil::DateTime::weekday(*self)
    }
}

impl CalendarProvider for Zoned {
    fn checked_add_days(&self, days: i64) -> Result<Zoned, Error> {
        self.checked_add(Span::new().try_days(days)?)
    }

    fn checked_add_months(&self, months: i64) -> Result<Zoned, Error> {
        self.checked_add(Span::new().try_months(months)?)
    }

    fn checked_add_years(&self, years: i64) -> Result<Zoned, Error> {
        self.checked_add(Span::new().try_years(years)?)
    }

    fn month(&self) -> i8 {
        Zoned::month(self)
    }

    fn weekday(&self) -> Weekday {
        Zoned::weekday(self)
    }
}
