use jiff::Error;

use crate::provider::CalendarProvider;

/// Adds a number of months while preserving the intended target month.
///
/// The resulting month is always `(month - 1 + months) mod 12 + 1`
/// (with year carry), and the day-of-month is the smaller of the
/// starting day and the length of the target month. The time of day,
/// when the provider has one, is unchanged. Negative values subtract
/// months under the same rules, and `months == 0` returns the value
/// unchanged.
///
/// This differs from adding a month span directly in calendars whose
/// native month addition overflows a too-short target month (turning
/// `2014-05-31 + 1 month` into `2014-07-01`): the result here is
/// `2014-06-30`, in the intended month. The implementation performs
/// the provider's native month addition, then verifies it by adding
/// the inverse number of months and stepping the candidate back one
/// day at a time until the inverse lands back in the starting month.
/// Each step strictly reduces the candidate's day-of-month and the
/// clamped day is a fixed point, so the loop always terminates.
///
/// # Errors
///
/// This returns an error only when the underlying calendar does, e.g.
/// when the result would fall outside Jiff's representable range.
///
/// # Example
///
/// ```
/// use jiff::civil::date;
/// use jiff_extra::add_months;
///
/// assert_eq!(add_months(&date(2014, 5, 31), 1)?, date(2014, 6, 30));
/// assert_eq!(add_months(&date(2014, 5, 31), -1)?, date(2014, 4, 30));
/// # Ok::<(), jiff::Error>(())
/// ```
pub fn add_months<P: CalendarProvider>(
    value: &P,
    months: i64,
) -> Result<P, Error> {
    if months == 0 {
        return Ok(value.clone());
    }
    let start_month = value.month();
    let mut candidate = value.checked_add_months(months)?;
    // `months` is in range for the provider at this point, so its
    // negation is too.
    let mut reverted = candidate.checked_add_months(-months)?;
    while reverted.month() != start_month {
        trace!(
            "month addition overflowed out of month {start_month} \
             (inverse landed in month {}), stepping back one day",
            reverted.month(),
        );
        candidate = candidate.checked_add_days(-1)?;
        reverted = candidate.checked_add_months(-months)?;
    }
    Ok(candidate)
}

/// Adds a number of years while preserving the intended month.
///
/// The day-of-month is clamped only in the `Feb 29` to `Feb 28` case,
/// when the target year is not a leap year. The time of day, when the
/// provider has one, is unchanged. Negative values subtract years and
/// `years == 0` returns the value unchanged.
///
/// The implementation performs the provider's native year addition and
/// then steps back one day at a time while the month differs from the
/// starting month. With a Gregorian provider at most one step is ever
/// needed, but the loop is written generally.
///
/// # Errors
///
/// This returns an error only when the underlying calendar does, e.g.
/// when the result would fall outside Jiff's representable range.
///
/// # Example
///
/// ```
/// use jiff::civil::date;
/// use jiff_extra::add_years;
///
/// assert_eq!(add_years(&date(2012, 2, 29), 1)?, date(2013, 2, 28));
/// assert_eq!(add_years(&date(2012, 2, 29), 4)?, date(2016, 2, 29));
/// # Ok::<(), jiff::Error>(())
/// ```
pub fn add_years<P: CalendarProvider>(
    value: &P,
    years: i64,
) -> Result<P, Error> {
    if years == 0 {
        return Ok(value.clone());
    }
    let start_month = value.month();
    let mut candidate = value.checked_add_years(years)?;
    while candidate.month() != start_month {
        trace!(
            "year addition moved month {start_month} to month {}, \
             stepping back one day",
            candidate.month(),
        );
        candidate = candidate.checked_add_days(-1)?;
    }
    Ok(candidate)
}

/// Moves a number of weekday steps, skipping Saturdays and Sundays.
///
/// Each step advances (or retreats, for negative `weekdays`) one
/// calendar day and then keeps moving in the same direction while the
/// landing day is a weekend day. Weekend days are therefore never
/// counted as steps: one weekday step from a Friday, a Saturday or a
/// Sunday all land on the following Monday. `weekdays == 0` returns
/// the value unchanged, even when it falls on a weekend.
///
/// # Errors
///
/// This returns an error only when the underlying calendar does, e.g.
/// when the result would fall outside Jiff's representable range.
///
/// # Example
///
/// ```
/// use jiff::civil::{date, Weekday};
/// use jiff_extra::add_weekdays;
///
/// // 2024-09-06 is a Friday.
/// let friday = date(2024, 9, 6);
/// assert_eq!(add_weekdays(&friday, 1)?.weekday(), Weekday::Monday);
/// assert_eq!(add_weekdays(&friday, -5)?, date(2024, 8, 30));
/// # Ok::<(), jiff::Error>(())
/// ```
pub fn add_weekdays<P: CalendarProvider>(
    value: &P,
    weekdays: i64,
) -> Result<P, Error> {
    let step = if weekdays < 0 { -1 } else { 1 };
    let mut remaining = weekdays.unsigned_abs();
    let mut current = value.clone();
    while remaining > 0 {
        current = current.checked_add_days(step)?;
        while current.is_weekend() {
            current = current.checked_add_days(step)?;
        }
        remaining -= 1;
    }
    Ok(current)
}
