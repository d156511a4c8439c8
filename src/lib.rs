/*!
This crate provides a small set of conveniences on top of [`jiff`]:
getter/setter style accessors, comparison helpers and "intent
preserving" calendar arithmetic. All calendar correctness (leap years,
month lengths, time zones, DST) is owned by Jiff itself; this crate
only decides *which* Jiff operations to compose.

# Organization

There are three pieces:

* A [`CalendarProvider`] trait describing the day-granular primitives
the arithmetic needs (adding days, months and years, and reading the
month and weekday). It is implemented for [`jiff::civil::Date`],
[`jiff::civil::DateTime`] and [`jiff::Zoned`].
* The free functions [`add_months`], [`add_years`] and
[`add_weekdays`], generic over any `CalendarProvider`.
* A [`DateTime`] wrapper around [`jiff::Zoned`] that bundles the
arithmetic with field accessors, `with_` setters and comparison
helpers, for callers who want one type instead of a trait import.

# Intent preserving arithmetic

Naive month arithmetic either overflows into the next month (so
`2014-05-31 + 1 month` becomes `2014-07-01`) or silently changes the
day. The arithmetic here always stays in the intended target month and
clamps only the day-of-month:

```
use jiff::civil::date;
use jiff_extra::add_months;

let d = date(2014, 5, 31);
assert_eq!(add_months(&d, 1)?, date(2014, 6, 30));
assert_eq!(add_months(&d, 2)?, date(2014, 7, 31));

// The non-leap February clamp:
assert_eq!(add_months(&date(2014, 1, 31), 1)?, date(2014, 2, 28));
// ... and the leap year one:
assert_eq!(add_months(&date(2012, 1, 30), 1)?, date(2012, 2, 29));

# Ok::<(), jiff::Error>(())
```

Year addition keeps the month even when `Feb 29` lands in a non-leap
year, and weekday addition steps over weekends without counting them:

```
use jiff::civil::{date, Weekday};
use jiff_extra::{add_weekdays, add_years};

assert_eq!(add_years(&date(2012, 2, 29), 1)?, date(2013, 2, 28));

// 2024-09-02 is a Monday. Seven weekday steps skip two weekends
// and land on a Wednesday.
let wed = add_weekdays(&date(2024, 9, 2), 7)?;
assert_eq!(wed, date(2024, 9, 11));
assert_eq!(wed.weekday(), Weekday::Wednesday);

# Ok::<(), jiff::Error>(())
```

# The `DateTime` wrapper

[`DateTime`] composes a [`jiff::Zoned`] rather than re-exposing all of
Jiff's surface. Conversions to and from `Zoned` are cheap and explicit
(`From` impls plus [`DateTime::to_zoned`]):

```
use jiff::tz::TimeZone;
use jiff_extra::DateTime;

let dt = DateTime::new(2015, 4, 20, 13, 37, 42, TimeZone::UTC)?;
assert_eq!(dt.quarter(), 2);
assert_eq!(dt.add_months(9)?.year(), 2016);
assert!(dt.is_before(&dt.add_weekdays(1)?));

# Ok::<(), jiff::Error>(())
```

# Errors

This crate defines no error type of its own. Every fallible operation
returns [`jiff::Error`] (re-exported as [`Error`]), exactly as raised
by the underlying Jiff primitive.

# Crate features

* **logging** - Routes a trace of the arithmetic's corrective steps
through the [`log`](https://docs.rs/log) crate. When disabled, the
log statements compile to nothing.
* **serde** - Implements `serde::Serialize` for [`Parts`] and enables
`jiff/serde`.
*/

#![deny(missing_docs)]

pub use jiff::Error;

pub use crate::{
    arith::{add_months, add_weekdays, add_years},
    datetime::{DateTime, Parts},
    provider::CalendarProvider,
};

#[macro_use]
mod logging;

mod arith;
mod datetime;
mod provider;
