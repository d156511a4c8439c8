use jiff::{
    civil::{date, Weekday},
    tz::TimeZone,
};
use jiff_extra::{add_months, add_weekdays, add_years, DateTime};

type Result = std::result::Result<(), jiff::Error>;

#[test]
fn month_arithmetic_end_to_end() -> Result {
    let _ = env_logger::try_init();

    let d = DateTime::new(2014, 5, 31, 12, 0, 0, TimeZone::UTC)?;
    assert_eq!(
        d.add_months(1)?,
        DateTime::new(2014, 6, 30, 12, 0, 0, TimeZone::UTC)?,
    );
    assert_eq!(
        d.add_months(2)?,
        DateTime::new(2014, 7, 31, 12, 0, 0, TimeZone::UTC)?,
    );
    assert_eq!(
        d.sub_months(1)?,
        DateTime::new(2014, 4, 30, 12, 0, 0, TimeZone::UTC)?,
    );
    assert_eq!(
        d.sub_months(2)?,
        DateTime::new(2014, 3, 31, 12, 0, 0, TimeZone::UTC)?,
    );
    Ok(())
}

#[test]
fn february_clamps() -> Result {
    assert_eq!(add_months(&date(2014, 1, 31), 1)?, date(2014, 2, 28));
    assert_eq!(add_months(&date(2012, 1, 30), 1)?, date(2012, 2, 29));
    assert_eq!(add_years(&date(2012, 2, 29), 1)?, date(2013, 2, 28));
    Ok(())
}

#[test]
fn weekdays_from_every_starting_point() -> Result {
    // 2024-09-02 is a Monday.
    let monday = date(2024, 9, 2);
    assert_eq!(monday.weekday(), Weekday::Monday);
    assert_eq!(add_weekdays(&monday, 7)?.weekday(), Weekday::Wednesday);

    let saturday = date(2024, 9, 7);
    let sunday = date(2024, 9, 8);
    assert_eq!(add_weekdays(&saturday, 1)?.weekday(), Weekday::Monday);
    assert_eq!(add_weekdays(&sunday, 1)?.weekday(), Weekday::Monday);
    assert_eq!(add_weekdays(&sunday, 1)?, date(2024, 9, 9));
    Ok(())
}

#[test]
fn month_diffs_across_a_year() -> Result {
    let jan1 = DateTime::new(2014, 1, 1, 0, 0, 0, TimeZone::UTC)?;
    let dec31 = DateTime::new(2014, 12, 31, 23, 59, 59, TimeZone::UTC)?;
    assert_eq!(jan1.diff_in_months(&dec31), 11);
    assert_eq!(jan1.diff_in_months(&jan1.add_years(1)?), 12);

    // Start and end of the same month are zero months apart; the
    // first of the next month is one.
    for month in 1..=12 {
        let start = DateTime::new(2014, month, 1, 0, 0, 0, TimeZone::UTC)?;
        let end = start.add_months(1)?.add_days(-1)?;
        assert_eq!(start.diff_in_months(&end), 0, "month {month}");
        assert_eq!(start.diff_in_months(&start.add_months(1)?), 1);
    }
    Ok(())
}

#[test]
fn wrapper_survives_a_getter_setter_tour() -> Result {
    let dt = DateTime::new(2000, 6, 1, 0, 0, 0, TimeZone::UTC)?
        .with_day(14)?
        .with_month(12)?
        .with_year(1991)?
        .with_hour(13)?
        .with_minute(37)?
        .with_second(42)?;

    assert_eq!(dt.weekday(), Weekday::Saturday);
    assert_eq!(dt.days_in_month(), 31);
    assert_eq!(dt.week_of_year(), 50);
    assert_eq!(dt.week_of_month(), 2);
    assert_eq!(dt.day_of_year(), 348);
    assert_eq!(dt.quarter(), 4);
    assert!(!dt.is_dst());
    assert_eq!(dt.to_string(), "1991-12-14T13:37:42+00:00[UTC]");
    Ok(())
}

#[test]
fn parts_reflect_the_datetime() -> Result {
    let dt = DateTime::new(2011, 6, 17, 22, 35, 42, TimeZone::UTC)?;
    let parts = dt.parts();
    assert_eq!(parts.year, 2011);
    assert_eq!(parts.month, 6);
    assert_eq!(parts.quarter, 2);
    assert_eq!(parts.weekday, 5); // a Friday
    assert_eq!(parts.week_of_year, 24);
    assert_eq!(parts.timestamp, 1308350142);
    assert_eq!(parts.timestamp_millis, parts.timestamp * 1000);
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn parts_serialize_flat() -> Result {
    let dt = DateTime::new(2011, 6, 17, 22, 35, 42, TimeZone::UTC)?;
    let json = serde_json::to_value(dt.parts()).unwrap();
    assert_eq!(json["year"], 2011);
    assert_eq!(json["weekday"], 5);
    assert_eq!(json["timestamp"], 1308350142);
    Ok(())
}
