use crate::{silent_logs, time_zones};
use sqltime::{CalendarCache, QueryError, SqlDate, TimeZone};

pub fn year_only(calendars: &CalendarCache) {
    for time_zone in time_zones() {
        for year in ["1970", "2015", "2038", "9999"] {
            let date = SqlDate::parse(year, &time_zone, calendars)
                .expect("Could not parse the year");
            let full = SqlDate::parse(format!("{year}-01-01 00:00:00"), &time_zone, calendars)
                .expect("Could not parse the first second of the year");
            assert_eq!(date, full, "Year `{year}` in `{time_zone}`");
            assert_eq!(
                date.to_sql(&time_zone, calendars)
                    .expect("Could not render the date as SQL"),
                format!("'{year}-01-01 00:00:00'")
            );
        }
    }
    let date = SqlDate::parse("2015", &TimeZone::Utc, calendars).expect("Could not parse 2015");
    assert_eq!(date.unix_timestamp(), 1_420_070_400);
}

pub fn invalid_literals(calendars: &CalendarCache) {
    let literals = [
        "",
        "    ",
        "201",
        "20150",
        "2015-12-16",
        "2015-12-16 10:30",
        "2015-12-16 10:30:45.123456",
        "2015-12-16T10:30:45",
        "2015-12-16 10:30:45Z",
        "16-12-2015 10:30:45",
        "2015-12-16 1O:30:45",
        "2015-+2-16 10:30:45",
        "-015-12-16 10:30:45",
        "0000",
        "0000-01-01 00:00:00",
        "2015-00-16 10:30:45",
        "2015-12-00 10:30:45",
        "2024-13-01 00:00:00",
        "2023-02-29 00:00:00",
        "2024-02-30 00:00:00",
        "2024-04-31 00:00:00",
        "2024-01-01 24:00:00",
        "2024-01-01 00:60:00",
        "2024-01-01 00:00:60",
        "２０１５",
    ];
    silent_logs! {
        for time_zone in time_zones() {
            for literal in literals {
                let error = SqlDate::parse(literal, &time_zone, calendars)
                    .expect_err("The literal should have been rejected");
                assert_eq!(
                    error.downcast_ref::<QueryError>(),
                    Some(&QueryError::InvalidSqlDate(literal.into())),
                    "Literal `{literal}` in `{time_zone}`"
                );
            }
        }
    }
}
