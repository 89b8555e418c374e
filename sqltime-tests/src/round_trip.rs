use crate::time_zones;
use sqltime::{CalendarCache, SqlDate};

fn literals() -> Vec<&'static str> {
    let mut result = Vec::new();
    if !cfg!(feature = "disable-old-dates") {
        result.extend([
            "0001-01-01 00:00:00",
            "1000-03-01 04:05:06",
            "1850-06-15 12:00:00",
        ]);
    }
    result.extend([
        "1970-01-01 00:00:00",
        "1999-12-31 23:59:59",
        "2000-01-01 00:00:00",
        "2012-06-30 23:59:59",
        "2015-12-16 10:30:45",
        "2024-02-29 18:00:00",
        "2099-07-04 09:08:07",
        "9999-12-30 12:00:00",
    ]);
    result
}

pub fn round_trip(calendars: &CalendarCache) {
    for time_zone in time_zones() {
        for literal in literals() {
            let date = SqlDate::parse(literal, &time_zone, calendars)
                .unwrap_or_else(|e| panic!("Could not parse `{literal}` in `{time_zone}`: {e:#}"));
            let sql = date
                .to_sql(&time_zone, calendars)
                .expect("Could not render the date as SQL");
            assert_eq!(sql, format!("'{literal}'"), "Round trip in `{time_zone}`");
            let again = SqlDate::parse(sql.trim_matches('\''), &time_zone, calendars)
                .expect("Could not parse the rendered literal");
            assert_eq!(again, date);
        }
    }

    // The same instant, rendered in different time zones
    let date = SqlDate::from_unix_timestamp(1_450_261_845);
    for (time_zone, expected) in time_zones().into_iter().zip([
        "'2015-12-16 10:30:45'",
        "'2015-12-16 10:30:45'",
        "'2015-12-16 16:15:45'",
        "'2015-12-15 23:30:45'",
        "'2015-12-16 11:30:45'",
        "'2015-12-16 05:30:45'",
        "'2015-12-16 07:00:45'",
        "'2015-12-16 19:30:45'",
        "'2015-12-17 00:15:45'",
    ]) {
        assert_eq!(
            date.to_sql(&time_zone, calendars)
                .expect("Could not render the date as SQL"),
            expected,
            "Rendering in `{time_zone}`"
        );
        assert_eq!(
            SqlDate::parse(expected.trim_matches('\''), &time_zone, calendars)
                .expect("Could not parse the expected literal"),
            date
        );
    }
}
