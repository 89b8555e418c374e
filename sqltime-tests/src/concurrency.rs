use crate::time_zones;
use sqltime::{CalendarCache, SqlDate};
use std::thread;

/// Many threads parsing and rendering in the same time zones at once.
pub fn concurrent_calendars(calendars: &CalendarCache) {
    let time_zones = time_zones();
    let before = calendars.len();
    thread::scope(|scope| {
        for worker in 0..32_i64 {
            let time_zones = &time_zones;
            scope.spawn(move || {
                for i in 0..200_i64 {
                    let time_zone = &time_zones[((worker + i) as usize) % time_zones.len()];
                    {
                        let calendar = calendars
                            .get_or_create(time_zone)
                            .expect("Could not get the calendar");
                        assert_eq!(calendar.time_zone(), time_zone);
                    }
                    let date =
                        SqlDate::from_unix_timestamp(1_000_000_000 + worker * 7_919 + i * 86_413);
                    let sql = date
                        .to_sql(time_zone, calendars)
                        .expect("Could not render the date as SQL");
                    // A repeated local time parses back to its first occurrence.
                    let parsed = SqlDate::parse(sql.trim_matches('\''), time_zone, calendars)
                        .expect("Could not parse the rendered date");
                    assert!(parsed <= date, "`{sql}` in `{time_zone}`");
                    assert_eq!(
                        parsed
                            .to_sql(time_zone, calendars)
                            .expect("Could not render the date as SQL"),
                        sql
                    );
                }
            });
        }
    });
    let after = calendars.len();
    assert!(after >= time_zones.len(), "Missing calendars");
    assert!(after - before <= time_zones.len(), "Duplicated calendars");
    for time_zone in &time_zones {
        assert!(calendars.contains(time_zone));
    }
}
