#[cfg(test)]
mod tests {
    use indoc::indoc;
    use sqltime_core::{
        CalendarCache, DateComponents, QueryError, QueryParameter, QueryParameterOption, SqlDate,
        TimeZone,
    };
    use std::sync::Arc;

    fn time_zones() -> Vec<TimeZone> {
        vec![
            TimeZone::Utc,
            TimeZone::Offset(0),
            TimeZone::Offset(-9 * 3600 - 1800),
            TimeZone::Offset(13 * 3600 + 45 * 60),
            TimeZone::named("Europe/Rome"),
            TimeZone::named("America/Los_Angeles"),
            TimeZone::named("Asia/Kolkata"),
            TimeZone::named("Australia/Lord_Howe"),
        ]
    }

    #[test]
    fn round_trip() {
        let cache = CalendarCache::new();
        let literals = [
            "0001-01-01 00:00:00",
            "0999-06-15 12:34:56",
            "1582-10-10 08:00:00",
            "1900-02-28 23:59:59",
            "1969-12-31 23:59:59",
            "1970-01-01 00:00:00",
            "2000-02-29 12:00:00",
            "2015-12-16 10:30:45",
            "2038-01-19 03:14:08",
            "9999-12-30 23:59:59",
        ];
        for time_zone in time_zones() {
            for literal in literals {
                let date = SqlDate::parse(literal, &time_zone, &cache).unwrap();
                assert_eq!(
                    date.to_sql(&time_zone, &cache).unwrap(),
                    format!("'{literal}'"),
                    "{literal} in {time_zone}"
                );
            }
        }
        assert_eq!(cache.len(), time_zones().len());
    }

    #[test]
    fn year_only() {
        let cache = CalendarCache::new();
        for time_zone in time_zones() {
            for year in ["0001", "1970", "2015", "9999"] {
                let date = SqlDate::parse(year, &time_zone, &cache).unwrap();
                assert_eq!(
                    date,
                    SqlDate::parse(format!("{year}-01-01 00:00:00"), &time_zone, &cache).unwrap()
                );
                assert_eq!(
                    date.to_sql(&time_zone, &cache).unwrap(),
                    format!("'{year}-01-01 00:00:00'")
                );
            }
        }
        let date = SqlDate::parse("2015", &TimeZone::Utc, &cache).unwrap();
        assert_eq!(
            date.to_sql(&TimeZone::Utc, &cache).unwrap(),
            "'2015-01-01 00:00:00'"
        );
    }

    #[test]
    fn length_selects_format() {
        let cache = CalendarCache::new();
        let mut literal = String::new();
        for len in 0..=25 {
            let result = SqlDate::parse(&literal, &TimeZone::Utc, &cache);
            if len == 4 || len == 19 {
                assert!(result.is_ok(), "`{literal}` should parse");
            } else {
                let error = result.unwrap_err();
                assert_eq!(
                    error.downcast_ref::<QueryError>(),
                    Some(&QueryError::InvalidSqlDate(literal.clone()))
                );
            }
            literal.push(match len {
                4 | 7 => '-',
                10 => ' ',
                13 | 16 => ':',
                0 | 8 => '2',
                5 => '1',
                _ => '0',
            });
        }
    }

    #[test]
    fn no_wrap_around() {
        let cache = CalendarCache::new();
        for literal in [
            "2024-13-01 00:00:00",
            "2024-02-30 00:00:00",
            "2023-02-29 00:00:00",
            "2024-06-31 00:00:00",
            "2024-06-30 24:00:00",
            "2024-06-30 23:60:00",
            "2024-06-30 23:59:60",
        ] {
            let error = SqlDate::parse(literal, &TimeZone::named("Europe/Rome"), &cache)
                .unwrap_err();
            assert_eq!(
                error.to_string(),
                format!("MySQL invalid date error: {literal}")
            );
        }
    }

    #[test]
    fn original_literal_in_error() {
        let cache = CalendarCache::new();
        let error = SqlDate::parse(" 2024-13-01 00:00:00 ", &TimeZone::Utc, &cache).unwrap_err();
        assert_eq!(
            error.downcast_ref::<QueryError>(),
            Some(&QueryError::InvalidSqlDate(" 2024-13-01 00:00:00 ".into()))
        );
        assert_eq!(
            SqlDate::parse(" 2015-12-16 10:30:45\t", &TimeZone::Utc, &cache).unwrap(),
            SqlDate::from_unix_timestamp(1_450_261_845)
        );
    }

    #[test]
    fn equality_ignores_time_zone() {
        let cache = CalendarCache::new();
        let utc = SqlDate::parse("2015-12-16 10:30:45", &TimeZone::Utc, &cache).unwrap();
        let tokyo =
            SqlDate::parse("2015-12-16 19:30:45", &TimeZone::named("Asia/Tokyo"), &cache).unwrap();
        let offset =
            SqlDate::parse("2015-12-16 07:00:45", &TimeZone::Offset(-12_600), &cache).unwrap();
        assert_eq!(utc, tokyo);
        assert_eq!(utc, offset);
        assert_ne!(utc, SqlDate::from_unix_timestamp(utc.unix_timestamp() + 1));
        assert!(utc < SqlDate::from_unix_timestamp(utc.unix_timestamp() + 1));
    }

    #[test]
    fn daylight_saving() {
        let cache = CalendarCache::new();
        let los_angeles = TimeZone::named("America/Los_Angeles");
        let winter = SqlDate::parse("2024-01-15 12:00:00", &los_angeles, &cache).unwrap();
        let summer = SqlDate::parse("2024-07-15 12:00:00", &los_angeles, &cache).unwrap();
        assert_eq!(
            winter.to_sql(&TimeZone::Utc, &cache).unwrap(),
            "'2024-01-15 20:00:00'"
        );
        assert_eq!(
            summer.to_sql(&TimeZone::Utc, &cache).unwrap(),
            "'2024-07-15 19:00:00'"
        );
        let skipped = SqlDate::parse("2024-03-10 02:30:00", &los_angeles, &cache).unwrap();
        assert_eq!(
            skipped.to_sql(&los_angeles, &cache).unwrap(),
            "'2024-03-10 03:30:00'"
        );
        assert_eq!(
            skipped
                .components(&los_angeles, &cache)
                .unwrap(),
            DateComponents::new(2024, 3, 10, 3, 30, 0)
        );
    }

    #[test]
    fn bind_into_query() {
        let option = QueryParameterOption::new(
            TimeZone::named("Europe/Rome"),
            Arc::new(CalendarCache::new()),
        );
        let from = SqlDate::parse("2015-12-16 10:30:45", &option.time_zone, &option.calendars)
            .unwrap();
        let to = SqlDate::from_unix_timestamp(from.unix_timestamp() + 86_400);
        let mut query = String::from("SELECT id, total\nFROM orders\nWHERE created_at BETWEEN ");
        from.write_query_parameter(&mut query, &option).unwrap();
        query.push_str(" AND ");
        to.write_query_parameter(&mut query, &option).unwrap();
        query.push_str(" AND shipped_at IS ");
        None::<SqlDate>.write_query_parameter(&mut query, &option).unwrap();
        query.push(';');
        assert_eq!(
            query,
            indoc! {"
                SELECT id, total
                FROM orders
                WHERE created_at BETWEEN '2015-12-16 10:30:45' AND '2015-12-17 10:30:45' AND shipped_at IS NULL;"
            }
        );
    }
}
