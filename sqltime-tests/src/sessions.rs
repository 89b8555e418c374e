use sqltime::{CalendarCache, QueryParameter, QueryParameterOption, SqlDate, TimeZone};
use std::sync::Arc;
use time::macros::datetime;
use tokio::task::JoinSet;

/// Connections with different session time zones binding the same instant concurrently.
pub async fn sessions(calendars: Arc<CalendarCache>) {
    let urls = [
        ("mysql://app@db-1/shop?time_zone=UTC", "'2015-12-16 10:30:45'"),
        ("mysql://app@db-2/shop?time_zone=%2B09:00", "'2015-12-16 19:30:45'"),
        ("mysql://app@db-3/shop?time_zone=-03:00", "'2015-12-16 07:30:45'"),
        (
            "mysql://app@db-4/shop?charset=utf8mb4&time_zone=Europe%2FRome",
            "'2015-12-16 11:30:45'",
        ),
        (
            "mysql://app@db-5/shop?time_zone=America/New_York",
            "'2015-12-16 05:30:45'",
        ),
    ];
    let date = SqlDate::from(datetime!(2015-12-16 10:30:45 UTC));
    let mut tasks = JoinSet::new();
    for (url, expected) in urls {
        let option = QueryParameterOption::from_url(url, calendars.clone())
            .expect("Could not read the session options from the url");
        tasks.spawn(async move {
            for _ in 0..100 {
                let mut query = String::from("SELECT * FROM orders WHERE created_at > ");
                date.write_query_parameter(&mut query, &option)
                    .expect("Could not bind the date");
                assert_eq!(
                    query,
                    format!("SELECT * FROM orders WHERE created_at > {expected}")
                );
                tokio::task::yield_now().await;
            }
            option.time_zone
        });
    }
    let mut time_zones = Vec::new();
    while let Some(time_zone) = tasks.join_next().await {
        time_zones.push(time_zone.expect("Binding task panicked"));
    }
    assert_eq!(time_zones.len(), urls.len());
    assert!(time_zones.contains(&TimeZone::Offset(9 * 3600)));
    assert!(time_zones.contains(&TimeZone::Offset(-3 * 3600)));
    for time_zone in &time_zones {
        assert!(calendars.contains(time_zone));
    }
}
