mod concurrency;
mod literals;
mod round_trip;
mod sessions;

pub use concurrency::concurrent_calendars;
pub use literals::{invalid_literals, year_only};
pub use round_trip::round_trip;
pub use sessions::sessions;

use log::LevelFilter;
use sqltime::{CalendarCache, TimeZone};
use std::{env, sync::Arc};

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Time zones every scenario runs in: fixed offsets, zones with daylight saving time
/// and zones with non hourly offsets.
pub fn time_zones() -> Vec<TimeZone> {
    vec![
        TimeZone::Utc,
        TimeZone::Offset(0),
        TimeZone::Offset(5 * 3600 + 45 * 60),
        TimeZone::Offset(-11 * 3600),
        TimeZone::named("Europe/Rome"),
        TimeZone::named("America/New_York"),
        TimeZone::named("America/St_Johns"),
        TimeZone::named("Asia/Tokyo"),
        TimeZone::named("Pacific/Chatham"),
    ]
}

pub async fn execute_tests(calendars: Arc<CalendarCache>) {
    round_trip(&calendars);
    year_only(&calendars);
    invalid_literals(&calendars);
    concurrent_calendars(&calendars);
    sessions(calendars.clone()).await;
    for time_zone in time_zones() {
        assert!(
            calendars.contains(&time_zone),
            "Calendar for `{time_zone}` was not cached"
        );
    }
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
