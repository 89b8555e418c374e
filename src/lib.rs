//! SQL temporal values for database clients.
//!
//! [`SqlDate`] holds an instant. It is parsed from the `YYYY` and `YYYY-MM-DD HH:MM:SS`
//! literals a server sends back and rendered as a quoted literal when bound into a
//! query, both in the time zone of the session. The calendars doing the conversions
//! live in a [`CalendarCache`] shared by the whole client.
//!
//! ```rust
//! use sqltime::{CalendarCache, SqlDate, TimeZone};
//! let cache = CalendarCache::new();
//! let rome = TimeZone::named("Europe/Rome");
//! let date = SqlDate::parse("2015-12-16 10:30:45", &rome, &cache).unwrap();
//! assert_eq!(date.to_sql(&TimeZone::Utc, &cache).unwrap(), "'2015-12-16 09:30:45'");
//! ```
pub use sqltime_core::*;
