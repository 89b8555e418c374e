use crate::{CalendarCache, Context, DateComponents, QueryError, Result, TimeZone};
use std::{
    fmt::{self, Display, Formatter, Write},
    time::{SystemTime, UNIX_EPOCH},
};
use time::{
    OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

const DESCRIPTION: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] +0000");

/// Point in time as stored in a SQL `DATETIME` column, with a resolution of one second.
///
/// The value does not carry a time zone: the time zone of the session is supplied
/// when a literal is parsed and when the value is rendered back into SQL. Two values
/// are equal when they denote the same instant, whatever time zone produced them.
///
/// ```rust
/// use sqltime_core::{CalendarCache, SqlDate, TimeZone};
/// let cache = CalendarCache::new();
/// let date = SqlDate::parse("2015-12-16 10:30:45", &TimeZone::Utc, &cache).unwrap();
/// assert_eq!(date.unix_timestamp(), 1_450_261_845);
/// assert_eq!(
///     date.to_sql(&TimeZone::named("Asia/Tokyo"), &cache).unwrap(),
///     "'2015-12-16 19:30:45'"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqlDate {
    timestamp: i64,
}

impl SqlDate {
    pub fn new(value: OffsetDateTime) -> Self {
        Self {
            timestamp: value.unix_timestamp(),
        }
    }

    /// Value from whole seconds since 1970-01-01 00:00:00 UTC.
    pub const fn from_unix_timestamp(timestamp: i64) -> Self {
        Self { timestamp }
    }

    /// Current wall clock time.
    pub fn now() -> Self {
        Self::new(OffsetDateTime::now_utc())
    }

    /// Parse a SQL `YYYY` or `YYYY-MM-DD HH:MM:SS` literal as a local time in `time_zone`.
    ///
    /// Any malformed literal, or one naming a date or time that does not exist (like
    /// month 13 or February 30th), fails with [`QueryError::InvalidSqlDate`] carrying
    /// the literal unchanged. The time zone is only resolved for a well formed literal,
    /// one that cannot be resolved then fails with its own error.
    pub fn parse(
        literal: impl AsRef<str>,
        time_zone: &TimeZone,
        calendars: &CalendarCache,
    ) -> Result<Self> {
        let literal = literal.as_ref();
        let timestamp = calendars.with_extracted(
            time_zone,
            || DateComponents::parse(literal),
            |calendar, components| calendar.instant(&components),
        )?;
        match timestamp {
            Some(timestamp) => Ok(Self { timestamp }),
            None => {
                log::debug!(
                    "Cannot parse `{}` as a SQL date in the time zone `{}`",
                    crate::truncate_long!(literal),
                    time_zone
                );
                Err(QueryError::invalid_sql_date(literal).into())
            }
        }
    }

    pub const fn unix_timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Local date and time of this instant in `time_zone`.
    pub fn components(
        &self,
        time_zone: &TimeZone,
        calendars: &CalendarCache,
    ) -> Result<DateComponents> {
        calendars.with_calendar(time_zone, |calendar| calendar.components(self.timestamp))
    }

    /// Append the quoted `'YYYY-MM-DD HH:MM:SS'` literal, in `time_zone`, to `out`.
    pub fn write_sql(
        &self,
        out: &mut String,
        time_zone: &TimeZone,
        calendars: &CalendarCache,
    ) -> Result<()> {
        let components = self.components(time_zone, calendars)?;
        let _ = write!(out, "'{components}'");
        Ok(())
    }

    /// Quoted `'YYYY-MM-DD HH:MM:SS'` literal in `time_zone`, ready to be embedded in a query.
    ///
    /// The only possible error is a time zone that cannot be resolved.
    pub fn to_sql(&self, time_zone: &TimeZone, calendars: &CalendarCache) -> Result<String> {
        let mut out = String::with_capacity(21);
        self.write_sql(&mut out, time_zone, calendars)?;
        Ok(out)
    }

    pub fn to_offset_date_time(&self) -> Result<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp(self.timestamp)
            .with_context(|| format!("Timestamp {} is out of range", self.timestamp))
    }

    pub fn to_timestamp(&self) -> Result<jiff::Timestamp> {
        jiff::Timestamp::from_second(self.timestamp)
            .with_context(|| format!("Timestamp {} is out of range", self.timestamp))
    }
}

impl From<OffsetDateTime> for SqlDate {
    fn from(value: OffsetDateTime) -> Self {
        Self::new(value)
    }
}

impl From<SystemTime> for SqlDate {
    fn from(value: SystemTime) -> Self {
        let timestamp = match value.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
            Err(e) => {
                let before = e.duration();
                let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
                // Rounds toward the past, like the positive side does.
                let partial = (before.subsec_nanos() > 0) as i64;
                secs.saturating_neg().saturating_sub(partial)
            }
        };
        Self { timestamp }
    }
}

impl From<jiff::Timestamp> for SqlDate {
    fn from(value: jiff::Timestamp) -> Self {
        let partial = (value.subsec_nanosecond() < 0) as i64;
        Self {
            timestamp: value.as_second() - partial,
        }
    }
}

impl TryFrom<SqlDate> for OffsetDateTime {
    type Error = crate::Error;

    fn try_from(value: SqlDate) -> Result<Self> {
        value.to_offset_date_time()
    }
}

/// Diagnostic rendering in UTC, like `2015-12-16 10:30:45 +0000`. Not a SQL literal.
impl Display for SqlDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match OffsetDateTime::from_unix_timestamp(self.timestamp) {
            Ok(value) => f.write_str(&value.format(DESCRIPTION).map_err(|_| fmt::Error)?),
            Err(..) => write!(f, "@{}", self.timestamp),
        }
    }
}
