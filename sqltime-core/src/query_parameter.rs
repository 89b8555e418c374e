use crate::{CalendarCache, Context, Result, SqlDate, TimeZone, truncate_long};
use std::{env, sync::Arc, time::SystemTime};
use time::OffsetDateTime;
use url::Url;

/// Session state needed to render values as query parameters.
///
/// Every connection of a client normally shares the same [`CalendarCache`], and each
/// one carries the time zone its session runs in.
#[derive(Default, Debug, Clone)]
pub struct QueryParameterOption {
    pub time_zone: TimeZone,
    pub calendars: Arc<CalendarCache>,
}

impl QueryParameterOption {
    /// Query parameter of a connection URL holding the session time zone.
    pub const TIME_ZONE_PARAM: &'static str = "time_zone";
    /// Environment variable read when the URL does not specify a time zone.
    pub const TIME_ZONE_ENV: &'static str = "SQLTIME_TIME_ZONE";

    pub fn new(time_zone: TimeZone, calendars: Arc<CalendarCache>) -> Self {
        Self {
            time_zone,
            calendars,
        }
    }

    /// Read the session options from a connection URL.
    ///
    /// The time zone comes from the `time_zone` parameter
    /// (`mysql://user@localhost/shop?time_zone=Europe%2FRome`), then from the
    /// `SQLTIME_TIME_ZONE` environment variable, and defaults to UTC. A `+` sign must be
    /// percent encoded as `%2B`. The calendar is built right away, so an unknown time
    /// zone is reported here rather than at the first query.
    pub fn from_url(url: &str, calendars: Arc<CalendarCache>) -> Result<Self> {
        let context = || {
            format!(
                "While reading the session options from the url `{}`",
                truncate_long!(url)
            )
        };
        let url = Url::parse(url).with_context(context)?;
        let time_zone = url
            .query_pairs()
            .find(|(k, _)| k == Self::TIME_ZONE_PARAM)
            .map(|(_, v)| v.into_owned())
            .or_else(|| env::var(Self::TIME_ZONE_ENV).ok());
        let time_zone = match time_zone {
            Some(v) => v.parse::<TimeZone>().with_context(context)?,
            None => TimeZone::Utc,
        };
        calendars
            .with_calendar(&time_zone, |_| ())
            .with_context(context)
            .map_err(|e| {
                log::error!("{:#}", e);
                e
            })?;
        Ok(Self::new(time_zone, calendars))
    }
}

/// Value that can be embedded in a SQL query as a literal.
pub trait QueryParameter {
    /// Append the literal to `out`.
    fn write_query_parameter(&self, out: &mut String, option: &QueryParameterOption)
    -> Result<()>;

    fn query_parameter(&self, option: &QueryParameterOption) -> Result<String> {
        let mut out = String::new();
        self.write_query_parameter(&mut out, option)?;
        Ok(out)
    }
}

impl QueryParameter for SqlDate {
    fn write_query_parameter(
        &self,
        out: &mut String,
        option: &QueryParameterOption,
    ) -> Result<()> {
        self.write_sql(out, &option.time_zone, &option.calendars)
    }
}

macro_rules! impl_query_parameter {
    ($source:ty) => {
        impl QueryParameter for $source {
            fn write_query_parameter(
                &self,
                out: &mut String,
                option: &QueryParameterOption,
            ) -> Result<()> {
                SqlDate::from(*self).write_query_parameter(out, option)
            }
        }
    };
}
impl_query_parameter!(OffsetDateTime);
impl_query_parameter!(SystemTime);
impl_query_parameter!(jiff::Timestamp);

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn write_query_parameter(
        &self,
        out: &mut String,
        option: &QueryParameterOption,
    ) -> Result<()> {
        match self {
            Some(v) => v.write_query_parameter(out, option),
            None => {
                out.push_str("NULL");
                Ok(())
            }
        }
    }
}

impl<T: QueryParameter + ?Sized> QueryParameter for &T {
    fn write_query_parameter(
        &self,
        out: &mut String,
        option: &QueryParameterOption,
    ) -> Result<()> {
        (**self).write_query_parameter(out, option)
    }
}

#[cfg(test)]
mod tests {
    use super::{QueryParameter, QueryParameterOption};
    use crate::{CalendarCache, SqlDate, TimeZone};
    use std::sync::Arc;
    use time::macros::datetime;

    #[test]
    fn from_url() {
        let cache = Arc::new(CalendarCache::new());
        let option = QueryParameterOption::from_url(
            "mysql://root@localhost:3306/shop?time_zone=Asia%2FTokyo&charset=utf8mb4",
            cache.clone(),
        )
        .unwrap();
        assert_eq!(option.time_zone, TimeZone::named("Asia/Tokyo"));
        assert!(cache.contains(&TimeZone::named("Asia/Tokyo")));
        let option =
            QueryParameterOption::from_url("mysql://localhost/db?time_zone=%2B05:30", cache.clone())
                .unwrap();
        assert_eq!(option.time_zone, TimeZone::Offset(19_800));
        assert!(
            QueryParameterOption::from_url("mysql://localhost/db?time_zone=Moon%2FTycho", cache.clone())
                .is_err()
        );
        assert!(!cache.contains(&TimeZone::named("Moon/Tycho")));
        assert!(QueryParameterOption::from_url("not a url", cache).is_err());
    }

    #[test]
    fn render() {
        let option = QueryParameterOption::new(
            TimeZone::named("America/New_York"),
            Arc::new(CalendarCache::new()),
        );
        let date = datetime!(2015-12-16 10:30:45 UTC);
        assert_eq!(
            date.query_parameter(&option).unwrap(),
            "'2015-12-16 05:30:45'"
        );
        assert_eq!(
            SqlDate::from(date).query_parameter(&option).unwrap(),
            "'2015-12-16 05:30:45'"
        );
        assert_eq!(
            Some(SqlDate::from(date)).query_parameter(&option).unwrap(),
            "'2015-12-16 05:30:45'"
        );
        assert_eq!(None::<SqlDate>.query_parameter(&option).unwrap(), "NULL");
        let timestamp = jiff::Timestamp::from_second(0).unwrap();
        assert_eq!(
            (&timestamp).query_parameter(&option).unwrap(),
            "'1969-12-31 19:00:00'"
        );
        assert_eq!(
            QueryParameterOption::default().time_zone,
            TimeZone::Utc
        );
    }
}
