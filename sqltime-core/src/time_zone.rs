use crate::{Context, Error, Result, parse_digits};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Identity of a time zone, as configured on a connection or session.
///
/// It is only a key: it does not hold any time zone data. The data is loaded by
/// [`TimeZone::resolve`] when a [`Calendar`](crate::Calendar) is built for it, which is
/// also the point where an unknown name is detected.
///
/// The string form follows the values a SQL session accepts for its time zone:
/// ```rust
/// use sqltime_core::TimeZone;
/// assert_eq!("UTC".parse::<TimeZone>().unwrap(), TimeZone::Utc);
/// assert_eq!("+09:00".parse::<TimeZone>().unwrap(), TimeZone::Offset(9 * 3600));
/// assert_eq!("SYSTEM".parse::<TimeZone>().unwrap(), TimeZone::System);
/// assert_eq!(
///     "Europe/Rome".parse::<TimeZone>().unwrap(),
///     TimeZone::Named("Europe/Rome".into())
/// );
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimeZone {
    #[default]
    Utc,
    /// Fixed offset, in seconds east of UTC.
    Offset(i32),
    /// IANA time zone identifier, like `America/New_York`.
    Named(String),
    /// Time zone of the host running the client.
    System,
}

impl TimeZone {
    /// Largest offset accepted in the `[+-]HH:MM` form.
    pub const MAX_OFFSET_HOURS: i32 = 14;

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Load the time zone data this identity refers to.
    pub fn resolve(&self) -> Result<jiff::tz::TimeZone> {
        match self {
            Self::Utc => Ok(jiff::tz::TimeZone::UTC),
            Self::Offset(seconds) => {
                let offset = jiff::tz::Offset::from_seconds(*seconds)
                    .with_context(|| format!("Time zone offset `{self}` is out of range"))?;
                Ok(jiff::tz::TimeZone::fixed(offset))
            }
            Self::Named(name) => {
                jiff::tz::TimeZone::get(name).with_context(|| format!("Unknown time zone `{name}`"))
            }
            Self::System => {
                jiff::tz::TimeZone::try_system().context("Cannot determine the system time zone")
            }
        }
    }
}

fn parse_offset(value: &str) -> Option<i32> {
    let (sign, rest) = match value.as_bytes().first()? {
        b'+' => (1, &value[1..]),
        b'-' => (-1, &value[1..]),
        _ => return None,
    };
    if rest.len() != 5 || rest.as_bytes()[2] != b':' {
        return None;
    }
    let hours: i32 = parse_digits(&rest[..2])?;
    let minutes: i32 = parse_digits(&rest[3..])?;
    if hours > TimeZone::MAX_OFFSET_HOURS || minutes >= 60 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

impl FromStr for TimeZone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        if value.is_empty() {
            return Err(Error::msg("Time zone name cannot be empty"));
        }
        if ["UTC", "Z", "GMT"]
            .iter()
            .any(|v| value.eq_ignore_ascii_case(v))
        {
            return Ok(Self::Utc);
        }
        if ["SYSTEM", "LOCAL"]
            .iter()
            .any(|v| value.eq_ignore_ascii_case(v))
        {
            return Ok(Self::System);
        }
        if value.starts_with(['+', '-']) {
            return parse_offset(value).map(Self::Offset).ok_or_else(|| {
                Error::msg(format!(
                    "Invalid time zone offset `{value}`, expected `+HH:MM` or `-HH:MM`"
                ))
            });
        }
        Ok(Self::Named(value.into()))
    }
}

impl Display for TimeZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utc => f.write_str("UTC"),
            Self::Offset(seconds) => {
                let sign = if *seconds < 0 { '-' } else { '+' };
                let seconds = seconds.unsigned_abs();
                write!(f, "{sign}{:02}:{:02}", seconds / 3600, seconds % 3600 / 60)?;
                if seconds % 60 != 0 {
                    write!(f, ":{:02}", seconds % 60)?;
                }
                Ok(())
            }
            Self::Named(name) => f.write_str(name),
            Self::System => f.write_str("SYSTEM"),
        }
    }
}
