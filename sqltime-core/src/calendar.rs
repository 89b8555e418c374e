use crate::{Result, TimeZone, parse_digits};
use jiff::{Timestamp, civil};
use std::fmt::{self, Display, Formatter};

pub const SECS_IN_DAY: i64 = 86_400;

/// Days between 0000-03-01 and 1970-01-01 in the proleptic Gregorian calendar.
const EPOCH_SHIFT: i64 = 719_468;
const DAYS_IN_400_YEARS: i64 = 146_097;

/// Broken down date and time of day, the way a SQL literal spells it.
///
/// Years use astronomical numbering: year `0` exists and earlier years are negative.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateComponents {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateComponents {
    pub const YEAR_LEN: usize = 4;
    pub const DATETIME_LEN: usize = 19;

    pub const fn new(year: i64, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Extract the components of a fixed width SQL literal.
    ///
    /// Surrounding whitespace is ignored, then the length selects the format:
    /// * `YYYY` (4): January 1st at midnight of that year.
    /// * `YYYY-MM-DD HH:MM:SS` (19).
    ///
    /// Every field must be made of digits only and year, month and day must be positive.
    /// Time fields are not range checked here, [`Calendar::instant`] rejects them.
    pub fn parse(literal: &str) -> Option<Self> {
        let value = literal.trim();
        if !value.is_ascii() {
            return None;
        }
        let result = match value.len() {
            Self::YEAR_LEN => Self::new(parse_digits(value)?, 1, 1, 0, 0, 0),
            Self::DATETIME_LEN => {
                let bytes = value.as_bytes();
                if bytes[4] != b'-'
                    || bytes[7] != b'-'
                    || bytes[10] != b' '
                    || bytes[13] != b':'
                    || bytes[16] != b':'
                {
                    return None;
                }
                Self::new(
                    parse_digits(&value[0..4])?,
                    parse_digits(&value[5..7])?,
                    parse_digits(&value[8..10])?,
                    parse_digits(&value[11..13])?,
                    parse_digits(&value[14..16])?,
                    parse_digits(&value[17..19])?,
                )
            }
            _ => return None,
        };
        if result.year <= 0 || result.month == 0 || result.day == 0 {
            return None;
        }
        Some(result)
    }

    fn from_local_seconds(local: i64) -> Self {
        let (year, month, day) = civil_from_days(local.div_euclid(SECS_IN_DAY));
        let secs = local.rem_euclid(SECS_IN_DAY);
        Self::new(
            year,
            month,
            day,
            (secs / 3600) as u8,
            (secs % 3600 / 60) as u8,
            (secs % 60) as u8,
        )
    }
}

/// Renders `YYYY-MM-DD HH:MM:SS`, negative years keep their sign and are not padded.
impl Display for DateComponents {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "{}", self.year)?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02} {:02}:{:02}:{:02}",
            self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Converts days since the Unix epoch into a proleptic Gregorian (year, month, day).
///
/// Total over every day count, including the instants outside the range of the time
/// zone database. Counts years from March so that the leap day is the last day of the year, then
/// splits the day count into 400 years eras.
pub fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let days = days + EPOCH_SHIFT;
    let era = days.div_euclid(DAYS_IN_400_YEARS);
    let day_of_era = days.rem_euclid(DAYS_IN_400_YEARS);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u8;
    let month = (if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    }) as u8;
    let year = year_of_era + era * 400 + (month <= 2) as i64;
    (year, month, day)
}

/// Inverse of [`civil_from_days`]: days since the Unix epoch of a proleptic Gregorian date.
pub fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let year = year - (month <= 2) as i64;
    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let shifted_month = (month as i64 + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_IN_400_YEARS + day_of_era - EPOCH_SHIFT
}

/// Proleptic Gregorian calendar bound to a single time zone.
///
/// Building one loads the time zone rules, use a [`CalendarCache`](crate::CalendarCache)
/// to build it only once per time zone.
#[derive(Debug, Clone)]
pub struct Calendar {
    time_zone: TimeZone,
    zone: jiff::tz::TimeZone,
}

impl Calendar {
    pub fn new(time_zone: &TimeZone) -> Result<Self> {
        Ok(Self {
            zone: time_zone.resolve()?,
            time_zone: time_zone.clone(),
        })
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Seconds since the Unix epoch of the local date and time in `components`.
    ///
    /// Returns `None` when the components do not name a real date and time: nothing
    /// wraps around, `2024-02-30` or `24:00:00` are rejected. A local time skipped by a
    /// DST transition moves forward by the length of the gap, a repeated local time
    /// resolves to its earlier occurrence.
    pub fn instant(&self, components: &DateComponents) -> Option<i64> {
        let datetime = civil::DateTime::new(
            i16::try_from(components.year).ok()?,
            i8::try_from(components.month).ok()?,
            i8::try_from(components.day).ok()?,
            i8::try_from(components.hour).ok()?,
            i8::try_from(components.minute).ok()?,
            i8::try_from(components.second).ok()?,
            0,
        )
        .ok()?;
        if let Ok(timestamp) = self.zone.to_ambiguous_timestamp(datetime).compatible() {
            return Some(timestamp.as_second());
        }
        // Past the supported range the offset of the closest instant is used.
        let local = days_from_civil(components.year, components.month, components.day)
            * SECS_IN_DAY
            + components.hour as i64 * 3600
            + components.minute as i64 * 60
            + components.second as i64;
        Some(local - self.offset_at(local) as i64)
    }

    fn offset_at(&self, timestamp: i64) -> i32 {
        let probe = timestamp.clamp(Timestamp::MIN.as_second(), Timestamp::MAX.as_second());
        Timestamp::from_second(probe)
            .map(|v| self.zone.to_offset(v).seconds())
            .unwrap_or_default()
    }

    /// Local date and time of `timestamp` (seconds since the Unix epoch).
    pub fn components(&self, timestamp: i64) -> DateComponents {
        let offset = self.offset_at(timestamp);
        DateComponents::from_local_seconds(timestamp.saturating_add(offset as i64))
    }
}
