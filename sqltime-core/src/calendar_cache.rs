use crate::{Calendar, Result, TimeZone};
use std::{
    collections::HashMap,
    ops::Deref,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Calendars already built, one per time zone.
///
/// Loading the rules of a time zone is expensive compared to a conversion, so every
/// calendar is built once and kept for the lifetime of the cache. Entries are never
/// evicted: the set of time zones a client talks to is small.
///
/// A single mutex guards the whole map. Looking up or creating a calendar and using
/// it happen in the same critical section: a [`CalendarRef`] keeps the lock until it is
/// dropped and [`CalendarCache::with_calendar`] releases it when the closure returns.
///
/// The cache is meant to be shared explicitly, usually inside an `Arc`, by everything
/// that parses or renders temporal values for the same client.
#[derive(Default, Debug)]
pub struct CalendarCache {
    calendars: Mutex<HashMap<TimeZone, Calendar>>,
}

/// Access to a cached calendar, holding the cache lock.
pub struct CalendarRef<'c> {
    calendars: MutexGuard<'c, HashMap<TimeZone, Calendar>>,
    time_zone: TimeZone,
}

impl Deref for CalendarRef<'_> {
    type Target = Calendar;

    fn deref(&self) -> &Self::Target {
        // The entry was inserted before the guard was handed out and nothing removes it.
        &self.calendars[&self.time_zone]
    }
}

impl CalendarCache {
    pub fn new() -> Self {
        Default::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TimeZone, Calendar>> {
        // Inserting is the only mutation and it either happens entirely or not at all.
        self.calendars.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure(calendars: &mut HashMap<TimeZone, Calendar>, time_zone: &TimeZone) -> Result<()> {
        if calendars.contains_key(time_zone) {
            return Ok(());
        }
        let calendar = Calendar::new(time_zone).map_err(|e| {
            log::warn!("{:#}", e);
            e
        })?;
        log::debug!("Created the calendar for the time zone `{}`", time_zone);
        calendars.insert(time_zone.clone(), calendar);
        Ok(())
    }

    /// Return the calendar for `time_zone`, building it the first time.
    ///
    /// Fails only if the time zone cannot be resolved, in which case nothing is cached.
    /// The cache stays locked until the returned reference is dropped.
    pub fn get_or_create(&self, time_zone: &TimeZone) -> Result<CalendarRef<'_>> {
        let mut calendars = self.lock();
        Self::ensure(&mut calendars, time_zone)?;
        Ok(CalendarRef {
            calendars,
            time_zone: time_zone.clone(),
        })
    }

    /// Run `f` with the calendar for `time_zone`, inside the critical section.
    pub fn with_calendar<R>(
        &self,
        time_zone: &TimeZone,
        f: impl FnOnce(&Calendar) -> R,
    ) -> Result<R> {
        let calendar = self.get_or_create(time_zone)?;
        Ok(f(&calendar))
    }

    /// Run `extract` and then, only if it produced a value, `f` with that value and the
    /// calendar for `time_zone`.
    ///
    /// Both closures run inside the same critical section. When `extract` returns `None`
    /// the time zone is neither resolved nor cached.
    pub fn with_extracted<T, R>(
        &self,
        time_zone: &TimeZone,
        extract: impl FnOnce() -> Option<T>,
        f: impl FnOnce(&Calendar, T) -> Option<R>,
    ) -> Result<Option<R>> {
        let mut calendars = self.lock();
        let Some(value) = extract() else {
            return Ok(None);
        };
        Self::ensure(&mut calendars, time_zone)?;
        Ok(f(&calendars[time_zone], value))
    }

    pub fn contains(&self, time_zone: &TimeZone) -> bool {
        self.lock().contains_key(time_zone)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
