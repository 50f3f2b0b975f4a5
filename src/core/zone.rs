//! Fixed-offset calendar arithmetic for the configured reporting zone.
//!
//! The zone is a plain UTC offset: no DST, no tz database lookup. Every
//! instant handled by the engine has already been converted into it, so
//! `day()`, `hour()` and `weekday()` on those values are zone-local.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, NaiveTime, TimeZone};

pub const DEFAULT_ZONE_NAME: &str = "Dominican Republic Time";
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -4;

/// Hour at which the night shift starts (9PM).
pub const NIGHT_START_HOUR: u32 = 21;
/// Hour at which the night shift ends (6AM).
pub const NIGHT_END_HOUR: u32 = 6;
/// Saturday cut-off hour for the working week (12PM).
pub const SATURDAY_CUTOFF_HOUR: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeZoneRules {
    name: String,
    offset: FixedOffset,
}

impl TimeZoneRules {
    /// Build the rules for a zone `offset_hours` away from UTC.
    pub fn new(name: impl Into<String>, offset_hours: i32) -> AppResult<Self> {
        let offset = offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .filter(|_| offset_hours.abs() <= 23)
            .ok_or(AppError::InvalidOffset(offset_hours))?;

        Ok(Self {
            name: name.into(),
            offset,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Same instant, expressed in the configured zone.
    pub fn localize<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> DateTime<FixedOffset> {
        t.with_timezone(&self.offset)
    }

    /// Midnight of `t`'s calendar day.
    pub fn start_of_day(&self, t: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        let local = self.localize(t);
        self.at_local(local.date_naive().and_time(NaiveTime::default()))
    }

    /// One second before the following midnight.
    pub fn end_of_day(&self, t: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        self.start_of_next_day(t) - Duration::seconds(1)
    }

    /// Midnight of the calendar day after `t`'s.
    pub fn start_of_next_day(&self, t: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        self.start_of_day(t) + Duration::days(1)
    }

    /// `hour`:00:00 on `t`'s calendar day.
    pub fn clock_instant(&self, t: &DateTime<FixedOffset>, hour: u32) -> DateTime<FixedOffset> {
        self.start_of_day(t) + Duration::hours(i64::from(hour))
    }

    fn at_local(&self, naive: NaiveDateTime) -> DateTime<FixedOffset> {
        // a fixed offset never yields an ambiguous or missing local time
        self.offset
            .from_local_datetime(&naive)
            .single()
            .unwrap_or_else(|| self.offset.from_utc_datetime(&naive))
    }
}
