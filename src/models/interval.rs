use crate::core::zone::{NIGHT_END_HOUR, NIGHT_START_HOUR, SATURDAY_CUTOFF_HOUR, TimeZoneRules};
use chrono::{DateTime, Datelike, Duration, FixedOffset, Timelike, Weekday};

/// A time entry inside the engine, with both ends in the reporting zone.
///
/// `start < stop` is not guaranteed: bad source data flows through and shows
/// up as a negative duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub project_id: i64,
    pub description: String,
    pub tags: Vec<String>,
    pub start: DateTime<FixedOffset>,
    pub stop: DateTime<FixedOffset>,
}

impl Interval {
    pub fn with_start(&self, start: DateTime<FixedOffset>) -> Self {
        Self {
            start,
            ..self.clone()
        }
    }

    pub fn with_stop(&self, stop: DateTime<FixedOffset>) -> Self {
        Self {
            stop,
            ..self.clone()
        }
    }

    /// Same interval with both ends expressed in `zone`.
    pub fn in_zone(&self, zone: &TimeZoneRules) -> Self {
        Self {
            start: zone.localize(&self.start),
            stop: zone.localize(&self.stop),
            ..self.clone()
        }
    }

    /// Cut at `boundary`: the first half ends one second before it, the
    /// second half starts on it.
    pub fn cut_at(&self, boundary: DateTime<FixedOffset>) -> (Self, Self) {
        (
            self.with_stop(boundary - Duration::seconds(1)),
            self.with_start(boundary),
        )
    }

    /// Signed length in hours.
    pub fn duration_hours(&self) -> f64 {
        (self.stop - self.start).num_milliseconds() as f64 / 3_600_000.0
    }

    /// Night shift: the stop hour is at/before 6AM or at/after 9PM.
    /// Only the hour field is compared.
    pub fn is_nightly(&self) -> bool {
        let hour = self.stop.hour();
        hour <= NIGHT_END_HOUR || hour >= NIGHT_START_HOUR
    }

    /// Monday to Friday by start day, or anything stopping on Saturday before noon.
    pub fn is_workday(&self) -> bool {
        if !matches!(self.start.weekday(), Weekday::Sat | Weekday::Sun) {
            return true;
        }
        self.stop.weekday() == Weekday::Sat && self.stop.hour() < SATURDAY_CUTOFF_HOUR
    }

    pub fn shift_label(&self) -> &'static str {
        if self.is_nightly() { "NIGHT" } else { "DAY" }
    }

    /// Grouping key, e.g. "Friday, 15/11/2019".
    pub fn day_label(&self) -> String {
        self.start.format("%A, %d/%m/%Y").to_string()
    }

    /// 12-hour clock range, e.g. "5:03PM - 8:59PM".
    pub fn clock_range(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%-I:%M%p"),
            self.stop.format("%-I:%M%p")
        )
    }
}
