//! Cuts intervals at calendar-day, night-shift and Saturday-noon boundaries.
//!
//! Rules are tried in a fixed order and the first match wins. Both halves are
//! fed back to the splitter until no rule applies anymore; what is left is a
//! terminal interval, the unit that gets aggregated and printed.

use crate::core::zone::{NIGHT_END_HOUR, NIGHT_START_HOUR, SATURDAY_CUTOFF_HOUR, TimeZoneRules};
use crate::models::interval::Interval;
use chrono::{DateTime, Datelike, FixedOffset, Timelike, Weekday};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    DayBoundary,
    NightStart,
    NightEnd,
    SaturdayNoon,
}

impl SplitRule {
    /// Priority order.
    pub const ALL: [SplitRule; 4] = [
        SplitRule::DayBoundary,
        SplitRule::NightStart,
        SplitRule::NightEnd,
        SplitRule::SaturdayNoon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SplitRule::DayBoundary => "day-boundary",
            SplitRule::NightStart => "night-start",
            SplitRule::NightEnd => "night-end",
            SplitRule::SaturdayNoon => "saturday-noon",
        }
    }

    /// Instant at which the rule cuts `iv`, or None when it does not apply.
    /// The second half starts on it; the first half stops one second earlier.
    ///
    /// The clock rules compare hour fields only, never full instants. Fields
    /// are read in the reporting zone whatever offset `iv` carries.
    pub fn boundary(
        &self,
        zone: &TimeZoneRules,
        iv: &Interval,
    ) -> Option<DateTime<FixedOffset>> {
        let start = zone.localize(&iv.start);
        let stop = zone.localize(&iv.stop);

        match self {
            SplitRule::DayBoundary => {
                // day-of-month only; longer spans are peeled one day per pass
                if start.day() == stop.day() {
                    return None;
                }
                Some(zone.start_of_next_day(&start))
            }
            SplitRule::NightStart => clock_cut(zone, &start, &stop, NIGHT_START_HOUR),
            SplitRule::NightEnd => clock_cut(zone, &start, &stop, NIGHT_END_HOUR),
            SplitRule::SaturdayNoon => {
                let noon = zone.clock_instant(&start, SATURDAY_CUTOFF_HOUR);
                if noon.weekday() != Weekday::Sat {
                    return None;
                }
                clock_cut(zone, &start, &stop, SATURDAY_CUTOFF_HOUR)
            }
        }
    }
}

/// Cut at `hour`:00 of the start day when start is before that hour and stop at/after it.
fn clock_cut(
    zone: &TimeZoneRules,
    start: &DateTime<FixedOffset>,
    stop: &DateTime<FixedOffset>,
    hour: u32,
) -> Option<DateTime<FixedOffset>> {
    if start.hour() < hour && stop.hour() >= hour {
        return Some(zone.clock_instant(start, hour));
    }
    None
}

#[derive(Debug)]
pub struct IntervalSplitter<'a> {
    zone: &'a TimeZoneRules,
}

impl<'a> IntervalSplitter<'a> {
    pub fn new(zone: &'a TimeZoneRules) -> Self {
        Self { zone }
    }

    /// Split once by the first matching rule. None means `iv` is terminal.
    ///
    /// Both ends are moved into the reporting zone first: the rules read
    /// day and hour fields, which depend on the offset an instant carries.
    pub fn split(&self, iv: &Interval) -> Option<(Interval, Interval)> {
        let iv = iv.in_zone(self.zone);
        SplitRule::ALL.iter().find_map(|rule| {
            let at = rule.boundary(self.zone, &iv)?;
            debug!(
                rule = rule.as_str(),
                start = %iv.start,
                stop = %iv.stop,
                boundary = %at,
                "split interval"
            );
            Some(iv.cut_at(at))
        })
    }

    /// Run the worklist until only terminal intervals are left.
    /// Every returned piece is expressed in the reporting zone.
    pub fn terminal_pieces(&self, iv: Interval) -> Vec<Interval> {
        let mut stack = vec![iv.in_zone(self.zone)];
        let mut out = Vec::new();

        while let Some(top) = stack.pop() {
            match self.split(&top) {
                Some((first, second)) => {
                    stack.push(first);
                    stack.push(second);
                }
                None => out.push(top),
            }
        }

        out
    }
}
