//! Accumulates terminal intervals into hour totals and a per-project,
//! per-day index used by the summary.

use super::splitter::IntervalSplitter;
use crate::core::zone::TimeZoneRules;
use crate::models::interval::Interval;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Running hour totals. Night buckets overlap the weekday/weekend ones:
/// a nightly weekday interval counts in both `nightly_weekday` and `weekday`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub weekday: f64,
    pub weekend: f64,
    pub nightly_weekday: f64,
    pub nightly_weekend: f64,
}

impl Totals {
    fn record(&mut self, iv: &Interval) {
        let hours = iv.duration_hours();
        let workday = iv.is_workday();

        if iv.is_nightly() {
            if workday {
                self.nightly_weekday += hours;
            } else {
                self.nightly_weekend += hours;
            }
        }

        if workday {
            self.weekday += hours;
        } else {
            self.weekend += hours;
        }
    }
}

/// day label → intervals, in insertion (split) order.
pub type DayIndex = BTreeMap<String, Vec<Interval>>;

#[derive(Debug)]
pub struct Aggregation<'a> {
    splitter: IntervalSplitter<'a>,
    pub totals: Totals,
    index: BTreeMap<i64, DayIndex>,
}

impl<'a> Aggregation<'a> {
    pub fn new(zone: &'a TimeZoneRules) -> Self {
        Self {
            splitter: IntervalSplitter::new(zone),
            totals: Totals::default(),
            index: BTreeMap::new(),
        }
    }

    /// Split `iv` down to terminal pieces and record each one.
    pub fn add(&mut self, iv: Interval) {
        for piece in self.splitter.terminal_pieces(iv) {
            self.commit(piece);
        }
    }

    fn commit(&mut self, iv: Interval) {
        debug!(
            project_id = iv.project_id,
            start = %iv.start,
            stop = %iv.stop,
            nightly = iv.is_nightly(),
            workday = iv.is_workday(),
            "terminal interval"
        );

        self.totals.record(&iv);
        self.index
            .entry(iv.project_id)
            .or_default()
            .entry(iv.day_label())
            .or_default()
            .push(iv);
    }

    /// Distinct project ids with entries, without the unassigned id 0.
    pub fn project_ids(&self) -> BTreeSet<i64> {
        self.index.keys().copied().filter(|id| *id != 0).collect()
    }

    /// Per-project day index, projects ascending by id.
    pub fn projects(&self) -> &BTreeMap<i64, DayIndex> {
        &self.index
    }

    pub fn interval_count(&self) -> usize {
        self.index
            .values()
            .flat_map(|days| days.values())
            .map(Vec::len)
            .sum()
    }
}
