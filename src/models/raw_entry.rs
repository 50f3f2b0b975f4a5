use super::interval::Interval;
use crate::core::zone::TimeZoneRules;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use tracing::warn;

/// A time entry as delivered by the entry source (Toggl v8 shape).
/// Only the fields the report needs are kept; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawEntry {
    /// Project id, 0 when the entry has no project.
    #[serde(default)]
    pub pid: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start: String,
    /// Missing for a running entry.
    #[serde(default)]
    pub stop: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl RawEntry {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    /// Convert into an engine interval in the configured zone.
    ///
    /// Timestamps that cannot be parsed fall back to the Unix epoch instead of
    /// failing: the report stays permissive about bad source data.
    pub fn to_interval(&self, zone: &TimeZoneRules) -> Interval {
        let start = parse_instant(&self.start, "start", self.pid, zone);
        let stop = match &self.stop {
            Some(stop) => parse_instant(stop, "stop", self.pid, zone),
            None => {
                warn!(pid = self.pid, description = %self.description, "entry has no stop timestamp");
                fallback_instant(zone)
            }
        };

        if stop < start {
            warn!(pid = self.pid, %start, %stop, "entry stops before it starts");
        }

        Interval {
            project_id: self.pid,
            description: self.description.clone(),
            tags: self.tags.clone().unwrap_or_default(),
            start,
            stop,
        }
    }
}

fn parse_instant(raw: &str, field: &str, pid: i64, zone: &TimeZoneRules) -> DateTime<FixedOffset> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(t) => zone.localize(&t),
        Err(e) => {
            warn!(pid, field, value = raw, error = %e, "unparseable timestamp");
            fallback_instant(zone)
        }
    }
}

fn fallback_instant(zone: &TimeZoneRules) -> DateTime<FixedOffset> {
    zone.localize(&DateTime::<Utc>::default())
}
