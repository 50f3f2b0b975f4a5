// src/export/model.rs

use crate::core::calculator::aggregation::{Aggregation, Totals};
use crate::core::summary::ordered_days;
use crate::models::interval::Interval;
use crate::models::project::{ProjectNames, project_name};
use serde::Serialize;

/// Flat row, one per terminal interval (CSV).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct IntervalExport {
    pub project_id: i64,
    pub project: String,
    pub day: String,
    pub start: String,
    pub stop: String,
    pub description: String,
    pub shift: String,
    pub workday: bool,
    pub hours: f64,
}

impl IntervalExport {
    fn from_interval(iv: &Interval, project: &str, day: &str) -> Self {
        Self {
            project_id: iv.project_id,
            project: project.to_string(),
            day: day.to_string(),
            start: iv.start.to_rfc3339(),
            stop: iv.stop.to_rfc3339(),
            description: iv.description.clone(),
            shift: iv.shift_label().to_string(),
            workday: iv.is_workday(),
            hours: iv.duration_hours(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub day: String,
    pub entries: Vec<IntervalExport>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ProjectExport {
    pub project_id: i64,
    pub name: String,
    pub days: Vec<DayExport>,
}

/// Nested document (JSON): totals plus projects → days → entries.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub zone: String,
    pub totals: Totals,
    pub projects: Vec<ProjectExport>,
}

impl SummaryExport {
    /// Same ordering as the text summary.
    pub fn build(aggregation: &Aggregation<'_>, names: &ProjectNames, zone: &str) -> Self {
        let projects = aggregation
            .projects()
            .iter()
            .map(|(id, days)| {
                let name = project_name(names, *id);
                ProjectExport {
                    project_id: *id,
                    name: name.to_string(),
                    days: ordered_days(days)
                        .into_iter()
                        .map(|(label, entries)| DayExport {
                            day: label.to_string(),
                            entries: entries
                                .into_iter()
                                .map(|iv| IntervalExport::from_interval(iv, name, label))
                                .collect(),
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            zone: zone.to_string(),
            totals: aggregation.totals,
            projects,
        }
    }

    /// Flattened rows in report order.
    pub fn rows(&self) -> Vec<IntervalExport> {
        self.projects
            .iter()
            .flat_map(|p| p.days.iter())
            .flat_map(|d| d.entries.iter().cloned())
            .collect()
    }
}
