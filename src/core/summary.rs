//! Text rendering of an aggregation.

use crate::core::calculator::aggregation::{Aggregation, DayIndex, Totals};
use crate::models::interval::Interval;
use crate::models::project::{ProjectNames, project_name};
use crate::utils::formatting::hours2;

/// Days ascending by label, intervals within a day ascending by start.
///
/// Labels are compared as plain strings ("Friday, ..." < "Saturday, ...").
pub fn ordered_days(days: &DayIndex) -> Vec<(&str, Vec<&Interval>)> {
    days.iter()
        .map(|(label, entries)| {
            let mut sorted: Vec<&Interval> = entries.iter().collect();
            sorted.sort_by_key(|iv| iv.start);
            (label.as_str(), sorted)
        })
        .collect()
}

pub fn render_totals(totals: &Totals) -> String {
    let mut out = String::from("Summary: \n");
    out += &format!("\nTotal weekday: {}", hours2(totals.weekday));
    out += &format!("\nTotal weekend: {}", hours2(totals.weekend));
    out += &format!("\nTotal nightly (weekday): {}", hours2(totals.nightly_weekday));
    out += &format!("\nTotal nightly (weekend): {}", hours2(totals.nightly_weekend));
    out
}

pub fn render_entry(iv: &Interval) -> String {
    format!(
        "\n----{}: {}[{}]",
        iv.clock_range(),
        iv.description,
        iv.shift_label()
    )
}

/// Full summary. Never fails: unknown project names render empty.
pub fn render(aggregation: &Aggregation<'_>, names: &ProjectNames) -> String {
    let mut out = render_totals(&aggregation.totals);

    for (project_id, days) in aggregation.projects() {
        out += "\nProject name: ";
        out += project_name(names, *project_id);

        for (label, entries) in ordered_days(days) {
            out += "\n-";
            out += label;
            for iv in entries {
                out += &render_entry(iv);
            }
        }

        out.push('\n');
    }

    out
}
