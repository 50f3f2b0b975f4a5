mod common;
use common::{FAKE_ENTRY_JSON, FAKE_SUMMARY, interval, raw_entry, zone};
use rtogglreport::config::Config;
use rtogglreport::core::calculator::aggregation::Aggregation;
use rtogglreport::core::logic::ReportLogic;
use rtogglreport::core::summary::{render, render_totals};
use rtogglreport::models::project::ProjectNames;
use rtogglreport::models::raw_entry::RawEntry;
use rtogglreport::source::StaticSource;

fn fake_source() -> StaticSource {
    StaticSource {
        entries: serde_json::from_str(FAKE_ENTRY_JSON).unwrap(),
        names: ProjectNames::from([(123, "fakeproject".to_string())]),
    }
}

#[test]
fn test_fake_entry_end_to_end() {
    let report = ReportLogic::generate(&fake_source(), &Config::default()).unwrap();

    assert!(report.contains("Summary:"));
    assert!(report.contains("Project name: fakeproject"));
    assert_eq!(report, FAKE_SUMMARY);
}

#[test]
fn test_totals_header_has_two_decimals() {
    let z = zone();
    let mut agg = Aggregation::new(&z);
    agg.add(interval(1, "2019-11-13T10:00:00", "2019-11-13T11:20:00"));

    assert_eq!(
        render_totals(&agg.totals),
        "Summary: \n\nTotal weekday: 1.33\nTotal weekend: 0.00\
         \nTotal nightly (weekday): 0.00\nTotal nightly (weekend): 0.00"
    );
}

#[test]
fn test_entries_without_tag_are_ignored() {
    let entries = vec![
        raw_entry(5, "2019-11-13T14:00:00Z", "2019-11-13T16:00:00Z", &["Meeting"]),
        RawEntry {
            tags: None,
            ..raw_entry(6, "2019-11-13T14:00:00Z", "2019-11-13T16:00:00Z", &[])
        },
        raw_entry(7, "2019-11-13T14:00:00Z", "2019-11-13T15:00:00Z", &["extra"]),
    ];
    let z = zone();
    let agg = ReportLogic::build(&entries, &z, "Extra");

    assert_eq!(agg.interval_count(), 0);
    assert_eq!(agg.totals.weekday, 0.0);
    let text = render(&agg, &ProjectNames::new());
    assert!(!text.contains("Project name"));
    assert!(text.contains("Total weekday: 0.00"));
}

#[test]
fn test_tag_matched_once_among_many() {
    let entries = vec![raw_entry(
        5,
        "2019-11-13T14:00:00Z",
        "2019-11-13T16:00:00Z",
        &["Billable", "Extra", "Extra"],
    )];
    let z = zone();
    let agg = ReportLogic::build(&entries, &z, "Extra");

    assert_eq!(agg.interval_count(), 1);
    assert!((agg.totals.weekday - 2.0).abs() < 1e-9);
}

#[test]
fn test_days_sorted_by_label_not_by_date() {
    let z = zone();
    let mut agg = Aggregation::new(&z);
    agg.add(interval(9, "2019-11-16T10:00:00", "2019-11-16T11:00:00"));
    agg.add(interval(9, "2019-11-18T10:00:00", "2019-11-18T11:00:00"));

    let text = render(&agg, &ProjectNames::new());
    let monday = text.find("-Monday, 18/11/2019").unwrap();
    let saturday = text.find("-Saturday, 16/11/2019").unwrap();
    assert!(monday < saturday);
}

#[test]
fn test_entries_sorted_by_start_within_day() {
    let z = zone();
    let mut agg = Aggregation::new(&z);
    agg.add(interval(9, "2019-11-13T15:00:00", "2019-11-13T16:00:00"));
    agg.add(interval(9, "2019-11-13T09:00:00", "2019-11-13T10:00:00"));

    let text = render(&agg, &ProjectNames::new());
    let early = text.find("----9:00AM - 10:00AM").unwrap();
    let late = text.find("----3:00PM - 4:00PM").unwrap();
    assert!(early < late);
}

#[test]
fn test_unknown_and_unassigned_projects_render_empty_names() {
    let z = zone();
    let mut agg = Aggregation::new(&z);
    agg.add(interval(0, "2019-11-13T09:00:00", "2019-11-13T10:00:00"));
    agg.add(interval(77, "2019-11-13T09:00:00", "2019-11-13T10:00:00"));

    let text = render(&agg, &ProjectNames::new());
    assert_eq!(text.matches("\nProject name: \n-Wednesday, 13/11/2019").count(), 2);
}

#[test]
fn test_night_and_day_suffixes() {
    let z = zone();
    let mut agg = Aggregation::new(&z);
    agg.add(interval(3, "2019-11-13T22:00:00", "2019-11-13T23:00:00"));
    agg.add(interval(3, "2019-11-13T13:00:00", "2019-11-13T14:00:00"));

    let names = ProjectNames::from([(3, "ops".to_string())]);
    let text = render(&agg, &names);
    assert!(text.contains("----10:00PM - 11:00PM: task 3[NIGHT]"));
    assert!(text.contains("----1:00PM - 2:00PM: task 3[DAY]"));
    assert!(text.ends_with("[NIGHT]\n"));
}

#[test]
fn test_raw_entry_parses_toggl_json() {
    let entries: Vec<RawEntry> = serde_json::from_str(FAKE_ENTRY_JSON).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].pid, 123);
    assert!(entries[0].has_tag("Extra"));

    let sparse: Vec<RawEntry> =
        serde_json::from_str(r#"[{ "start": "2019-11-15T21:03:12+00:00", "description": "x" }]"#)
            .unwrap();
    assert_eq!(sparse[0].pid, 0);
    assert_eq!(sparse[0].stop, None);
    assert!(!sparse[0].has_tag("Extra"));
}

#[test]
fn test_raw_entry_converts_into_zone() {
    let z = zone();
    let entries: Vec<RawEntry> = serde_json::from_str(FAKE_ENTRY_JSON).unwrap();
    let iv = entries[0].to_interval(&z);

    assert_eq!(iv.start.to_rfc3339(), "2019-11-15T17:03:12-04:00");
    assert_eq!(iv.stop.to_rfc3339(), "2019-11-16T11:16:03-04:00");
}

#[test]
fn test_malformed_timestamps_are_tolerated() {
    let z = zone();
    let entries = vec![
        raw_entry(1, "not-a-date", "2019-11-13T16:00:00Z", &["Extra"]),
        RawEntry {
            stop: None,
            ..raw_entry(2, "2019-11-13T14:00:00Z", "", &["Extra"])
        },
    ];

    let agg = ReportLogic::build(&entries, &z, "Extra");
    assert!(agg.interval_count() > 0);

    let text = render(&agg, &ProjectNames::new());
    assert!(text.starts_with("Summary: \n"));
}

#[test]
fn test_readable_hours() {
    use rtogglreport::utils::{hours2, hours2readable};

    assert_eq!(hours2(18.213333), "18.21");
    assert_eq!(hours2(8.999444), "9.00");
    assert_eq!(hours2readable(18.213333, false), "18h 13m");
    assert_eq!(hours2readable(-1.5, true), "-01:30");
}
