#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset};
use rtogglreport::core::zone::TimeZoneRules;
use rtogglreport::models::interval::Interval;
use rtogglreport::models::raw_entry::RawEntry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const FAKE_ENTRY_JSON: &str = r#"[
    {
        "id": 123,
        "guid": "fakeguid",
        "wid": 123,
        "pid": 123,
        "tid": 123,
        "billable": true,
        "start": "2019-11-15T21:03:12+00:00",
        "stop": "2019-11-16T15:16:03+00:00",
        "duration": 65571,
        "description": "This is a fake task",
        "duronly": false,
        "at": "2019-11-16T15:16:03+00:00",
        "uid": 123,
        "tags": ["Extra"]
    }
]"#;

pub const FAKE_PROJECTS_JSON: &str = r#"{ "123": "fakeproject" }"#;

/// Full text summary for `FAKE_ENTRY_JSON` with project 123 named "fakeproject".
pub const FAKE_SUMMARY: &str = "Summary: \n\
\nTotal weekday: 18.21\
\nTotal weekend: 0.00\
\nTotal nightly (weekday): 9.00\
\nTotal nightly (weekend): 0.00\
\nProject name: fakeproject\
\n-Friday, 15/11/2019\
\n----5:03PM - 8:59PM: This is a fake task[DAY]\
\n----9:00PM - 11:59PM: This is a fake task[NIGHT]\
\n-Saturday, 16/11/2019\
\n----12:00AM - 5:59AM: This is a fake task[NIGHT]\
\n----6:00AM - 11:16AM: This is a fake task[DAY]\
\n";

pub fn rtr() -> Command {
    cargo_bin_cmd!("rtogglreport")
}

pub fn zone() -> TimeZoneRules {
    TimeZoneRules::new("Dominican Republic Time", -4).expect("valid offset")
}

/// Parse an RFC 3339 timestamp and move it into the reporting zone.
pub fn at(ts: &str) -> DateTime<FixedOffset> {
    zone().localize(&DateTime::parse_from_rfc3339(ts).expect("valid timestamp"))
}

/// Interval with local (UTC-4) timestamps given as "YYYY-MM-DDTHH:MM:SS".
pub fn interval(pid: i64, start: &str, stop: &str) -> Interval {
    Interval {
        project_id: pid,
        description: format!("task {pid}"),
        tags: vec!["Extra".to_string()],
        start: at(&format!("{start}-04:00")),
        stop: at(&format!("{stop}-04:00")),
    }
}

pub fn raw_entry(pid: i64, start: &str, stop: &str, tags: &[&str]) -> RawEntry {
    RawEntry {
        pid,
        description: format!("task {pid}"),
        start: start.to_string(),
        stop: Some(stop.to_string()),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn secs_to_hours(secs: i64) -> f64 {
    secs as f64 / 3600.0
}

/// Unique path inside the system temp dir, with any previous file removed.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtogglreport.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write `content` to a fresh temp file and return its path as a string.
pub fn write_temp(name: &str, ext: &str, content: &str) -> String {
    let path = temp_path(name, ext);
    fs::write(&path, content).expect("write temp file");
    path.to_string_lossy().to_string()
}
