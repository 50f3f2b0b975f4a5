//! Where time entries and project names come from.
//!
//! The report only needs two things from the outside world: the raw entries
//! and the display names of the projects they reference. Remote API clients
//! plug in behind `EntrySource`; the CLI ships a file-backed one that reads
//! Toggl JSON exports.

use crate::errors::{AppError, AppResult};
use crate::models::project::ProjectNames;
use crate::models::raw_entry::RawEntry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub trait EntrySource {
    fn fetch_entries(&self) -> AppResult<Vec<RawEntry>>;

    /// Names for the given ids only.
    fn fetch_project_names(&self, ids: &[i64]) -> AppResult<ProjectNames>;
}

/// Reads a JSON array of time entries and an optional `{ "<id>": "<name>" }` map.
pub struct FileSource {
    entries: PathBuf,
    projects: Option<PathBuf>,
}

impl FileSource {
    pub fn new(entries: impl Into<PathBuf>, projects: Option<PathBuf>) -> Self {
        Self {
            entries: entries.into(),
            projects,
        }
    }
}

fn read_input(path: &Path) -> AppResult<String> {
    fs::read_to_string(path)
        .map_err(|e| AppError::Source(format!("cannot read {}: {e}", path.display())))
}

impl EntrySource for FileSource {
    fn fetch_entries(&self) -> AppResult<Vec<RawEntry>> {
        let content = read_input(&self.entries)?;
        let entries: Vec<RawEntry> = serde_json::from_str(&content)?;
        debug!(path = %self.entries.display(), count = entries.len(), "loaded entries");
        Ok(entries)
    }

    fn fetch_project_names(&self, ids: &[i64]) -> AppResult<ProjectNames> {
        let Some(path) = &self.projects else {
            if !ids.is_empty() {
                warn!(count = ids.len(), "no project file given, names will be empty");
            }
            return Ok(ProjectNames::new());
        };

        let content = read_input(path)?;
        let mut all: HashMap<i64, String> = serde_json::from_str(&content)?;

        let mut names = ProjectNames::with_capacity(ids.len());
        for id in ids {
            match all.remove(id) {
                Some(name) => {
                    names.insert(*id, name);
                }
                None => warn!(project_id = id, "project name not found"),
            }
        }

        Ok(names)
    }
}

/// In-memory source, handy for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    pub entries: Vec<RawEntry>,
    pub names: ProjectNames,
}

impl EntrySource for StaticSource {
    fn fetch_entries(&self) -> AppResult<Vec<RawEntry>> {
        Ok(self.entries.clone())
    }

    fn fetch_project_names(&self, ids: &[i64]) -> AppResult<ProjectNames> {
        Ok(ids
            .iter()
            .filter_map(|id| self.names.get(id).map(|name| (*id, name.clone())))
            .collect())
    }
}
