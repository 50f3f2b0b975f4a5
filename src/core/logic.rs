use crate::config::Config;
use crate::core::calculator::aggregation::Aggregation;
use crate::core::summary;
use crate::core::zone::TimeZoneRules;
use crate::errors::AppResult;
use crate::models::project::ProjectNames;
use crate::models::raw_entry::RawEntry;
use crate::source::EntrySource;
use tracing::{debug, info};

/// Aggregated report plus the names resolved for it.
pub struct Report<'a> {
    pub aggregation: Aggregation<'a>,
    pub names: ProjectNames,
}

impl Report<'_> {
    pub fn render(&self) -> String {
        summary::render(&self.aggregation, &self.names)
    }
}

pub struct ReportLogic;

impl ReportLogic {
    /// Feed every entry carrying `tag` into a fresh aggregation.
    ///
    /// An entry is added once however many of its tags match, so a
    /// duplicated tag does not double its hours.
    pub fn build<'a>(entries: &[RawEntry], zone: &'a TimeZoneRules, tag: &str) -> Aggregation<'a> {
        let mut aggregation = Aggregation::new(zone);

        for entry in entries {
            if !entry.has_tag(tag) {
                debug!(pid = entry.pid, description = %entry.description, "skipping entry without tag");
                continue;
            }
            aggregation.add(entry.to_interval(zone));
        }

        aggregation
    }

    /// Fetch, aggregate and resolve project names. All source errors surface
    /// here, before anything is rendered.
    pub fn collect<'a, S: EntrySource + ?Sized>(
        source: &S,
        zone: &'a TimeZoneRules,
        cfg: &Config,
    ) -> AppResult<Report<'a>> {
        let entries = source.fetch_entries()?;
        let aggregation = Self::build(&entries, zone, &cfg.tag_filter);

        let ids: Vec<i64> = aggregation.project_ids().into_iter().collect();
        let names = source.fetch_project_names(&ids)?;

        info!(
            entries = entries.len(),
            intervals = aggregation.interval_count(),
            projects = ids.len(),
            zone = zone.name(),
            "report aggregated"
        );

        Ok(Report { aggregation, names })
    }

    /// Text summary for everything the source returns.
    pub fn generate<S: EntrySource + ?Sized>(source: &S, cfg: &Config) -> AppResult<String> {
        let zone = cfg.zone()?;
        let report = Self::collect(source, &zone, cfg)?;
        Ok(report.render())
    }
}
