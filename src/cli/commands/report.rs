use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::ReportLogic;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::source::FileSource;
use crate::ui::messages::info;
use crate::utils::formatting::hours2readable;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        entries,
        projects,
        format,
        file,
        force,
    } = cmd
    {
        let source = FileSource::new(
            expand_tilde(entries),
            projects.as_deref().map(expand_tilde),
        );

        let zone = cfg.zone()?;
        let report = ReportLogic::collect(&source, &zone, cfg)?;

        match file {
            Some(out) => {
                ExportLogic::export(&report, zone.name(), format, out, *force)?;
                let totals = &report.aggregation.totals;
                info(format!(
                    "Weekday {} | Weekend {} | Nightly {} / {}",
                    hours2readable(totals.weekday, false),
                    hours2readable(totals.weekend, false),
                    hours2readable(totals.nightly_weekday, false),
                    hours2readable(totals.nightly_weekend, false),
                ));
            }
            None if *format == ExportFormat::Text => {
                println!("{}", report.render());
            }
            None => {
                return Err(AppError::Export(format!(
                    "--file is required for {} output",
                    format.as_str()
                )));
            }
        }
    }
    Ok(())
}
