use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes the default
/// configuration file.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        info("Initializing rTogglReport…");

        let cfg = Config::init_file(path, *force)?;

        success(format!("Config file: {}", path.display()));
        println!("   zone       : {} (UTC{:+})", cfg.zone_name, cfg.utc_offset_hours);
        println!("   tag filter : {}", cfg.tag_filter);
    }
    Ok(())
}
