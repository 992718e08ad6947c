use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline;
use crate::core::staff::StaffDirectory;
use crate::errors::AppResult;
use crate::sink::sql::SqlScriptSink;
use crate::utils::RunLog;
use std::path::{Path, PathBuf};

/// Emit the reconciled schedules as a guarded-insert SQL script.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sql { out } = cmd {
        let input_dir = Path::new(&cfg.input_dir);
        let out_path = PathBuf::from(out.as_deref().unwrap_or(&cfg.sql_output));
        let log = RunLog::disabled();

        log.header("Schedule SQL generation");

        let directory = StaffDirectory::load(Path::new(&cfg.mapping_file))?;
        let mut sink = SqlScriptSink::new(out_path);

        pipeline::run(input_dir, &directory, &mut sink, &log)?;
    }

    Ok(())
}
