use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline;
use crate::core::staff::StaffDirectory;
use crate::errors::AppResult;
use crate::sink::api::ApiSink;
use crate::sink::{DryRunSink, ScheduleSink};
use crate::utils::RunLog;
use std::path::{Path, PathBuf};

/// Import reconciled schedules into the store via the REST API.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        dry_run,
        username,
        password,
        delay_ms,
    } = cmd
    {
        let input_dir = Path::new(&cfg.input_dir);
        let log = RunLog::new(Some(run_log_path(input_dir)));

        log.header("Schedule import");
        log.info(format!("Dry run: {}", dry_run));

        //
        // 1. Load the staff mapping (fatal when missing)
        //
        let directory = StaffDirectory::load(Path::new(&cfg.mapping_file))?;

        //
        // 2. Build the sink: dry runs never authenticate
        //
        let mut sink: Box<dyn ScheduleSink> = if *dry_run {
            Box::new(DryRunSink)
        } else {
            let user = username.as_deref().unwrap_or(&cfg.username);
            let pass = password.as_deref().unwrap_or(&cfg.password);
            let delay = delay_ms.unwrap_or(cfg.entry_delay_ms);
            let sink = ApiSink::login(&cfg.api_base_url, user, pass, delay)?;
            log.success("Authentication successful");
            Box::new(sink)
        };

        //
        // 3. Run the pipeline
        //
        pipeline::run(input_dir, &directory, sink.as_mut(), &log)?;
    }

    Ok(())
}

/// The run log lives next to the input directory.
fn run_log_path(input_dir: &Path) -> PathBuf {
    input_dir
        .parent()
        .unwrap_or(input_dir)
        .join("import-log.txt")
}
