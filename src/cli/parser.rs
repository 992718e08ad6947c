use clap::{Parser, Subcommand};

/// Command-line interface definition for dienstplan-import
/// CLI application to reconcile weekly schedule tables into a store
#[derive(Parser)]
#[command(
    name = "dienstplan-import",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile weekly staff schedule tables into idempotent schedule records",
    long_about = None
)]
pub struct Cli {
    /// Override the row-dump input directory
    #[arg(global = true, long = "input")]
    pub input: Option<String>,

    /// Override the staff mapping file
    #[arg(global = true, long = "mapping")]
    pub mapping: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and input directory
    Init,

    /// Import schedules into the store via the REST API
    Import {
        /// Validate the pipeline without touching the store
        #[arg(long = "dry-run", help = "Log intended actions without any API call")]
        dry_run: bool,

        /// Override the configured API username
        #[arg(long = "username")]
        username: Option<String>,

        /// Override the configured API password
        #[arg(long = "password")]
        password: Option<String>,

        /// Minimum milliseconds between entry-creation calls
        #[arg(long = "delay-ms", help = "Minimum delay between entry requests (ms)")]
        delay_ms: Option<u64>,
    },

    /// Emit a guarded-insert SQL script instead of calling the API
    Sql {
        /// Output script path (defaults to the configured sql_output)
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
}
