use anyhow::Context;
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use regbookapp::config::{RegbookConfig, CONFIG_FILE_NAME};
use regbookapp::form::FormController;
use regbookapp::model::Field;
use regbookapp::records::RecordStore;
use regbookapp::store::fs_backend::FsSessionStorage;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "regbook", bin_name = "regbook", version)]
#[command(about = "Collect and manage validated registration records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Session to operate on (defaults to REGBOOK_SESSION or "default")
    #[arg(short, long, global = true)]
    pub session: Option<String>,

    /// Print the resulting form state as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stored records
    #[command(alias = "ls")]
    List,

    /// Fill in a new record and submit it
    #[command(alias = "n")]
    Add {
        /// Field values (e.g. name=Asha email=asha@example.com city=Surat)
        #[arg(value_parser = parse_assignment)]
        values: Vec<(Field, String)>,
    },

    /// Edit a stored record and submit the changes
    #[command(alias = "e")]
    Edit {
        /// Index of the record (as shown by `list`)
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        index: u64,

        /// Field values to change (e.g. city=Mumbai)
        #[arg(value_parser = parse_assignment)]
        values: Vec<(Field, String)>,
    },

    /// Delete a stored record
    #[command(alias = "rm")]
    Delete {
        /// Index of the record (as shown by `list`)
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        index: u64,
    },

    /// Drop every record in the current session
    EndSession,
}

/// Parses `field=value`. The value may be empty or contain further `=`.
pub fn parse_assignment(raw: &str) -> Result<(Field, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", raw))?;
    let field = name.parse::<Field>().map_err(|e| e.to_string())?;
    Ok((field, value.to_string()))
}

pub struct AppContext {
    pub form: FormController<FsSessionStorage>,
    pub json: bool,
}

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("REGBOOK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}

pub fn init_context(cli: &Cli) -> anyhow::Result<AppContext> {
    let dirs = ProjectDirs::from("com", "regbook", "regbook");
    let config_file = dirs.as_ref().map(|d| d.config_dir().join(CONFIG_FILE_NAME));
    let default_data_dir = dirs
        .as_ref()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("regbook"));

    let mut config = RegbookConfig::load(config_file.as_deref())?;
    if let Some(session) = &cli.session {
        config = config.with_session(session.clone());
    }

    let session_dir: PathBuf = config
        .session_path(&default_data_dir)
        .context("could not resolve the session directory")?;
    tracing::debug!(session = %config.session, dir = %session_dir.display(), "opening session");

    let storage = FsSessionStorage::new(session_dir);
    let form = FormController::new(RecordStore::open(storage, config.storage_key));

    Ok(AppContext {
        form,
        json: cli.json,
    })
}
