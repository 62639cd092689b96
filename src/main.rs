use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use filedock::{logging, ConfigOverrides, FileDataStore, IngestConfig, Ingester};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "filedock", version, about = "Ingest text files into a SQLite file_data table")]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read every file in a directory and store it as a row
    Ingest {
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long)]
        input_dir: Option<PathBuf>,

        #[arg(short, long)]
        database: Option<PathBuf>,

        #[arg(short, long)]
        recursive: bool,

        /// Only ingest files with this extension (repeatable)
        #[arg(long = "ext")]
        extensions: Vec<String>,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print stored rows
    List {
        #[arg(short, long)]
        database: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// Print the number of stored rows
    Stats {
        #[arg(short, long)]
        database: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ingest {
            config,
            input_dir,
            database,
            recursive,
            extensions,
            json,
        } => {
            let base = match config {
                Some(path) => IngestConfig::load(&path)?,
                None => IngestConfig::default(),
            };
            let config = base.apply_overrides(ConfigOverrides {
                input_dir,
                database,
                recursive,
                extensions,
                log_level: cli.log_level,
            });

            logging::init_tracing(&config.log_level);
            debug!(?config, "resolved configuration");

            let store = FileDataStore::open(&config.database)?;
            let report = Ingester::new(config, &store).run()?;

            if json {
                let out = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize report")?;
                println!("{}", out);
            } else {
                println!("Run {}", report.run_id);
                println!("Ingested:  {}", report.ingested.len());
                println!("Failed:    {}", report.failed.len());
                for failure in &report.failed {
                    println!("  ✗ {}: {}", failure.path.display(), failure.error);
                }
            }
        }
        Command::List { database, json } => {
            logging::init_tracing(cli.log_level.as_deref().unwrap_or("info"));

            let store = FileDataStore::open(&database)?;
            let rows = store.list_rows()?;

            if json {
                let out =
                    serde_json::to_string_pretty(&rows).context("Failed to serialize rows")?;
                println!("{}", out);
            } else {
                for row in rows {
                    println!("{:>6}  {}  ({} bytes)", row.id, row.filename, row.content.len());
                }
            }
        }
        Command::Stats { database } => {
            logging::init_tracing(cli.log_level.as_deref().unwrap_or("info"));

            let store = FileDataStore::open(&database)?;
            println!("Rows: {}", store.row_count()?);
        }
    }

    Ok(())
}
