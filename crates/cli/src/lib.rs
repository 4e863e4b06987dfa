mod locate;
mod schema;
mod stats;
mod tree;
mod view;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangar",
    version,
    about = "Inspect asset trees grouped by location",
    long_about = "Hangar arranges a snapshot of game assets into one tree per location \
                  (station, structure) and resolves any asset, however deeply nested, \
                  to the location it is stored at."
)]
pub struct Cli {
    /// Mirror log output on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the asset trees of a snapshot
    Tree {
        /// Path to a JSON snapshot of assets and locations
        #[arg(value_name = "SNAPSHOT")]
        path: PathBuf,
        /// Only print the tree of this location
        #[arg(long, value_name = "LOCATION_ID")]
        location: Option<i64>,
    },
    /// Show the location each asset is stored at
    Locate {
        /// Path to a JSON snapshot of assets and locations
        #[arg(value_name = "SNAPSHOT")]
        path: PathBuf,
        /// Item IDs to resolve
        #[arg(value_name = "ITEM_ID", required = true, allow_negative_numbers = true)]
        item_ids: Vec<i64>,
    },
    /// Summarize a snapshot
    Stats {
        /// Path to a JSON snapshot of assets and locations
        #[arg(value_name = "SNAPSHOT")]
        path: PathBuf,
    },
    /// Print the JSON schema of the snapshot format
    Schema,
}

impl Commands {
    /// Only commands that read a snapshot write logs.
    fn writes_logs(&self) -> bool {
        !matches!(self, Commands::Schema)
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = if cli.command.writes_logs() {
        hangar_core::logging::init_logging("cli", cli.verbose)
    } else {
        None
    };

    match cli.command {
        Commands::Tree { path, location } => tree::run(path, location),
        Commands::Locate { path, item_ids } => locate::run(path, item_ids),
        Commands::Stats { path } => stats::run(path),
        Commands::Schema => schema::run(),
    }
}

pub(crate) fn load(path: PathBuf) -> hangar_core::Result<hangar_core::AssetCollection> {
    let snapshot = hangar_core::Snapshot::load(&path)?;
    snapshot.validate()?;
    Ok(snapshot.build())
}
