//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use ms_core::DbType;

/// Metastore - key/value metadata attached to (object type, object id) pairs
#[derive(Parser, Debug)]
#[command(name = "ms")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output (logs every generated statement)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "metastore.yml")]
    pub config: String,

    /// Override database path (`:memory:` for in-memory)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Override database type
    #[arg(long, global = true, value_enum)]
    pub db_type: Option<DbTypeArg>,

    /// Override meta table name
    #[arg(short, long, global = true)]
    pub table: Option<String>,

    /// Override SQL dialect (mysql, postgres, sqlite, duckdb)
    #[arg(long, global = true)]
    pub dialect: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the CREATE TABLE statement for the configured dialect
    Ddl,

    /// Create the meta table if it does not exist
    Migrate,

    /// Print the value stored for a key
    Get(GetArgs),

    /// Store a value for a key
    Set(SetArgs),

    /// Print the full entry stored for a key
    Find(FindArgs),

    /// Remove the entry stored for a key
    Rm(KeyArgs),
}

/// The (object type, object id, key) triple addressing one entry
#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    /// Object type, e.g. `user`
    pub object_type: String,

    /// Object identifier
    pub object_id: String,

    /// Metadata key
    pub key: String,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub target: KeyArgs,

    /// Value printed when no entry exists
    #[arg(long, default_value = "")]
    pub default: String,

    /// Decode the stored value as JSON and pretty-print it
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the set command
#[derive(Args, Debug)]
pub struct SetArgs {
    #[command(flatten)]
    pub target: KeyArgs,

    /// Value to store
    pub value: String,

    /// Require the value to be valid JSON and store it normalized
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the find command
#[derive(Args, Debug)]
pub struct FindArgs {
    #[command(flatten)]
    pub target: KeyArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: FindOutput,
}

/// Output formats for find
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutput {
    /// One `column: value` line per field
    Text,
    /// JSON object
    Json,
}

/// Database types selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbTypeArg {
    /// DuckDB
    Duckdb,
    /// SQLite
    Sqlite,
}

impl From<DbTypeArg> for DbType {
    fn from(arg: DbTypeArg) -> Self {
        match arg {
            DbTypeArg::Duckdb => DbType::DuckDb,
            DbTypeArg::Sqlite => DbType::Sqlite,
        }
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
