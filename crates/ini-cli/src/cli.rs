//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Read and edit INI files by dotted key
#[derive(Parser, Debug)]
#[command(name = "ini")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write `key = value` instead of `key=value`
    #[arg(long, global = true, env = "INI_WHITESPACE")]
    pub whitespace: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the value stored at a dotted key
    ///
    /// Examples:
    ///   ini get app.ini db.host      # key `host` in section [db]
    ///   ini get app.ini db           # the whole [db] section
    Get {
        /// INI file to read
        file: PathBuf,

        /// Dotted key, e.g. `section.key`
        key: String,
    },

    /// Set one value and write the file
    Set {
        /// INI file to edit
        file: PathBuf,

        /// Dotted key, e.g. `section.key`
        key: String,

        /// Value to store
        value: String,

        /// Write to this file instead of editing in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply several `key=value` assignments in order
    ///
    /// Examples:
    ///   ini edit app.ini -s db.host=remote -s db.port=5433
    Edit {
        /// INI file to edit
        file: PathBuf,

        /// Assignment as `key=value`; may be repeated
        #[arg(short, long = "set", value_name = "KEY=VALUE", required = true)]
        settings: Vec<String>,

        /// Write to this file instead of editing in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print an INI file as a JSON object
    ToJson {
        /// INI file to read
        file: PathBuf,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },

    /// Print a JSON object file as INI
    FromJson {
        /// JSON file to read
        file: PathBuf,
    },
}
