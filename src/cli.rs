use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "textseek")]
#[command(author, version, about = "Find files containing a keyword")]
#[command(long_about = "Recursively scans a directory, filters files by extension and prints\n\
    the absolute path of every file whose contents contain the keyword.\n\n\
    Exit codes:\n  \
    0 - Scan completed (matches printed to stdout, possibly none)\n  \
    1 - I/O error while scanning or reading a file\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory and print files containing the keyword
    Scan(ScanArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directory to scan (overrides config `scan.directory`)
    pub directory: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keyword to search for (overrides config `search.keyword`)
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Match keyword with exact casing
    #[arg(long)]
    pub case_sensitive: bool,

    /// File extensions to scan (comma-separated, e.g., .txt,.log)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Skip files that cannot be read instead of aborting
    #[arg(long)]
    pub skip_unreadable: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".textseek.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax
    Validate {
        /// Path to configuration file (default: .textseek.toml)
        #[arg(short, long, default_value = ".textseek.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
