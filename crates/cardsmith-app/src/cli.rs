//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cardsmith",
    version,
    about = "Generate vCard contact files from CSV contact lists"
)]
pub struct Cli {
    /// Configuration file (defaults to `cardsmith.toml` if present).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build one card per CSV row and write them to a single `.vcf` file.
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// `;`-delimited CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Destination name (defaults to the CSV file stem).
    #[arg(long, short, value_name = "NAME")]
    pub output: Option<String>,

    /// Append to an existing destination instead of replacing it.
    #[arg(long)]
    pub keep_existing: bool,

    /// Print each rendered card to stdout.
    #[arg(long)]
    pub view: bool,
}
