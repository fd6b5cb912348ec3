use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// CLI arguments for the javadecl binary.
#[derive(Parser, Debug)]
#[command(
    name = "javadecl",
    version,
    about = "Generates TypeScript declaration files from extracted Java type declarations"
)]
pub struct CliArgs {
    /// JSON file, or directory of JSON files, holding extracted type definitions.
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Output directory.
    #[arg(short = 'o', long = "out")]
    pub out_dir: Option<PathBuf>,

    /// Path to a javadecl.json configuration file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// What to write: declaration files, or the loaded definitions as JSON.
    #[arg(short = 'f', long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Qualified-name prefixes to translate. Everything when empty.
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Qualified-name prefixes to leave out.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Name fragments; types and members mentioning one are dropped.
    #[arg(long, value_delimiter = ',')]
    pub blacklist: Vec<String>,

    /// Also write an index.d.ts referencing every generated file.
    #[arg(long)]
    pub index: bool,

    /// Spaces per indentation level.
    #[arg(long)]
    pub indent: Option<usize>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// TypeScript declaration files.
    #[default]
    Ts,
    /// `dump.json` with the loaded definitions.
    Json,
}
