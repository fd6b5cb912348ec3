//! `javadecl.json` configuration and its merge with command-line arguments.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use javadecl_emitter::EmitOptions;
use javadecl_model::Blacklist;

use crate::cli::args::{CliArgs, OutputFormat};

pub const DEFAULT_INDENT: usize = 2;

/// Configuration file contents. Every key is optional; relative paths are
/// resolved against the file's directory.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JavadeclConfig {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
    #[serde(default)]
    pub blacklist: Option<Vec<String>>,
    #[serde(default)]
    pub index: Option<bool>,
    #[serde(default)]
    pub indent: Option<usize>,
}

/// Settings for one run, after merging the configuration file with the
/// command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub format: OutputFormat,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub blacklist: Vec<String>,
    pub emit_index: bool,
    pub indent: usize,
}

impl ResolvedConfig {
    /// Whether a qualified name passes the include and exclude prefixes.
    pub fn is_selected(&self, qualified_name: &str) -> bool {
        let included = self.include.is_empty()
            || self
                .include
                .iter()
                .any(|prefix| qualified_name.starts_with(prefix.as_str()));
        included
            && !self
                .exclude
                .iter()
                .any(|prefix| qualified_name.starts_with(prefix.as_str()))
    }

    pub fn blacklist(&self) -> Blacklist {
        Blacklist::new(self.blacklist.iter().cloned())
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            indent: " ".repeat(self.indent),
            emit_index: self.emit_index,
        }
    }
}

pub fn load_config(path: &Path) -> Result<JavadeclConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&source, path.parent().unwrap_or_else(|| Path::new("")))
        .with_context(|| format!("failed to parse config {}", path.display()))
}

/// Parses configuration text, resolving relative paths against `base_dir`.
pub fn parse_config(source: &str, base_dir: &Path) -> Result<JavadeclConfig> {
    let mut config: JavadeclConfig = serde_json::from_str(source)?;
    config.input = config.input.map(|p| base_dir.join(p));
    config.out_dir = config.out_dir.map(|p| base_dir.join(p));
    Ok(config)
}

/// Merges command-line arguments over the configuration file. A flag or
/// list given on the command line replaces the file's value.
pub fn resolve_config(args: &CliArgs, file: JavadeclConfig) -> Result<ResolvedConfig> {
    let Some(input) = args.input.clone().or(file.input) else {
        bail!("no input given; pass --input or set \"input\" in the config file");
    };
    let Some(out_dir) = args.out_dir.clone().or(file.out_dir) else {
        bail!("no output directory given; pass --out or set \"outDir\" in the config file");
    };
    Ok(ResolvedConfig {
        input,
        out_dir,
        format: args.format.or(file.format).unwrap_or_default(),
        include: prefer_cli(&args.include, file.include),
        exclude: prefer_cli(&args.exclude, file.exclude),
        blacklist: prefer_cli(&args.blacklist, file.blacklist),
        emit_index: args.index || file.index.unwrap_or(false),
        indent: args.indent.or(file.indent).unwrap_or(DEFAULT_INDENT),
    })
}

fn prefer_cli(cli: &[String], file: Option<Vec<String>>) -> Vec<String> {
    if cli.is_empty() {
        file.unwrap_or_default()
    } else {
        cli.to_vec()
    }
}
