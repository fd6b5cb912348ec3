//! Loads extracted definitions, filters them and writes the output.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn};

use javadecl_emitter::{DeclarationGenerator, OutputFile};
use javadecl_model::{TypeDefinition, TypeTable};
use javadecl_reconcile::reconcile;

use crate::cli::args::OutputFormat;
use crate::cli::config::ResolvedConfig;

/// Name of the file written by [`OutputFormat::Json`].
pub const DUMP_FILE: &str = "dump.json";

/// An input document that could not be read or parsed.
#[derive(Debug, Clone)]
pub struct SkippedInput {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    /// Top-level definitions left after filtering.
    pub types: usize,
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedInput>,
}

pub fn run(config: &ResolvedConfig) -> Result<RunSummary> {
    let _span = info_span!("run", input = %config.input.display()).entered();
    let (definitions, skipped) = load_definitions(&config.input)?;
    let table = select(definitions, config);
    let types = table.len();
    info!(types, "selected definitions");

    let outputs = match config.format {
        OutputFormat::Json => vec![dump_json(&table)?],
        OutputFormat::Ts => generate(table, config),
    };
    let written = write_outputs(&config.out_dir, &outputs)?;
    Ok(RunSummary {
        types,
        written,
        skipped,
    })
}

/// Loads every definition under `input`: a single JSON document, or every
/// `*.json` file below a directory in path order. Documents that fail to
/// read or parse are skipped and returned alongside the definitions.
pub fn load_definitions(input: &Path) -> Result<(Vec<TypeDefinition>, Vec<SkippedInput>)> {
    let files = input_files(input)?;
    let mut definitions = Vec::new();
    let mut skipped = Vec::new();
    for path in files {
        match parse_document(&path) {
            Ok(mut defs) => {
                debug!(path = %path.display(), types = defs.len(), "loaded input");
                definitions.append(&mut defs);
            }
            Err(err) => {
                let error = format!("{err:#}");
                warn!(path = %path.display(), %error, "skipping input");
                skipped.push(SkippedInput { path, error });
            }
        }
    }
    Ok((definitions, skipped))
}

fn input_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        bail!("input {} does not exist", input.display());
    }
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(input).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", input.display()))?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().and_then(|e| e.to_str()) == Some("json")
        {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Parses one document: a JSON array of type definitions.
pub fn parse_document(path: &Path) -> Result<Vec<TypeDefinition>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&source).with_context(|| format!("failed to parse {}", path.display()))
}

/// Builds the type table from the definitions passing the include/exclude
/// prefixes and the blacklist.
pub fn select(definitions: Vec<TypeDefinition>, config: &ResolvedConfig) -> TypeTable {
    let blacklist = config.blacklist();
    definitions
        .into_iter()
        .filter(|def| config.is_selected(def.qualified_name()))
        .filter_map(|def| blacklist.filter(def))
        .collect()
}

fn dump_json(table: &TypeTable) -> Result<OutputFile> {
    let definitions: Vec<&TypeDefinition> = table.definitions().collect();
    let mut content =
        serde_json::to_string_pretty(&definitions).context("failed to serialize definitions")?;
    content.push('\n');
    Ok(OutputFile {
        name: DUMP_FILE.to_string(),
        content,
    })
}

fn generate(mut table: TypeTable, config: &ResolvedConfig) -> Vec<OutputFile> {
    let stats = reconcile(&mut table);
    info!(
        overloads = stats.overloads_restored,
        docs = stats.docs_backfilled,
        duplicates = stats.duplicates_removed,
        demoted = stats.accessors_demoted,
        "reconciled definitions"
    );
    DeclarationGenerator::new(config.emit_options()).generate(&table)
}

/// Writes every output under `out_dir`, creating it when missing.
pub fn write_outputs(out_dir: &Path, outputs: &[OutputFile]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create directory {}", out_dir.display()))?;
    let mut written = Vec::with_capacity(outputs.len());
    for output in outputs {
        let path = out_dir.join(&output.name);
        std::fs::write(&path, &output.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
