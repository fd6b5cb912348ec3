#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;

use javadecl::cli::args::CliArgs;
use javadecl::cli::config::{JavadeclConfig, load_config, resolve_config};
use javadecl::cli::driver;

fn main() -> Result<()> {
    // JAVADECL_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    javadecl::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let file_config = match &args.config {
        Some(path) => load_config(path)?,
        None => JavadeclConfig::default(),
    };
    let config = resolve_config(&args, file_config)?;

    let summary = driver::run(&config)?;
    for skipped in &summary.skipped {
        eprintln!("warning: skipped {}: {}", skipped.path.display(), skipped.error);
    }
    eprintln!(
        "{} types, {} files written to {}",
        summary.types,
        summary.written.len(),
        config.out_dir.display()
    );
    Ok(())
}
