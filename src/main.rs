//! Command-line entry point: regenerate `chunks.json` from appendix files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use syllabus_chunks::Pipeline;

/// Regenerate the RAG chunk collection from syllabus appendices.
///
/// Chunk sizes and placeholder patterns are compiled in; only the input and
/// output locations can be changed.
#[derive(Parser, Debug)]
#[command(name = "syllabus-chunks", version, about)]
struct Args {
    /// Directory holding one `<appendix>.json` per appendix
    #[arg(long, default_value = "rag/appendices")]
    input: PathBuf,

    /// Where to write the chunk collection
    #[arg(long, default_value = "rag/chunks.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let pipeline = Pipeline::default();

    let report = pipeline
        .regenerate(&args.input, &args.output)
        .with_context(|| {
            format!(
                "failed to regenerate chunks from {}",
                args.input.display()
            )
        })?;

    for appendix in &report.appendices {
        println!("\n{appendix}");
    }
    println!("{}", report.stats);
    if !report.dropped.is_empty() {
        println!(
            "Dropped {} undersized chunk(s) with no neighbour to merge into",
            report.dropped.len()
        );
    }
    println!("\nWritten to: {}", args.output.display());

    Ok(())
}
